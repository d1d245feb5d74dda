//! Injectable classification strategies
//!
//! Each converter takes one function per concern (filtering, display name,
//! output type, and for TNP the class), so callers can override any single
//! policy without touching traversal or emission. The factories here build
//! the default policies; `openair_type`, `tnp_type` and `tnp_class` also
//! accept overrides for the ATZ and ILS cases, which vary between consumer
//! programs.

use crate::filter::Filter;
use crate::types::{AirspaceType, Class, Feature, LocalType, Rule, Volume};

pub type FilterFn = Box<dyn Fn(&Volume, &Feature) -> bool>;
pub type NameFn = Box<dyn Fn(&Volume, &Feature) -> String>;
pub type TypeFn = Box<dyn Fn(&Volume, &Feature) -> String>;
pub type ClassFn = Box<dyn Fn(&Volume, &Feature) -> Option<Class>>;

/// Default filter, admits everything
pub fn default_filter() -> FilterFn {
    Filter::new().into_fn()
}

/// Default display name
///
/// A volume-level name wins outright. Otherwise the feature name gains a
/// suffix derived from the localtype ("A/F" for non-ATZ airfields and
/// microlight strips, the literal localtype for DZ/GVS/HIRTA/ILS/LASER),
/// or "ATZ" for ATZ features, or "RAZ" when that rule applies.
pub fn default_name() -> NameFn {
    Box::new(|volume, feature| {
        if let Some(name) = &volume.name {
            return name.clone();
        }

        let suffix = if let Some(localtype) = feature.localtype {
            match localtype {
                LocalType::Noatz | LocalType::Ul => Some("A/F".to_string()),
                LocalType::Dz
                | LocalType::Gvs
                | LocalType::Hirta
                | LocalType::Ils
                | LocalType::Laser => Some(localtype.to_string()),
                _ => None,
            }
        } else if feature.airspace_type == AirspaceType::Atz {
            Some("ATZ".to_string())
        } else if feature.has_rule(volume, Rule::Raz) {
            Some("RAZ".to_string())
        } else {
            None
        };

        match suffix {
            Some(suffix) => format!("{} {}", feature.name, suffix),
            None => feature.name.clone(),
        }
    })
}

/// OpenAir type resolver
///
/// Output vocabulary: `A`-`G`, `P`, `Q`, `R`, `CTR`, `RMZ`, `TMZ`, `GSEC`,
/// `MATZ`, `OTHER`. The `atz` and `ils` arguments override the values
/// emitted for ATZs and ILS feathers.
pub fn openair_type(atz: impl Into<String>, ils: impl Into<String>) -> TypeFn {
    let atz = atz.into();
    let ils = ils.into();

    Box::new(move |volume, feature| {
        let kind = feature.airspace_type;
        let localtype = feature.localtype;

        if kind == AirspaceType::DOther && localtype == Some(LocalType::Glider) {
            "GSEC".to_string()
        } else if matches!(kind, AirspaceType::D | AirspaceType::DOther)
            || localtype == Some(LocalType::Dz)
        {
            "Q".to_string()
        } else if kind == AirspaceType::R {
            "R".to_string()
        } else if kind == AirspaceType::P {
            "P".to_string()
        } else if kind == AirspaceType::Atz {
            atz.clone()
        } else if localtype == Some(LocalType::Ils) {
            ils.clone()
        } else if localtype == Some(LocalType::Matz) {
            "MATZ".to_string()
        } else if localtype == Some(LocalType::Tmz) || feature.has_rule(volume, Rule::Tmz) {
            "TMZ".to_string()
        } else if localtype == Some(LocalType::Rmz) || feature.has_rule(volume, Rule::Rmz) {
            "RMZ".to_string()
        } else if matches!(
            localtype,
            Some(LocalType::Glider | LocalType::Noatz | LocalType::Ul)
        ) {
            "G".to_string()
        } else if localtype == Some(LocalType::Rat) {
            "A".to_string()
        } else {
            volume
                .class
                .or(feature.class)
                .map(|class| class.to_string())
                .unwrap_or_else(|| "OTHER".to_string())
        }
    })
}

/// OpenAir type resolver with the usual defaults (ATZ as `CTR`)
pub fn default_openair_type() -> TypeFn {
    openair_type("CTR", "OTHER")
}

/// TNP type resolver
///
/// Output vocabulary: `AWY`, `CTA/CTR`, `DANGER`, `GSEC`, `MATZ`, `OTHER`,
/// `PROHIBITED`, `RESTRICTED`, `RMZ`, `TMZ`.
pub fn tnp_type(ils: impl Into<String>) -> TypeFn {
    let ils = ils.into();

    Box::new(move |volume, feature| {
        let kind = feature.airspace_type;
        let localtype = feature.localtype;

        if kind == AirspaceType::D || localtype == Some(LocalType::Dz) {
            "DANGER".to_string()
        } else if kind == AirspaceType::P {
            "PROHIBITED".to_string()
        } else if kind == AirspaceType::R {
            "RESTRICTED".to_string()
        } else if matches!(
            kind,
            AirspaceType::Atz | AirspaceType::Cta | AirspaceType::Ctr | AirspaceType::Tma
        ) || localtype == Some(LocalType::Rat)
        {
            "CTA/CTR".to_string()
        } else if localtype == Some(LocalType::Matz) {
            "MATZ".to_string()
        } else if localtype == Some(LocalType::Tmz) || feature.has_rule(volume, Rule::Tmz) {
            "TMZ".to_string()
        } else if localtype == Some(LocalType::Rmz) || feature.has_rule(volume, Rule::Rmz) {
            "RMZ".to_string()
        } else if kind == AirspaceType::Awy {
            "AWY".to_string()
        } else if localtype == Some(LocalType::Ils) {
            ils.clone()
        } else if kind == AirspaceType::DOther && localtype == Some(LocalType::Glider) {
            "GSEC".to_string()
        } else if kind == AirspaceType::DOther {
            "DANGER".to_string()
        } else {
            "OTHER".to_string()
        }
    })
}

/// TNP type resolver with the usual defaults
pub fn default_tnp_type() -> TypeFn {
    tnp_type("OTHER")
}

/// TNP class resolver
///
/// Volume class wins over feature class; ATZs and ILS feathers take the
/// given fixed values (none by default), restricted area (temporary)
/// airspace is class A and glider sites class G. Anything else has no
/// class and renders as an empty field.
pub fn tnp_class(atz: Option<Class>, ils: Option<Class>) -> ClassFn {
    Box::new(move |volume, feature| {
        let localtype = feature.localtype;

        if let Some(class) = volume.class {
            Some(class)
        } else if let Some(class) = feature.class {
            Some(class)
        } else if feature.airspace_type == AirspaceType::Atz {
            atz
        } else if localtype == Some(LocalType::Ils) {
            ils
        } else if localtype == Some(LocalType::Rat) {
            Some(Class::A)
        } else if matches!(
            localtype,
            Some(LocalType::Glider | LocalType::Noatz | LocalType::Ul)
        ) {
            Some(Class::G)
        } else {
            None
        }
    })
}

/// TNP class resolver with the usual defaults
pub fn default_tnp_class() -> ClassFn {
    tnp_class(None, None)
}
