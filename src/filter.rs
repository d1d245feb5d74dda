use crate::convert::FilterFn;
use crate::geom::min_max_latitude;
use crate::types::{AirspaceType, Feature, LocalType, Volume};

/// Predicate deciding whether a volume is included in output
///
/// All gates are AND-combined; any failing gate rejects the volume. The
/// default configuration admits everything.
///
/// The latitude bounds are radians. A volume is rejected only when its
/// approximate latitude span lies entirely outside `[south, north]`; if the
/// span cannot be computed the filter admits the volume and leaves the
/// format error to the conversion itself.
#[derive(Debug, Clone)]
pub struct Filter {
    /// Admit non-ATZ airfields
    pub noatz: bool,
    /// Admit microlight strips
    pub microlight: bool,
    /// Admit HIRTA, GVS and LASER areas
    pub hirta_gvs_laser: bool,
    /// Admit gliding sites
    pub gliding_site: bool,
    /// Reject volumes whose lower level ordinal is at or above this value
    pub max_level: Option<u32>,
    /// Northern latitude bound, radians
    pub north: Option<f64>,
    /// Southern latitude bound, radians
    pub south: Option<f64>,
    /// Exact (name, type) pairs to reject unconditionally
    pub exclude: Vec<(String, AirspaceType)>,
}

impl Filter {
    pub fn new() -> Self {
        Filter {
            noatz: true,
            microlight: true,
            hirta_gvs_laser: true,
            gliding_site: true,
            max_level: None,
            north: None,
            south: None,
            exclude: Vec::new(),
        }
    }

    pub fn admit(&self, volume: &Volume, feature: &Feature) -> bool {
        let localtype = feature.localtype;

        if self
            .exclude
            .iter()
            .any(|(name, kind)| *name == feature.name && *kind == feature.airspace_type)
        {
            return false;
        }

        if !self.noatz && localtype == Some(LocalType::Noatz) {
            return false;
        }

        if !self.microlight && localtype == Some(LocalType::Ul) {
            return false;
        }

        if !self.hirta_gvs_laser
            && matches!(
                localtype,
                Some(LocalType::Hirta | LocalType::Gvs | LocalType::Laser)
            )
        {
            return false;
        }

        if !self.gliding_site
            && feature.airspace_type == AirspaceType::Other
            && localtype == Some(LocalType::Glider)
        {
            return false;
        }

        if let Some(max_level) = self.max_level
            && volume.lower.ordinal() >= max_level
        {
            return false;
        }

        if (self.north.is_some() || self.south.is_some())
            && let Ok((min_lat, max_lat)) = min_max_latitude(volume)
        {
            if self.north.is_some_and(|north| min_lat > north) {
                return false;
            }
            if self.south.is_some_and(|south| max_lat < south) {
                return false;
            }
        }

        true
    }

    /// Box the filter as an injectable strategy for the converters
    pub fn into_fn(self) -> FilterFn {
        Box::new(move |volume, feature| self.admit(volume, feature))
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new()
    }
}
