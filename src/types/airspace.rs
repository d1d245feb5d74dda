use crate::types::{AirspaceType, ArcDirection, Class, Level, LocalType, Rule};
use serde::{Deserialize, Serialize};

/// One named airspace entity, owning an ordered list of volumes
///
/// Coordinates inside the geometry stay in their source DMS string form
/// (e.g. `"513654N 0010545W"`); the converters parse them on output. The
/// boundary-closing rule compares these strings directly, so normalizing
/// them here would change the emitted polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(rename = "type")]
    pub airspace_type: AirspaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localtype: Option<LocalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Class>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    pub geometry: Vec<Volume>,
}

impl Feature {
    /// Check a rule against the combined feature and volume rule sets
    pub fn has_rule(&self, volume: &Volume, rule: Rule) -> bool {
        self.rules.as_deref().is_some_and(|r| r.contains(&rule))
            || volume.rules.as_deref().is_some_and(|r| r.contains(&rule))
    }
}

/// One altitude-bounded region within a feature
///
/// `name`, `class` and `rules` override the parent feature's values when
/// present. `id` is the stable key targeted by overlay `replace` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seqno: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Class>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    pub lower: Level,
    pub upper: Level,
    pub boundary: Vec<Segment>,
}

/// One piece of a volume boundary
///
/// Serialized in the document's externally tagged form, i.e. a one-key
/// mapping of `circle`, `arc` or `line`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Circle(Circle),
    Arc(Arc),
    Line(Vec<String>),
}

/// Full circle around a centre point; radius keeps its source text
/// (e.g. `"2 nm"`) so the emitted value matches the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub centre: String,
    pub radius: String,
}

/// Arc from the previous segment's exit point to `to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub dir: ArcDirection,
    pub radius: String,
    pub centre: String,
    pub to: String,
}
