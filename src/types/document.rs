use crate::types::{Feature, Level, Volume};
use serde::{Deserialize, Serialize};

/// Top-level airspace document
///
/// Matches the structured YAML/JSON layout: `airspace` is required, the
/// other keys are optional. Schema validation is the caller's concern; the
/// types here assume a conformant document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub airspace: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loa: Vec<Loa>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub obstacle: Vec<Obstacle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<Release>,
}

/// Letter of Agreement overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loa {
    pub name: String,
    pub areas: Vec<LoaArea>,
}

/// One area within a LOA: features to add and volumes to replace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaArea {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replace: Vec<Replacement>,
}

/// Replacement of the volume identified by `id` with zero or more volumes
///
/// An empty `geometry` deletes the target volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replacement {
    pub id: String,
    pub geometry: Vec<Volume>,
}

/// Point obstacle, output as a synthetic 0.5 nm circular volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    #[serde(rename = "type")]
    pub obstacle_type: String,
    pub position: String,
    pub elevation: Level,
}

impl Obstacle {
    /// Display label for the obstacle type code; unknown codes fall back
    /// to the generic label
    pub fn label(&self) -> &'static str {
        match self.obstacle_type.as_str() {
            "BLDG" => "BUILDING",
            "BRDG" => "BRIDGE",
            "CHIM" => "CHIMNEY",
            "COOL" => "COOLING TOWER",
            "CRN" => "CRANE",
            "FLR" => "GAS FLARE",
            "MET" => "MET MAST",
            "MINE" => "MINE",
            "MISC" => "OBSTACLE",
            "MONT" => "MONUMENT",
            "OBST" => "OBSTACLE",
            "OIL" => "OIL REFINERY",
            "PLT" => "BUILDING",
            "POW" => "CHURCH",
            "PYL" => "PYLON",
            "RTM" => "RADIO MAST",
            "TURB-ON" => "WIND TURBINE",
            "WASTE" => "WASTE PIPE",
            _ => "OBSTACLE",
        }
    }
}

/// Dataset release metadata, passed through untransformed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub airac_date: String,
    pub timestamp: String,
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn obstacle_labels() {
        let mut obstacle: Obstacle = serde_json::from_value(json!({
            "type": "RTM",
            "position": "513654N 0010545W",
            "elevation": "1000 ft"
        }))
        .unwrap();

        assert_eq!(obstacle.label(), "RADIO MAST");

        obstacle.obstacle_type = "NO-SUCH-CODE".to_string();
        assert_eq!(obstacle.label(), "OBSTACLE");
    }

    #[test]
    fn dataset_optional_keys_default() {
        let dataset: Dataset = serde_json::from_value(json!({
            "airspace": []
        }))
        .unwrap();

        assert!(dataset.loa.is_empty());
        assert!(dataset.obstacle.is_empty());
        assert!(dataset.release.is_none());
    }
}
