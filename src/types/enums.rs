use serde::{Deserialize, Serialize};
use std::fmt;

/// Airspace category, as published in the AIP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AirspaceType {
    Atz,
    Awy,
    Cta,
    Ctr,
    D,
    #[serde(rename = "D_OTHER")]
    DOther,
    Other,
    P,
    R,
    Tma,
}

/// Refinement of [`AirspaceType`] for UK-specific airspace kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LocalType {
    Dz,
    Glider,
    Gvs,
    Hirta,
    Ils,
    Laser,
    Matz,
    Noatz,
    Rat,
    Rmz,
    Tmz,
    Ul,
}

impl fmt::Display for LocalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LocalType::Dz => "DZ",
            LocalType::Glider => "GLIDER",
            LocalType::Gvs => "GVS",
            LocalType::Hirta => "HIRTA",
            LocalType::Ils => "ILS",
            LocalType::Laser => "LASER",
            LocalType::Matz => "MATZ",
            LocalType::Noatz => "NOATZ",
            LocalType::Rat => "RAT",
            LocalType::Rmz => "RMZ",
            LocalType::Tmz => "TMZ",
            LocalType::Ul => "UL",
        };
        f.write_str(s)
    }
}

/// ICAO airspace class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Class::A => "A",
            Class::B => "B",
            Class::C => "C",
            Class::D => "D",
            Class::E => "E",
            Class::F => "F",
            Class::G => "G",
        };
        f.write_str(s)
    }
}

/// Behavioral tags attached to a feature or volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rule {
    Intense,
    Loa,
    Nossr,
    Notam,
    Raz,
    Rmz,
    Si,
    Tmz,
    Tra,
}

/// Direction of travel along an arc segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcDirection {
    Cw,
    Ccw,
}
