use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Vertical limit of a volume
///
/// Parsed from the document strings `SFC`, `FLnnn` or `"<n> ft"`.
/// `ordinal()` maps all three onto a comparable feet-like scale and is used
/// only for relative comparison (filtering by ceiling), not for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Surface,
    FlightLevel(u16),
    Altitude(u32),
}

impl Level {
    /// Normalized value for ordering: SFC is 0, FLnnn is nnn x 100,
    /// an altitude is its value in feet
    pub fn ordinal(&self) -> u32 {
        match self {
            Level::Surface => 0,
            Level::FlightLevel(fl) => u32::from(*fl) * 100,
            Level::Altitude(ft) => *ft,
        }
    }

    /// Rendering for OpenAir/TNP output: altitudes drop the unit and gain
    /// an `ALT` suffix, everything else passes through unchanged
    pub(crate) fn render(&self) -> String {
        match self {
            Level::Surface => "SFC".to_string(),
            Level::FlightLevel(fl) => format!("FL{fl:03}"),
            Level::Altitude(ft) => format!("{ft}ALT"),
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::InvalidLevel(s.to_string());

        if s == "SFC" {
            Ok(Level::Surface)
        } else if let Some(fl) = s.strip_prefix("FL") {
            fl.parse().map(Level::FlightLevel).map_err(|_| err())
        } else if let Some(ft) = s.strip_suffix("ft") {
            ft.trim_end().parse().map(Level::Altitude).map_err(|_| err())
        } else {
            Err(err())
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Surface => f.write_str("SFC"),
            Level::FlightLevel(fl) => write!(f, "FL{fl:03}"),
            Level::Altitude(ft) => write!(f, "{ft} ft"),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
