//! Coordinate parsing and coarse geometry helpers

use crate::error::{Error, Result};
use crate::types::{Segment, Volume};

/// Angular distance of one nautical mile, assuming a spherical earth
pub const NM_TO_RADIANS: f64 = 1852.0 / 6_371_000.0;

/// Parse a `DDMMSS[.fff]H DDDMMSS[.fff]H` coordinate pair into signed
/// radians, south and west negative
pub fn parse_latlon(latlon: &str) -> Result<(f64, f64)> {
    let mut tokens = latlon.split_whitespace();
    let (Some(lat), Some(lon), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(Error::InvalidLatLon(latlon.to_string()));
    };

    Ok((
        parse_coord(lat, latlon, Axis::Latitude)?,
        parse_coord(lon, latlon, Axis::Longitude)?,
    ))
}

/// Latitude of a coordinate pair (or bare latitude string), in radians
pub(crate) fn latitude(latlon: &str) -> Result<f64> {
    let token = latlon
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::InvalidLatLon(latlon.to_string()))?;
    parse_coord(token, latlon, Axis::Latitude)
}

#[derive(Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
}

/// Parse one `DDMMSS[.fff]H` / `DDDMMSS[.fff]H` token
fn parse_coord(token: &str, context: &str, axis: Axis) -> Result<f64> {
    let err = || Error::InvalidLatLon(context.to_string());

    if !token.is_ascii() {
        return Err(err());
    }
    let hemi = token.chars().next_back().ok_or_else(err)?;
    let body = &token[..token.len() - 1];

    let (digits, frac) = match body.find('.') {
        Some(dot) => (&body[..dot], &body[dot..]),
        None => (body, ""),
    };

    // Latitudes carry two degree digits, longitudes three
    let len = match (axis, hemi) {
        (Axis::Latitude, 'N' | 'S') => 6,
        (Axis::Longitude, 'E' | 'W') => 7,
        _ => return Err(err()),
    };
    if digits.len() != len || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    if !frac.is_empty() && (frac.len() < 2 || !frac[1..].bytes().all(|b| b.is_ascii_digit())) {
        return Err(err());
    }

    let deg: f64 = digits[..len - 4].parse().map_err(|_| err())?;
    let min: f64 = digits[len - 4..len - 2].parse().map_err(|_| err())?;
    let sec: f64 = format!("{}{}", &digits[len - 2..], frac)
        .parse()
        .map_err(|_| err())?;
    if min >= 60.0 || sec >= 60.0 {
        return Err(err());
    }

    let degrees = deg + min / 60.0 + sec / 3600.0;
    match hemi {
        'S' | 'W' => Ok((-degrees).to_radians()),
        _ => Ok(degrees.to_radians()),
    }
}

/// Degrees/minutes/seconds decomposition of an angle, for output formatting
///
/// Seconds are rounded first and the carry normalized mod 60, so e.g.
/// 59.7" formats as the next whole minute.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dms {
    pub deg: u32,
    pub min: u32,
    pub sec: u32,
    pub positive: bool,
}

impl Dms {
    pub fn from_radians(value: f64) -> Self {
        let degrees = value.to_degrees();
        let total = (degrees.abs() * 3600.0).round() as u32;
        let (min, sec) = (total / 60, total % 60);
        let (deg, min) = (min / 60, min % 60);
        Dms {
            deg,
            min,
            sec,
            positive: degrees >= 0.0,
        }
    }
}

/// Numeric value of a radius string such as `"2 nm"`
pub(crate) fn radius_nm(radius: &str) -> Result<f64> {
    radius
        .split_whitespace()
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| Error::InvalidRadius(radius.to_string()))
}

/// First token of a radius string, emitted verbatim by the converters
pub(crate) fn radius_value(radius: &str) -> Result<&str> {
    radius
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::InvalidRadius(radius.to_string()))
}

/// Approximate latitude span of a volume, in radians
///
/// Circles and arcs contribute their centre latitude plus/minus the radius
/// as an angular distance; lines contribute their vertex latitudes. This is
/// an enclosing bound good enough for coarse north/south filtering, not for
/// geometry.
pub fn min_max_latitude(volume: &Volume) -> Result<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for segment in &volume.boundary {
        match segment {
            Segment::Circle(circle) => {
                let lat = latitude(&circle.centre)?;
                let radius = radius_nm(&circle.radius)? * NM_TO_RADIANS;
                min = min.min(lat - radius);
                max = max.max(lat + radius);
            }
            Segment::Arc(arc) => {
                let lat = latitude(&arc.centre)?;
                let radius = radius_nm(&arc.radius)? * NM_TO_RADIANS;
                min = min.min(lat - radius);
                max = max.max(lat + radius);
            }
            Segment::Line(points) => {
                for point in points {
                    let lat = latitude(point)?;
                    min = min.min(lat);
                    max = max.max(lat);
                }
            }
        }
    }

    if min.is_finite() {
        Ok((min, max))
    } else {
        Err(Error::EmptyBoundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use serde_json::json;

    const EPSILON: f64 = 1e-9;

    fn degrees(d: f64, m: f64, s: f64) -> f64 {
        (d + m / 60.0 + s / 3600.0).to_radians()
    }

    #[test]
    fn parses_hemispheres_with_correct_sign() {
        let (lat, lon) = parse_latlon("513654N 0010545W").unwrap();
        assert!((lat - degrees(51.0, 36.0, 54.0)).abs() < EPSILON);
        assert!((lon + degrees(1.0, 5.0, 45.0)).abs() < EPSILON);

        let (lat, lon) = parse_latlon("521234S 0025432E").unwrap();
        assert!((lat + degrees(52.0, 12.0, 34.0)).abs() < EPSILON);
        assert!((lon - degrees(2.0, 54.0, 32.0)).abs() < EPSILON);
    }

    #[test]
    fn parses_fractional_seconds() {
        let (lat, _) = parse_latlon("513654.500N 0010545W").unwrap();
        assert!((lat - degrees(51.0, 36.0, 54.5)).abs() < EPSILON);
    }

    #[test]
    fn rejects_malformed_coordinates() {
        // Bad hemisphere letter
        assert_err!(parse_latlon("513654X 0010545W"));
        // Latitude/longitude digit counts swapped
        assert_err!(parse_latlon("0010545W 513654N"));
        // Too few digits
        assert_err!(parse_latlon("51365N 0010545W"));
        // Minutes and seconds out of range
        assert_err!(parse_latlon("516054N 0010545W"));
        assert_err!(parse_latlon("513660N 0010545W"));
        // Missing longitude
        assert_err!(parse_latlon("513654N"));
        // Trailing junk
        assert_err!(parse_latlon("513654N 0010545W extra"));
        // Empty fraction
        assert_err!(parse_latlon("513654.N 0010545W"));
    }

    #[test]
    fn dms_rounds_and_normalizes() {
        let dms = Dms::from_radians(degrees(51.0, 59.0, 59.7));
        assert_eq!((dms.deg, dms.min, dms.sec), (52, 0, 0));
        assert!(dms.positive);

        let dms = Dms::from_radians(-degrees(1.0, 5.0, 45.0));
        assert_eq!((dms.deg, dms.min, dms.sec), (1, 5, 45));
        assert!(!dms.positive);
    }

    #[test]
    fn radius_parsing() {
        assert_ok!(radius_nm("2 nm"));
        assert_eq!(radius_nm("2.5 nm").unwrap(), 2.5);
        assert_eq!(radius_value("2 nm").unwrap(), "2");
        assert_err!(radius_nm("fat nm"));
        assert_err!(radius_nm(""));
    }

    #[test]
    fn latitude_span_of_circle_volume() {
        let volume: Volume = serde_json::from_value(json!({
            "lower": "SFC",
            "upper": "2203 ft",
            "boundary": [
                {"circle": {"centre": "513654N 0010545W", "radius": "2 nm"}}
            ]
        }))
        .unwrap();

        let (min, max) = min_max_latitude(&volume).unwrap();
        let centre = degrees(51.0, 36.0, 54.0);
        assert!((min - (centre - 2.0 * NM_TO_RADIANS)).abs() < EPSILON);
        assert!((max - (centre + 2.0 * NM_TO_RADIANS)).abs() < EPSILON);
    }

    #[test]
    fn latitude_span_of_line_volume() {
        let volume: Volume = serde_json::from_value(json!({
            "lower": "SFC",
            "upper": "2203 ft",
            "boundary": [
                {"line": ["520000N 0010000W", "510000N 0010000W", "513000N 0003000W"]}
            ]
        }))
        .unwrap();

        let (min, max) = min_max_latitude(&volume).unwrap();
        assert!((min - 51f64.to_radians()).abs() < EPSILON);
        assert!((max - 52f64.to_radians()).abs() < EPSILON);
    }
}
