//! OpenAir format converter

use crate::convert::boundary::{BoundaryEmitter, emit_boundary};
use crate::convert::{
    FilterFn, NameFn, TypeFn, default_filter, default_name, default_openair_type, ensure_ascii,
    header_lines, obstacle_volume,
};
use crate::error::Result;
use crate::geom::{Dms, parse_latlon, radius_value};
use crate::types::{Arc, ArcDirection, Circle, Feature, Obstacle, Volume};

/// OpenAir converter
///
/// Emits one record block per admitted volume: `AC` type, `AN` name,
/// `AL`/`AH` levels, then the boundary records (`DP`, `DC`, `DB`,
/// `V X=`, `V D=`), each block introduced by a `*` separator line.
///
/// # Example
///
/// ```
/// use airtext::Openair;
///
/// let converter = Openair::new().with_header("UK Airspace");
/// ```
pub struct Openair {
    filter: FilterFn,
    name: NameFn,
    airspace_type: TypeFn,
    header: Option<String>,
}

impl Openair {
    /// Create a converter with the default policies: admit everything,
    /// default naming, ATZ as `CTR`
    pub fn new() -> Self {
        Self {
            filter: default_filter(),
            name: default_name(),
            airspace_type: default_openair_type(),
            header: None,
        }
    }

    /// Replace the volume filter
    pub fn with_filter(mut self, filter: FilterFn) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the display-name resolver
    pub fn with_name_resolver(mut self, name: NameFn) -> Self {
        self.name = name;
        self
    }

    /// Replace the output-type resolver
    pub fn with_type_resolver(mut self, airspace_type: TypeFn) -> Self {
        self.airspace_type = airspace_type;
        self
    }

    /// Set a banner emitted as `*` comment lines before the first record
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Convert an airspace collection to OpenAir text
    pub fn convert(&self, airspace: &[Feature]) -> Result<String> {
        self.convert_with_obstacles(airspace, &[])
    }

    /// Convert an airspace collection plus point obstacles
    ///
    /// Obstacles run through the same filter and emission pipeline as a
    /// 0.5 nm circular volume from the surface to their elevation.
    pub fn convert_with_obstacles(
        &self,
        airspace: &[Feature],
        obstacles: &[Obstacle],
    ) -> Result<String> {
        let mut out = header_lines(self.header.as_deref(), '*');

        for feature in airspace {
            for volume in &feature.geometry {
                if (self.filter)(volume, feature) {
                    self.volume_lines(volume, feature, &mut out)?;
                }
            }
        }

        for obstacle in obstacles {
            let (feature, volume) = obstacle_volume(obstacle);
            if (self.filter)(&volume, &feature) {
                self.volume_lines(&volume, &feature, &mut out)?;
            }
        }

        let text = out.join("\n");
        ensure_ascii(&text)?;
        Ok(text)
    }

    fn volume_lines(&self, volume: &Volume, feature: &Feature, out: &mut Vec<String>) -> Result<()> {
        out.push("*".to_string());
        out.push(format!("AC {}", (self.airspace_type)(volume, feature)));
        out.push(format!("AN {}", (self.name)(volume, feature)));
        out.push(format!("AL {}", volume.lower.render()));
        out.push(format!("AH {}", volume.upper.render()));
        emit_boundary(self, &volume.boundary, out)
    }

    fn centre(&self, latlon: &str) -> Result<String> {
        Ok(format!("V X={}", format_latlon(latlon)?))
    }
}

impl Default for Openair {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundaryEmitter for Openair {
    fn point(&self, point: &str, out: &mut Vec<String>) -> Result<()> {
        out.push(format!("DP {}", format_latlon(point)?));
        Ok(())
    }

    fn circle(&self, circle: &Circle, out: &mut Vec<String>) -> Result<()> {
        out.push(self.centre(&circle.centre)?);
        out.push(format!("DC {}", radius_value(&circle.radius)?));
        Ok(())
    }

    fn arc(&self, arc: &Arc, from: &str, out: &mut Vec<String>) -> Result<()> {
        out.push(match arc.dir {
            ArcDirection::Cw => "V D=+".to_string(),
            ArcDirection::Ccw => "V D=-".to_string(),
        });
        out.push(self.centre(&arc.centre)?);
        out.push(format!(
            "DB {}, {}",
            format_latlon(from)?,
            format_latlon(&arc.to)?
        ));
        Ok(())
    }
}

/// `DD:MM:SS H DDD:MM:SS H` coordinate rendering
fn format_latlon(latlon: &str) -> Result<String> {
    let (lat, lon) = parse_latlon(latlon)?;
    let lat = Dms::from_radians(lat);
    let lon = Dms::from_radians(lon);

    Ok(format!(
        "{:02}:{:02}:{:02} {} {:03}:{:02}:{:02} {}",
        lat.deg,
        lat.min,
        lat.sec,
        if lat.positive { 'N' } else { 'S' },
        lon.deg,
        lon.min,
        lon.sec,
        if lon.positive { 'E' } else { 'W' },
    ))
}
