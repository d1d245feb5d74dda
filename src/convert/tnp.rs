//! TNP format converter

use crate::convert::boundary::{BoundaryEmitter, emit_boundary};
use crate::convert::{
    ClassFn, FilterFn, NameFn, TypeFn, default_filter, default_name, default_tnp_class,
    default_tnp_type, ensure_ascii, header_lines, obstacle_volume,
};
use crate::error::Result;
use crate::geom::{Dms, parse_latlon, radius_value};
use crate::types::{Arc, ArcDirection, Circle, Feature, Obstacle, Volume};

/// TNP converter
///
/// Emits `KEY=value` records per admitted volume, `#` record separators and
/// a trailing `#`/`END` footer. Records normally run `TITLE`, `TYPE`,
/// `CLASS`; when the class is undefined the `TYPE` and `CLASS` lines are
/// swapped so that the third line always carries a defined value, which is
/// what downstream parsers key on.
pub struct Tnp {
    filter: FilterFn,
    name: NameFn,
    class: ClassFn,
    airspace_type: TypeFn,
    header: Option<String>,
}

impl Tnp {
    /// Create a converter with the default policies
    pub fn new() -> Self {
        Self {
            filter: default_filter(),
            name: default_name(),
            class: default_tnp_class(),
            airspace_type: default_tnp_type(),
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

    /// Replace the class resolver
    pub fn with_class_resolver(mut self, class: ClassFn) -> Self {
        self.class = class;
        self
    }

    /// Replace the output-type resolver
    pub fn with_type_resolver(mut self, airspace_type: TypeFn) -> Self {
        self.airspace_type = airspace_type;
        self
    }

    /// Set a banner emitted as `#` comment lines before the first record
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Convert an airspace collection to TNP text
    pub fn convert(&self, airspace: &[Feature]) -> Result<String> {
        self.convert_with_obstacles(airspace, &[])
    }

    /// Convert an airspace collection plus point obstacles
    pub fn convert_with_obstacles(
        &self,
        airspace: &[Feature],
        obstacles: &[Obstacle],
    ) -> Result<String> {
        let mut out = header_lines(self.header.as_deref(), '#');

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

        out.push("#".to_string());
        out.push("END".to_string());

        let text = out.join("\n");
        ensure_ascii(&text)?;
        Ok(text)
    }

    fn volume_lines(&self, volume: &Volume, feature: &Feature, out: &mut Vec<String>) -> Result<()> {
        let type_line = format!("TYPE={}", (self.airspace_type)(volume, feature));
        let class = (self.class)(volume, feature);
        let class_line = format!(
            "CLASS={}",
            class.map(|c| c.to_string()).unwrap_or_default()
        );

        out.push("#".to_string());
        out.push(format!("TITLE={}", (self.name)(volume, feature)));
        // Defined field first: an undefined class moves behind the type
        if class.is_some() {
            out.push(type_line);
            out.push(class_line);
        } else {
            out.push(class_line);
            out.push(type_line);
        }
        out.push(format!("BASE={}", volume.lower.render()));
        out.push(format!("TOPS={}", volume.upper.render()));
        emit_boundary(self, &volume.boundary, out)
    }
}

impl Default for Tnp {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundaryEmitter for Tnp {
    fn point(&self, point: &str, out: &mut Vec<String>) -> Result<()> {
        out.push(format!("POINT={}", format_latlon(point)?));
        Ok(())
    }

    fn circle(&self, circle: &Circle, out: &mut Vec<String>) -> Result<()> {
        out.push(format!(
            "CIRCLE RADIUS={} CENTRE={}",
            radius_value(&circle.radius)?,
            format_latlon(&circle.centre)?
        ));
        Ok(())
    }

    fn arc(&self, arc: &Arc, _from: &str, out: &mut Vec<String>) -> Result<()> {
        let dir = match arc.dir {
            ArcDirection::Cw => "CLOCKWISE",
            ArcDirection::Ccw => "ANTI-CLOCKWISE",
        };
        out.push(format!(
            "{dir} RADIUS={} CENTRE={} TO={}",
            radius_value(&arc.radius)?,
            format_latlon(&arc.centre)?,
            format_latlon(&arc.to)?
        ));
        Ok(())
    }
}

/// `HDDMMSS HDDDMMSS` coordinate rendering
fn format_latlon(latlon: &str) -> Result<String> {
    let (lat, lon) = parse_latlon(latlon)?;
    let lat = Dms::from_radians(lat);
    let lon = Dms::from_radians(lon);

    Ok(format!(
        "{}{:02}{:02}{:02} {}{:03}{:02}{:02}",
        if lat.positive { 'N' } else { 'S' },
        lat.deg,
        lat.min,
        lat.sec,
        if lon.positive { 'E' } else { 'W' },
        lon.deg,
        lon.min,
        lon.sec,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Class;
    use insta::assert_snapshot;
    use serde_json::json;

    fn benson() -> Vec<Feature> {
        vec![
            serde_json::from_value(json!({
                "name": "BENSON",
                "type": "ATZ",
                "geometry": [{
                    "lower": "SFC",
                    "upper": "2203 ft",
                    "boundary": [
                        {"circle": {"centre": "513654N 0010545W", "radius": "2 nm"}}
                    ]
                }]
            }))
            .unwrap(),
        ]
    }

    #[test]
    fn atz_record_block_with_footer() {
        let output = Tnp::new().convert(&benson()).unwrap();
        assert_snapshot!(output, @r"
        #
        TITLE=BENSON ATZ
        CLASS=
        TYPE=CTA/CTR
        BASE=SFC
        TOPS=2203ALT
        CIRCLE RADIUS=2 CENTRE=N513654 W0010545
        #
        END
        ");
    }

    #[test]
    fn defined_class_keeps_type_first() {
        let airspace: Vec<Feature> = vec![
            serde_json::from_value(json!({
                "name": "DAVENTRY",
                "type": "CTA",
                "class": "A",
                "geometry": [{
                    "lower": "FL065",
                    "upper": "FL195",
                    "boundary": [
                        {"line": ["520000N 0020000W", "521500N 0014500W"]},
                        {"arc": {
                            "dir": "cw",
                            "radius": "10 nm",
                            "centre": "521000N 0015000W",
                            "to": "520000N 0020000W"
                        }}
                    ]
                }]
            }))
            .unwrap(),
        ];

        let output = Tnp::new().convert(&airspace).unwrap();
        assert_snapshot!(output, @r"
        #
        TITLE=DAVENTRY
        TYPE=CTA/CTR
        CLASS=A
        BASE=FL065
        TOPS=FL195
        POINT=N520000 W0020000
        POINT=N521500 W0014500
        CLOCKWISE RADIUS=10 CENTRE=N521000 W0015000 TO=N520000 W0020000
        #
        END
        ");
    }

    #[test]
    fn empty_airspace_is_just_the_footer() {
        let output = Tnp::new().convert(&[]).unwrap();
        assert_eq!(output, "#\nEND");
    }

    #[test]
    fn class_resolver_injection() {
        let converter = Tnp::new().with_class_resolver(Box::new(|_, _| Some(Class::D)));
        let output = converter.convert(&benson()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[2], "TYPE=CTA/CTR");
        assert_eq!(lines[3], "CLASS=D");
    }

    #[test]
    fn obstacle_emission() {
        let obstacles: Vec<Obstacle> = serde_json::from_value(json!([
            {"type": "CHIM", "position": "530000N 0003000W", "elevation": "850 ft"}
        ]))
        .unwrap();

        let output = Tnp::new().convert_with_obstacles(&[], &obstacles).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[1], "TITLE=CHIMNEY");
        assert_eq!(lines[4], "BASE=SFC");
        assert_eq!(lines[5], "TOPS=850ALT");
        assert_eq!(lines[6], "CIRCLE RADIUS=0.5 CENTRE=N530000 W0003000");
    }
}
