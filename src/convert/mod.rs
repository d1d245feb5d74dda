//! OpenAir and TNP converters
//!
//! Both converters share the boundary traversal in [`boundary`] and the
//! injectable classification strategies in [`policy`]; only the record
//! layout and coordinate formatting differ.

pub use openair::Openair;
pub use policy::{
    ClassFn, FilterFn, NameFn, TypeFn, default_filter, default_name, default_openair_type,
    default_tnp_class, default_tnp_type, openair_type, tnp_class, tnp_type,
};
pub use tnp::Tnp;

mod boundary;
mod openair;
mod policy;
mod tnp;

use crate::error::{Error, Result};
use crate::types::{AirspaceType, Circle, Feature, Level, Obstacle, Segment, Volume};

/// Reject any non-ASCII character in the final output
///
/// Downstream parsers of both formats are ASCII-only; transliterating
/// silently would change airspace names, so this is a hard failure.
pub(crate) fn ensure_ascii(text: &str) -> Result<()> {
    match text.chars().find(|c| !c.is_ascii()) {
        Some(c) => Err(Error::NonAscii(c)),
        None => Ok(()),
    }
}

/// Comment-prefixed banner lines for an optional header
pub(crate) fn header_lines(header: Option<&str>, comment_char: char) -> Vec<String> {
    match header {
        Some(header) => header
            .lines()
            .map(|line| format!("{comment_char} {line}").trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Synthesize the feature/volume pair for a point obstacle: a 0.5 nm
/// circle from the surface to the obstacle elevation
pub(crate) fn obstacle_volume(obstacle: &Obstacle) -> (Feature, Volume) {
    let feature = Feature {
        name: obstacle.label().to_string(),
        airspace_type: AirspaceType::Other,
        localtype: None,
        class: None,
        rules: None,
        geometry: Vec::new(),
    };
    let volume = Volume {
        id: None,
        seqno: None,
        name: None,
        class: None,
        rules: None,
        lower: Level::Surface,
        upper: obstacle.elevation,
        boundary: vec![Segment::Circle(Circle {
            centre: obstacle.position.clone(),
            radius: "0.5 nm".to_string(),
        })],
    };

    (feature, volume)
}
