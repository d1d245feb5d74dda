//! Boundary traversal and polygon closing

use crate::error::{Error, Result};
use crate::types::{Arc, Circle, Segment};

/// Format-specific emission hooks for one boundary segment each
///
/// The traversal in [`emit_boundary`] drives these in segment order; an
/// arc's `from` point is the exit point of the preceding segment.
pub(crate) trait BoundaryEmitter {
    fn point(&self, point: &str, out: &mut Vec<String>) -> Result<()>;
    fn circle(&self, circle: &Circle, out: &mut Vec<String>) -> Result<()>;
    fn arc(&self, arc: &Arc, from: &str, out: &mut Vec<String>) -> Result<()>;
}

/// Walk a boundary's segments and emit its records, closing the polygon
/// where needed
///
/// Closing rule: when the boundary starts with a line, one extra point
/// equal to that line's first vertex is emitted — unless the boundary also
/// ends with a line (closed by construction), or ends with an arc whose
/// `to` point already equals that vertex. The coincidence check compares
/// the point strings directly, as consumers expect byte-identical points.
pub(crate) fn emit_boundary<E: BoundaryEmitter>(
    emitter: &E,
    boundary: &[Segment],
    out: &mut Vec<String>,
) -> Result<()> {
    if boundary.is_empty() {
        return Err(Error::EmptyBoundary);
    }

    let mut current: Option<&str> = None;
    for segment in boundary {
        match segment {
            Segment::Circle(circle) => emitter.circle(circle, out)?,
            Segment::Line(points) => {
                if points.is_empty() {
                    return Err(Error::EmptyLine);
                }
                for point in points {
                    emitter.point(point, out)?;
                }
                current = points.last().map(String::as_str);
            }
            Segment::Arc(arc) => {
                let from = current.ok_or(Error::DanglingArc)?;
                emitter.arc(arc, from, out)?;
                current = Some(arc.to.as_str());
            }
        }
    }

    if let Some(Segment::Line(first_line)) = boundary.first() {
        let first_point = first_line.first().ok_or(Error::EmptyLine)?;
        let already_closed = match boundary.last() {
            Some(Segment::Line(_)) => true,
            Some(Segment::Arc(arc)) => arc.to == *first_point,
            _ => false,
        };
        if !already_closed {
            emitter.point(first_point, out)?;
        }
    }

    Ok(())
}
