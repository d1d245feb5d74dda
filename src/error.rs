/// Unrecoverable conversion errors
///
/// Missing merge targets are not represented here: a `replace` entry whose
/// `id` is absent from the collection is logged and skipped, since overlays
/// are edited independently of the base dataset.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid coordinate: {0:?}")]
    InvalidLatLon(String),

    #[error("Invalid level: {0:?} (expected SFC, FLnnn or \"<n> ft\")")]
    InvalidLevel(String),

    #[error("Invalid radius: {0:?}")]
    InvalidRadius(String),

    #[error("Volume has an empty boundary")]
    EmptyBoundary,

    #[error("Boundary line segment has no points")]
    EmptyLine,

    #[error("Arc segment has no preceding point to start from")]
    DanglingArc,

    #[error("Non-ASCII character {0:?} in output")]
    NonAscii(char),
}

pub type Result<T> = std::result::Result<T, Error>;
