mod airspace;
mod document;
mod enums;
mod level;

pub use airspace::*;
pub use document::*;
pub use enums::*;
pub use level::*;
