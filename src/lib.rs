// region:    --- Modules

mod error;
mod line_buffer;
mod outcome;
mod patcher;
mod persist;
mod range;

pub use error::*;
pub use line_buffer::*;
pub use outcome::*;
pub use patcher::*;
pub use persist::*;
pub use range::*;

// endregion: --- Modules
