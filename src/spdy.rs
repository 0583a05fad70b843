pub mod error;
pub mod frames;
pub mod header_block;
#[cfg(test)]
pub(crate) mod test_utils;
#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind};
pub use frames::*;
pub use header_block::HeaderBlock;

pub type Result<T> = std::result::Result<T, Error>;

/// Line separator used by the diagnostic `Display` output of every frame.
#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";
