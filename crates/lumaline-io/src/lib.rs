#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// Frame rate counter for frame processing loops.
pub mod fps_counter;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_any_rgba8`] for automatic format detection.
pub mod functional;

pub use crate::error::IoError;
