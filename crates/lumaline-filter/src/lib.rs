#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// transport agnostic command surface driving the engine.
pub mod command;

/// the frame filter engine.
pub mod engine;

/// Error types for the filter module.
pub mod error;

/// tunable filter parameters.
pub mod params;

/// enabled / initialized state of the filter.
pub mod state;

/// the sampling sweep drawing colored marks on a canvas.
pub mod sweep;

pub use crate::command::{dispatch, handle_method_call, Command, CommandResponse, MethodCall};
pub use crate::engine::{FilterEngine, FilterStats};
pub use crate::error::{CommandError, FilterError};
pub use crate::params::FilterParams;
pub use crate::state::FilterState;

/// A camera frame: RGBA pixels, 8 bits per channel.
pub type Frame = lumaline_image::Image<u8, 4>;
