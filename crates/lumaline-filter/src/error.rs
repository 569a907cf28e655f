use lumaline_image::ImageError;

/// An error raised while producing a filtered frame.
///
/// These never reach the caller of [`crate::FilterEngine::apply_filter`], which falls back
/// to the unfiltered input instead.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// Error when allocating or addressing an image.
    #[error("Failed to process the frame image. {0}")]
    Image(#[from] ImageError),

    /// Error when a sample point falls outside the input frame.
    #[error("Sample point ({0}, {1}) is outside the frame")]
    SampleOutOfBounds(usize, usize),
}

/// An error returned by the command surface.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The method name is not known to the filter.
    #[error("Method not implemented: {0}")]
    NotImplemented(String),

    /// The method is known but one of its arguments is missing or has the wrong type.
    #[error("Invalid argument `{argument}` for method `{method}`: {reason}")]
    InvalidArgument {
        /// The method being called.
        method: String,
        /// The offending argument name.
        argument: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl CommandError {
    /// A stable error code suitable for reporting back over a method channel.
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::NotImplemented(_) => "NOT_IMPLEMENTED",
            CommandError::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}
