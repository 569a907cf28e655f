/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image sizes of two images differ.
    #[error("Image size mismatch: ({0}, {1}) vs ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel coordinates are outside the image.
    #[error("Pixel index ({0}, {1}) out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is outside the image channels.
    #[error("Channel index {0} out of bounds {1}")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when width * height * channels does not fit in memory addressing.
    #[error("Image size {0}x{1}x{2} overflows the addressable length")]
    SizeOverflow(usize, usize, usize),

    /// Error when the pixel buffer could not be reserved.
    #[error("Failed to allocate {0} elements for the image buffer")]
    AllocationFailed(usize),
}
