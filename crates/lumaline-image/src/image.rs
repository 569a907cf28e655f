use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use lumaline_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Number of elements needed to hold an image of `size` with `channels` interleaved channels.
fn buffer_len(size: ImageSize, channels: usize) -> Result<usize, ImageError> {
    size.width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(ImageError::SizeOverflow(size.width, size.height, channels))
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major with the channels interleaved, so the element for
/// `(x, y, ch)` lives at `(y * width + x) * CHANNELS + ch`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumaline_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 4],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        let expected = buffer_len(size, CHANNELS)?;

        // check if the data length matches the image size
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and every element set to `val`.
    ///
    /// # Errors
    ///
    /// If the buffer length overflows or cannot be reserved, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumaline_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     0u8,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.as_slice().len(), 10 * 20 * 3);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let len = buffer_len(size, CHANNELS)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ImageError::AllocationFailed(len))?;
        data.resize(len, val);

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and every pixel set to `pixel`.
    ///
    /// The buffer is reserved with a checked allocation, so an oversized request reports
    /// [`ImageError::AllocationFailed`] instead of aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumaline_image::{Image, ImageSize};
    ///
    /// let canvas = Image::<u8, 4>::from_size_pixel([2, 1].into(), [0, 0, 0, 255]).unwrap();
    ///
    /// assert_eq!(canvas.as_slice(), &[0, 0, 0, 255, 0, 0, 0, 255]);
    /// ```
    pub fn from_size_pixel(size: ImageSize, pixel: [T; CHANNELS]) -> Result<Self, ImageError>
    where
        T: Copy,
    {
        let len = buffer_len(size, CHANNELS)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ImageError::AllocationFailed(len))?;
        for _ in 0..size.width * size.height {
            data.extend_from_slice(&pixel);
        }

        Ok(Self { size, data })
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the underlying buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get all the channels of the pixel at `(x, y)`, or `None` when outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let start = (y * self.width() + x) * CHANNELS;
        self.data.get(start..start + CHANNELS)
    }

    /// Mutable counterpart of [`Image::pixel`].
    #[inline]
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [T]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let start = (y * self.width() + x) * CHANNELS;
        self.data.get_mut(start..start + CHANNELS)
    }

    /// Get a single channel value of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel or channel index is out of bounds.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<&T, ImageError> {
        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }

        match self.pixel(x, y) {
            Some(px) => Ok(&px[ch]),
            None => Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 4],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 4);

        Ok(())
    }

    #[test]
    fn image_invalid_data_length() {
        let res = Image::<u8, 4>::new([2, 2].into(), vec![0u8; 15]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(15, 16)));
    }

    #[test]
    fn image_size_overflow() {
        let size = ImageSize {
            width: usize::MAX,
            height: 2,
        };
        let res = Image::<u8, 4>::from_size_pixel(size, [0, 0, 0, 255]);
        assert_eq!(res, Err(ImageError::SizeOverflow(usize::MAX, 2, 4)));
    }

    #[test]
    fn image_allocation_failure_is_reported() {
        // fits in usize but no allocator can satisfy it
        let size = ImageSize {
            width: usize::MAX / 8,
            height: 1,
        };
        let res = Image::<u8, 4>::from_size_val(size, 0);
        assert_eq!(res, Err(ImageError::AllocationFailed(usize::MAX / 8 * 4)));
    }

    #[test]
    fn image_from_size_pixel() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_size_pixel([3, 2].into(), [1, 2, 3, 4])?;
        assert_eq!(image.as_slice().len(), 3 * 2 * 4);
        for px in image.as_slice().chunks_exact(4) {
            assert_eq!(px, &[1, 2, 3, 4]);
        }
        Ok(())
    }

    #[test]
    fn image_pixel_access() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            (0..12).collect(),
        )?;

        assert_eq!(image.pixel(1, 0), Some(&[3u8, 4, 5][..]));
        assert_eq!(image.pixel(0, 1), Some(&[6u8, 7, 8][..]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.get_pixel(1, 1, 2)?, &11);
        assert_eq!(
            image.get_pixel(0, 0, 3),
            Err(ImageError::ChannelIndexOutOfBounds(3, 3))
        );
        assert_eq!(
            image.get_pixel(0, 5, 0),
            Err(ImageError::PixelIndexOutOfBounds(0, 5, 2, 2))
        );

        if let Some(px) = image.pixel_mut(0, 0) {
            px.copy_from_slice(&[9, 9, 9]);
        }
        assert_eq!(&image.as_slice()[..3], &[9, 9, 9]);

        Ok(())
    }
}
