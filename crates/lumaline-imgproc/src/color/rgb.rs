use crate::parallel;
use lumaline_image::{Image, ImageError};

/// Convert a BGRA image to RGBA.
///
/// # Arguments
///
/// * `src` - The input BGRA image.
/// * `dst` - The output RGBA image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use lumaline_image::{Image, ImageSize};
/// use lumaline_imgproc::color::rgba_from_bgra;
///
/// let src = Image::<u8, 4>::new(ImageSize { width: 2, height: 1 }, vec![
///     0, 1, 2, 255,
///     3, 4, 5, 128,
/// ]).unwrap();
///
/// let mut dst = Image::<u8, 4>::from_size_val(src.size(), 0).unwrap();
///
/// rgba_from_bgra(&src, &mut dst).unwrap();
///
/// assert_eq!(dst.as_slice(), &[2, 1, 0, 255, 5, 4, 3, 128]);
/// ```
pub fn rgba_from_bgra(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    swap_red_blue(src, dst)
}

/// Convert an RGBA image to BGRA.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output BGRA image.
///
/// Precondition: the input and output images must have the same size.
pub fn bgra_from_rgba(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    swap_red_blue(src, dst)
}

fn swap_red_blue(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[2];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[0];
        dst_pixel[3] = src_pixel[3];
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumaline_image::ImageSize;

    #[test]
    fn test_bgra_round_trip() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let rgba = Image::<u8, 4>::new(size, (0..24).collect())?;

        let mut bgra = Image::<u8, 4>::from_size_val(size, 0)?;
        bgra_from_rgba(&rgba, &mut bgra)?;
        assert_eq!(&bgra.as_slice()[..4], &[2, 1, 0, 3]);
        assert_eq!(&bgra.as_slice()[20..], &[22, 21, 20, 23]);

        let mut back = Image::<u8, 4>::from_size_val(size, 0)?;
        rgba_from_bgra(&bgra, &mut back)?;
        assert_eq!(back, rgba);

        Ok(())
    }

    #[test]
    fn test_size_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 4>::from_size_val([2, 2].into(), 0)?;
        let mut dst = Image::<u8, 4>::from_size_val([3, 2].into(), 0)?;
        assert_eq!(
            rgba_from_bgra(&src, &mut dst),
            Err(ImageError::InvalidImageSize(2, 2, 3, 2))
        );
        Ok(())
    }
}
