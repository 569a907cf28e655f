use lumaline_image::{ImageError, ImageSize};
use lumaline_imgproc::{color::Hsv, draw::draw_line};

use crate::{error::FilterError, Frame};

/// Distance in pixels between two sample points along each axis.
pub const SAMPLE_STRIDE: usize = 10;

/// Sample points whose brightness is at or below this value draw nothing.
pub const BRIGHTNESS_THRESHOLD: u32 = 100;

/// Horizontal and vertical extent of a mark, in pixels.
pub const MARK_LENGTH: i64 = 5;

/// Stroke width of a mark, in pixels.
pub const STROKE_WIDTH: usize = 3;

/// Opaque black, the canvas color.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Iterate the sample grid of a frame of the given size, row by row.
///
/// # Example
///
/// ```
/// use lumaline_filter::sweep::sample_points;
///
/// let points: Vec<_> = sample_points([15, 11].into()).collect();
///
/// assert_eq!(points, vec![(0, 0), (10, 0), (0, 10), (10, 10)]);
/// ```
pub fn sample_points(size: ImageSize) -> impl Iterator<Item = (usize, usize)> {
    (0..size.height)
        .step_by(SAMPLE_STRIDE)
        .flat_map(move |y| (0..size.width).step_by(SAMPLE_STRIDE).map(move |x| (x, y)))
}

/// Unweighted average of the red, green and blue channels, truncated.
#[inline]
pub fn brightness(pixel: &[u8]) -> u32 {
    (pixel[0] as u32 + pixel[1] as u32 + pixel[2] as u32) / 3
}

/// Hue in degrees of the mark drawn at `(x, y)`.
///
/// This depends on the grid position only, never on the image content.
#[inline]
pub fn mark_hue(x: usize, y: usize) -> i32 {
    ((x + y) % 180) as i32
}

/// Opaque RGBA color of the mark drawn at `(x, y)`.
pub fn mark_color(x: usize, y: usize) -> [u8; 4] {
    let [r, g, b] = Hsv::from_hue(mark_hue(x, y)).to_rgb();
    [r, g, b, 255]
}

/// Draw one mark per bright sample point of `src` onto `canvas`.
///
/// Each mark is a diagonal segment from `(x, y)` to `(x + 5, y + 5)` stroked with
/// [`STROKE_WIDTH`]. Points are visited in row-major order, so a later mark overwrites an
/// earlier one where they overlap.
///
/// # Returns
///
/// The number of marks drawn.
///
/// # Errors
///
/// Fails if the canvas and the source do not have the same size.
pub fn draw_marks(src: &Frame, canvas: &mut Frame) -> Result<usize, FilterError> {
    if src.size() != canvas.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            canvas.cols(),
            canvas.rows(),
        )
        .into());
    }

    let mut marks = 0;
    for (x, y) in sample_points(src.size()) {
        let pixel = src
            .pixel(x, y)
            .ok_or(FilterError::SampleOutOfBounds(x, y))?;

        if brightness(pixel) <= BRIGHTNESS_THRESHOLD {
            continue;
        }

        let (x0, y0) = (x as i64, y as i64);
        draw_line(
            canvas,
            (x0, y0),
            (x0 + MARK_LENGTH, y0 + MARK_LENGTH),
            mark_color(x, y),
            STROKE_WIDTH,
        );
        marks += 1;
    }

    Ok(marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumaline_imgproc::color::hsv_to_rgb;

    #[test]
    fn sample_points_cover_grid() {
        let points: Vec<_> = sample_points([21, 10].into()).collect();
        assert_eq!(points, vec![(0, 0), (10, 0), (20, 0)]);

        assert_eq!(sample_points([0, 0].into()).count(), 0);
        assert_eq!(sample_points([1, 1].into()).count(), 1);
        assert_eq!(sample_points([100, 50].into()).count(), 10 * 5);
    }

    #[test]
    fn brightness_truncates() {
        assert_eq!(brightness(&[255, 255, 255, 0]), 255);
        assert_eq!(brightness(&[100, 100, 102, 255]), 100);
        assert_eq!(brightness(&[100, 100, 103, 255]), 101);
        assert_eq!(brightness(&[0, 0, 0, 255]), 0);
    }

    #[test]
    fn mark_hue_wraps_at_180() {
        assert_eq!(mark_hue(0, 0), 0);
        assert_eq!(mark_hue(10, 20), 30);
        assert_eq!(mark_hue(100, 80), 0);
        assert_eq!(mark_hue(170, 20), 10);
    }

    #[test]
    fn mark_color_is_opaque_hsv() {
        let [r, g, b] = hsv_to_rgb(30, 255, 255);
        assert_eq!(mark_color(10, 20), [r, g, b, 255]);
        assert_eq!(mark_color(0, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn draw_marks_size_mismatch() -> Result<(), ImageError> {
        let src = Frame::from_size_pixel([10, 10].into(), [255; 4])?;
        let mut canvas = Frame::from_size_pixel([10, 9].into(), BLACK)?;
        assert_eq!(
            draw_marks(&src, &mut canvas),
            Err(FilterError::Image(ImageError::InvalidImageSize(
                10, 10, 10, 9
            )))
        );
        Ok(())
    }

    #[test]
    fn draw_marks_counts_bright_points() -> Result<(), FilterError> {
        let mut src = Frame::from_size_pixel([30, 10].into(), [0, 0, 0, 255])?;
        // only (10, 0) is bright
        if let Some(px) = src.pixel_mut(10, 0) {
            px.copy_from_slice(&[200, 200, 200, 255]);
        }
        let mut canvas = Frame::from_size_pixel(src.size(), BLACK)?;

        assert_eq!(draw_marks(&src, &mut canvas)?, 1);
        assert_eq!(canvas.pixel(12, 2), Some(&mark_color(10, 0)[..]));
        assert_eq!(canvas.pixel(0, 0), Some(&BLACK[..]));
        assert_eq!(canvas.pixel(20, 0), Some(&BLACK[..]));
        Ok(())
    }
}
