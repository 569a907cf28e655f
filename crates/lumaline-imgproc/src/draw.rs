use lumaline_image::Image;

/// Set a pixel's color, ignoring coordinates outside the image.
#[inline]
fn set_pixel<const C: usize>(img: &mut Image<u8, C>, x: i64, y: i64, color: [u8; C]) {
    if x < 0 || y < 0 {
        return;
    }
    if let Some(px) = img.pixel_mut(x as usize, y as usize) {
        px.copy_from_slice(&color);
    }
}

/// Draws a line on an image inplace using a standard Bresenham's line algorithm.
///
/// Thick lines are stroked with a square brush of side `thickness` (rounded down to an odd
/// size) centred on every step of the line. Parts of the stroke outside the image are
/// clipped.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line as an array of `C` elements.
/// * `thickness` - The thickness of the line.
///
/// # Example
///
/// ```
/// use lumaline_image::Image;
/// use lumaline_imgproc::draw::draw_line;
///
/// let mut img = Image::<u8, 1>::from_size_val([3, 3].into(), 0).unwrap();
/// draw_line(&mut img, (0, 0), (2, 2), [255], 1);
///
/// assert_eq!(img.as_slice(), &[255, 0, 0, 0, 255, 0, 0, 0, 255]);
/// ```
pub fn draw_line<const C: usize>(
    img: &mut Image<u8, C>,
    p0: (i64, i64),
    p1: (i64, i64),
    color: [u8; C],
    thickness: usize,
) {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;

    let half_thickness = if thickness > 1 {
        thickness as i64 / 2
    } else {
        0
    };

    loop {
        for i in -half_thickness..=half_thickness {
            for j in -half_thickness..=half_thickness {
                set_pixel(img, x0 + i, y0 + j, color);
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}
