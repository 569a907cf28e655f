/// A color in the HSV space.
///
/// * `h` - hue in degrees, any integer is accepted and wrapped into [0, 360).
/// * `s` - saturation in the range [0, 255].
/// * `v` - value in the range [0, 255].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsv {
    /// Hue in degrees.
    pub h: i32,
    /// Saturation in the range [0, 255].
    pub s: u8,
    /// Value in the range [0, 255].
    pub v: u8,
}

impl Hsv {
    /// Create a fully saturated, full brightness color with the given hue.
    pub fn from_hue(h: i32) -> Self {
        Self { h, s: 255, v: 255 }
    }

    /// Convert the color to an RGB triple. See [`hsv_to_rgb`].
    pub fn to_rgb(self) -> [u8; 3] {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

impl From<Hsv> for [u8; 3] {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

/// Convert a single HSV color to RGB.
///
/// Uses the six-sector formulation: the normalized hue picks one of six sectors, each of
/// which assigns the chroma `C`, the intermediate `X` and zero to the three channels, and
/// the lightness offset `m` is added to all of them.
///
/// # Arguments
///
/// * `h` - The hue in degrees. Wrapped into [0, 360) with an euclidean modulo.
/// * `s` - The saturation in the range [0, 255].
/// * `v` - The value in the range [0, 255].
///
/// # Returns
///
/// The `[r, g, b]` channels in the range [0, 255].
///
/// # Example
///
/// ```
/// use lumaline_imgproc::color::hsv_to_rgb;
///
/// assert_eq!(hsv_to_rgb(0, 255, 255), [255, 0, 0]);
/// assert_eq!(hsv_to_rgb(120, 255, 255), [0, 255, 0]);
/// assert_eq!(hsv_to_rgb(240, 255, 255), [0, 0, 255]);
/// assert_eq!(hsv_to_rgb(77, 0, 255), [255, 255, 255]);
/// ```
pub fn hsv_to_rgb(h: i32, s: u8, v: u8) -> [u8; 3] {
    // Normalize the input to the range [0, 1]
    let h = h.rem_euclid(360) as f32 / 360.0;
    let s = s as f32 / 255.0;
    let v = v as f32 / 255.0;

    let h6 = h * 6.0;
    let c = v * s;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h6.floor() as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [to_u8(r + m), to_u8(g + m), to_u8(b + m)]
}

#[inline]
fn to_u8(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(0, 255, 255), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(60, 255, 255), [255, 255, 0]);
        assert_eq!(hsv_to_rgb(120, 255, 255), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(180, 255, 255), [0, 255, 255]);
        assert_eq!(hsv_to_rgb(240, 255, 255), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(300, 255, 255), [255, 0, 255]);
    }

    #[test]
    fn hsv_to_rgb_no_saturation_is_gray() {
        for h in [0, 45, 90, 179, 359, 720, -30] {
            assert_eq!(hsv_to_rgb(h, 0, 255), [255, 255, 255]);
            assert_eq!(hsv_to_rgb(h, 0, 0), [0, 0, 0]);
        }
        assert_eq!(hsv_to_rgb(10, 0, 128), [128, 128, 128]);
    }

    #[test]
    fn hsv_to_rgb_intermediate_hues() {
        // 30 degrees sits halfway in sector 0: x = 0.5
        assert_eq!(hsv_to_rgb(30, 255, 255), [255, 128, 0]);
        // 20 degrees: x = 1/3
        assert_eq!(hsv_to_rgb(20, 255, 255), [255, 85, 0]);
        // 150 degrees: sector 2, x = 0.5
        assert_eq!(hsv_to_rgb(150, 255, 255), [0, 255, 128]);
        // 330 degrees: sector 5, x = 0.5
        assert_eq!(hsv_to_rgb(330, 255, 255), [255, 0, 128]);
    }

    #[test]
    fn hsv_to_rgb_wraps_hue() {
        assert_eq!(hsv_to_rgb(360, 255, 255), hsv_to_rgb(0, 255, 255));
        assert_eq!(hsv_to_rgb(480, 255, 255), hsv_to_rgb(120, 255, 255));
        assert_eq!(hsv_to_rgb(-120, 255, 255), hsv_to_rgb(240, 255, 255));
    }

    #[test]
    fn hsv_to_rgb_value_scales_channels() {
        let [r, g, b] = hsv_to_rgb(0, 255, 100);
        assert_eq!((r, g, b), (100, 0, 0));
    }

    #[test]
    fn hsv_struct_matches_function() {
        let hsv = Hsv::from_hue(200);
        assert_eq!(hsv.to_rgb(), hsv_to_rgb(200, 255, 255));
        let rgb: [u8; 3] = hsv.into();
        assert_eq!(rgb, hsv.to_rgb());
    }
}
