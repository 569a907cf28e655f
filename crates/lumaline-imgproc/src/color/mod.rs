mod hsv;
mod rgb;

pub use hsv::{hsv_to_rgb, Hsv};
pub use rgb::{bgra_from_rgba, rgba_from_bgra};
