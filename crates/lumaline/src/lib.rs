#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use lumaline_image as image;

#[doc(inline)]
pub use lumaline_imgproc as imgproc;

#[doc(inline)]
pub use lumaline_filter as filter;

#[doc(inline)]
pub use lumaline_io as io;
