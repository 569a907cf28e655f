use std::path::Path;

use lumaline_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as RGBA.
///
/// The method tries to read from any image format supported by the image crate. Images
/// without an alpha channel come back fully opaque.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGBA image with four channels.
pub fn read_image_any_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::open(&file_path)?.into_rgba8();
    into_frame(img)
}

/// Decodes an image of any supported format from raw bytes as RGBA.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the encoded image.
pub fn decode_image_rgba8(bytes: &[u8]) -> Result<Image<u8, 4>, IoError> {
    let img = image::load_from_memory(bytes)?.into_rgba8();
    into_frame(img)
}

/// Writes an RGBA image to the given file path as PNG.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image, must end in `.png`.
/// * `image` - The RGBA image to write.
pub fn write_image_png_rgba8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 4>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("png"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let too_large = || IoError::ImageTooLarge(image.width(), image.height());
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )?;

    Ok(())
}

fn into_frame(img: image::RgbaImage) -> Result<Image<u8, 4>, IoError> {
    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };
    Ok(Image::new(size, img.into_raw())?)
}
