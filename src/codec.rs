//! Reading and writing RGBA8 image files.
//!
//! This is the boundary around the blur: the blur itself only ever sees
//! the flat buffers produced and consumed here.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::error::CodecError;
use crate::utils::rgba_buffer_len;
use crate::Image;

/// File read when no input path is given
pub const DEFAULT_INPUT: &str = "Input.png";
/// File written when no output path is given
pub const DEFAULT_OUTPUT: &str = "Output.png";

/// A decoded image as a flat RGBA8 buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// `4 * width * height` bytes, row-major, R G B A
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes the image at `path` into RGBA8
///
/// Any source color type is converted, so grayscale or RGB files come
/// back with their channels expanded and an opaque alpha.
///
/// # Errors
///
/// * `CodecError::Decode` - the file is missing, unreadable or not a supported image
pub fn decode_rgba(path: impl AsRef<Path>) -> Result<DecodedImage, CodecError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| CodecError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("decoded {} ({width}x{height})", path.display());

    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

/// Encodes an RGBA8 buffer to `path`, format chosen from the extension
///
/// # Errors
///
/// * `CodecError::BufferSizeMismatch` - `pixels` is not `4 * width * height` bytes
/// * `CodecError::Encode` - the format is unsupported or the file cannot be written
pub fn encode_rgba(
    path: impl AsRef<Path>,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    let expected = rgba_buffer_len(width, height).unwrap_or(usize::MAX);
    if pixels.len() != expected {
        return Err(CodecError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let image: Image<Rgba<u8>> = ImageBuffer::from_raw(width, height, pixels.to_vec()).ok_or(
        CodecError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        },
    )?;

    image.save(path).map_err(|source| CodecError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("encoded {} ({width}x{height})", path.display());

    Ok(())
}
