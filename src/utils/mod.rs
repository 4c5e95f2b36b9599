//! Internal utility functions for rowblur.
//!
//! Buffer-size arithmetic shared by the driver, the image trait and the codec.

use crate::error::BlurError;

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Computes the byte length of an RGBA8 buffer with the given dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
///
/// # Returns
///
/// `4 * width * height`, or an error if that overflows `usize`
pub fn rgba_buffer_len(width: u32, height: u32) -> Result<usize, BlurError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(BlurError::DimensionOverflow { width, height })
}

/// Validates that a buffer holds exactly `expected` bytes.
///
/// # Arguments
///
/// * `expected` - The required length in bytes
/// * `actual` - The length of the buffer that was passed in
///
/// # Returns
///
/// `Ok(())` if the lengths match, otherwise an error
pub fn validate_buffer_len(expected: usize, actual: usize) -> Result<(), BlurError> {
    if expected == actual {
        Ok(())
    } else {
        Err(BlurError::BufferSizeMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_buffer_len() {
        assert_eq!(rgba_buffer_len(0, 0).unwrap(), 0);
        assert_eq!(rgba_buffer_len(1, 1).unwrap(), 4);
        assert_eq!(rgba_buffer_len(4, 3).unwrap(), 48);
        assert_eq!(rgba_buffer_len(0, 100).unwrap(), 0);
    }

    #[test]
    fn test_rgba_buffer_len_overflow() {
        assert!(matches!(
            rgba_buffer_len(u32::MAX, u32::MAX),
            Err(BlurError::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn test_validate_buffer_len() {
        assert!(validate_buffer_len(16, 16).is_ok());
        assert!(validate_buffer_len(0, 0).is_ok());
        assert!(matches!(
            validate_buffer_len(16, 12),
            Err(BlurError::BufferSizeMismatch {
                expected: 16,
                actual: 12
            })
        ));
    }
}
