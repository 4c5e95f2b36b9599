//! Test utilities for rowblur
//!
//! This module provides common fixtures for testing the striped blur.
//! It is only compiled when running tests.

use crate::Image;
use image::Rgba;
use itertools::iproduct;

/// Creates a test RGBA image with predefined pixel values for testing.
///
/// This function creates a 2x2 test image with known pixel values including alpha:
/// - (0,0): [200, 150, 100, 255] (opaque)
/// - (1,0): [100, 200, 150, 128] (semi-transparent)
/// - (0,1): [150, 100, 200, 64]  (more transparent)
/// - (1,1): [50, 75, 25, 0]      (fully transparent)
///
/// # Returns
/// A 2x2 RGBA image with u8 subpixels
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

/// Creates an RGBA image with a gradient in every channel, alpha included.
///
/// # Arguments
/// * `width` - Width of the image to create
/// * `height` - Height of the image to create
pub fn create_gradient_rgba_image(width: u32, height: u32) -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(width, height);

    for (y, x) in iproduct!(0..height, 0..width) {
        let r = ((x * 255) / width.max(1)) as u8;
        let g = ((y * 255) / height.max(1)) as u8;
        let b = ((x + y) * 255 / (width + height).max(1)) as u8;
        let a = if (x + y) % 3 == 0 { 128 } else { 255 };
        image.put_pixel(x, y, Rgba([r, g, b, a]));
    }

    image
}

/// Creates a flat RGBA8 buffer filled with a single pixel value.
pub fn create_uniform_rgba_buffer(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    pixel.repeat(width as usize * height as usize)
}

/// Creates a flat RGBA8 buffer with a deterministic, non-uniform pattern.
///
/// Neighbouring pixels differ in every channel, so any off-by-one in the
/// window or in the stripe offsets shows up in the output.
pub fn create_patterned_rgba_buffer(width: u32, height: u32) -> Vec<u8> {
    iproduct!(0..height, 0..width)
        .flat_map(|(y, x)| {
            [
                ((x * 37 + y * 11) % 256) as u8,
                ((x * 5 + y * 53) % 256) as u8,
                ((x * y * 7 + 13) % 256) as u8,
                ((x + y * 3) % 256) as u8,
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgba_image_with_valid_input_creates_image() {
        let image = create_test_rgba_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgba([200, 150, 100, 255]));
        assert_eq!(image.get_pixel(1, 1), &Rgba([50, 75, 25, 0]));
    }

    #[test]
    fn create_gradient_rgba_image_with_valid_input_creates_image() {
        let image = create_gradient_rgba_image(10, 10);
        assert_eq!(image.dimensions(), (10, 10));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 128]));
        assert_eq!(image.get_pixel(1, 0)[3], 255);
    }

    #[test]
    fn create_rgba_buffers_have_expected_length() {
        assert_eq!(create_uniform_rgba_buffer(3, 5, [1, 2, 3, 4]).len(), 60);
        assert_eq!(create_patterned_rgba_buffer(7, 2).len(), 56);
        assert_eq!(&create_uniform_rgba_buffer(1, 2, [1, 2, 3, 4])[4..], &[1, 2, 3, 4]);
    }
}
