use itertools::iproduct;

use crate::stripe_blur::classify::PixelClass;
use crate::stripe_blur::partition::RowRange;
use crate::utils::CHANNELS;

/// Float divisor applied to every channel sum before the positional divisor
pub const PRE_DIVISOR: f64 = 1.5;

/// Channel sums of the in-bounds part of a 3x3 window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborhoodSum {
    /// Independent R, G, B sums
    pub rgb: [u32; 3],
    /// How many of the nine window positions were inside the image
    ///
    /// Reported for inspection only. The blur divides by a constant picked
    /// from [`PixelClass`], not by this count, so its output is two thirds
    /// of a true mean. Do not switch the divisor to this count without
    /// meaning to change every output value.
    pub count: u32,
}

/// Sums R, G and B over the 3x3 window centered on `(x, y)`
///
/// Window positions outside `[0, width) x [0, height)` are skipped.
///
/// # Arguments
///
/// * `input` - Full RGBA8 image, `4 * width * height` bytes
/// * `x`, `y` - Window center, inside the image
pub fn accumulate_neighborhood(
    input: &[u8],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
) -> NeighborhoodSum {
    let rows = y.saturating_sub(1)..=(y + 1).min(height - 1);
    let cols = x.saturating_sub(1)..=(x + 1).min(width - 1);

    iproduct!(rows, cols).fold(NeighborhoodSum::default(), |mut acc, (i, j)| {
        let idx = pixel_offset(width, j, i);
        acc.rgb[0] += u32::from(input[idx]);
        acc.rgb[1] += u32::from(input[idx + 1]);
        acc.rgb[2] += u32::from(input[idx + 2]);
        acc.count += 1;
        acc
    })
}

/// Applies the two-step divisor law to one channel sum
///
/// `sum / 1.5` is computed in floating point and truncated, then divided
/// by the class divisor with integer truncation. Because 1.5 is exact in
/// binary and `sum / 1.5` is never within rounding distance of an integer
/// it does not equal, the first step is exactly `floor(2 * sum / 3)`.
///
/// With 8-bit channels the window holds at most 4 / 6 / 9 pixels for
/// corner / edge / interior positions, so the result never exceeds
/// `floor(floor(9 * 255 / 1.5) / 9) = 170`. The conversion to `u8` still
/// saturates rather than wrapping if a caller feeds a larger sum.
pub fn apply_divisor_law(sum: u32, class: PixelClass) -> u8 {
    let scaled = (f64::from(sum) / PRE_DIVISOR) as u32;
    let value = scaled / class.divisor();
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// Blurs rows `range` of `input` into `stripe`
///
/// `input` is the whole source image. `stripe` holds only the output rows
/// of `range`, so its first byte belongs to pixel `(0, range.start_y)`.
/// Alpha is copied through untouched. An empty range writes nothing.
///
/// # Arguments
///
/// * `input` - Source RGBA8 buffer, `4 * width * height` bytes, never written
/// * `stripe` - Destination bytes for `range`, `4 * width * range.len()` bytes
/// * `width`, `height` - Dimensions of the full image
/// * `range` - Rows this worker owns
///
/// # Panics
///
/// Panics if either buffer is shorter than described above. The driver
/// validates sizes before handing out stripes.
pub fn blur_rows(input: &[u8], stripe: &mut [u8], width: u32, height: u32, range: RowRange) {
    debug_assert_eq!(stripe.len(), range.byte_len(width));

    for (y, x) in iproduct!(range.rows(), 0..width) {
        let class = PixelClass::classify(x, y, width, height);
        let sum = accumulate_neighborhood(input, width, height, x, y);

        let src = pixel_offset(width, x, y);
        let dst = pixel_offset(width, x, y - range.start_y);

        for (channel, &channel_sum) in sum.rgb.iter().enumerate() {
            stripe[dst + channel] = apply_divisor_law(channel_sum, class);
        }
        stripe[dst + 3] = input[src + 3];
    }
}

#[inline]
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * CHANNELS
}
