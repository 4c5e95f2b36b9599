use std::num::NonZeroUsize;
use std::ops::Range;

/// Half-open interval `[start_y, end_y)` of pixel rows owned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowRange {
    /// First row (inclusive)
    pub start_y: u32,
    /// One past the last row
    pub end_y: u32,
}

impl RowRange {
    pub const fn new(start_y: u32, end_y: u32) -> Self {
        Self { start_y, end_y }
    }

    /// Number of rows in the range
    pub const fn len(&self) -> u32 {
        self.end_y - self.start_y
    }

    /// An empty range is legal and makes its worker a no-op
    pub const fn is_empty(&self) -> bool {
        self.start_y == self.end_y
    }

    pub fn rows(&self) -> Range<u32> {
        self.start_y..self.end_y
    }

    /// Bytes of RGBA8 output covered by this range for an image `width` pixels wide
    pub fn byte_len(&self, width: u32) -> usize {
        self.len() as usize * width as usize * crate::utils::CHANNELS
    }
}

/// Splits `height` rows into `workers` contiguous ranges
///
/// Every worker gets `height / workers` rows and the last worker also
/// takes the `height % workers` leftover rows. The returned ranges are
/// ordered, never overlap, and together cover `[0, height)` exactly once.
/// When there are more workers than rows, the leading workers receive
/// empty ranges.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use rowblur::{partition, RowRange};
///
/// let ranges = partition(10, NonZeroUsize::new(4).unwrap());
/// assert_eq!(
///     ranges,
///     vec![
///         RowRange::new(0, 2),
///         RowRange::new(2, 4),
///         RowRange::new(4, 6),
///         RowRange::new(6, 10),
///     ]
/// );
/// ```
pub fn partition(height: u32, workers: NonZeroUsize) -> Vec<RowRange> {
    let workers = workers.get();
    // u64 keeps `i * rows_per_worker` exact even for worker counts beyond u32.
    let rows_per_worker = u64::from(height) / workers as u64;
    let remaining_rows = u64::from(height) % workers as u64;

    // Every bound is at most `height`, so narrowing back to u32 is lossless.
    let row = |n: u64| n as u32;

    let mut ranges: Vec<RowRange> = (0..workers as u64)
        .map(|i| RowRange::new(row(i * rows_per_worker), row((i + 1) * rows_per_worker)))
        .collect();

    if let Some(last) = ranges.last_mut() {
        last.end_y += row(remaining_rows);
    }

    log::trace!(
        "partitioned {height} rows into {workers} ranges of {rows_per_worker} (+{remaining_rows} on the last)"
    );

    ranges
}
