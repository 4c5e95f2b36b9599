//! Row-striped parallel 3x3 box blur for RGBA8 images.
//!
//! The image rows are split into contiguous ranges, one per worker, and
//! every worker replaces the pixels of its rows with a position-weighted
//! average of their 3x3 neighborhood. Alpha passes through unchanged.

pub mod codec;
mod config;
mod error;
mod stripe_blur;
#[cfg(test)]
mod test_utils;
mod utils;

use image::{ImageBuffer, Pixel};

pub use config::{BlurConfig, Scheduler, DEFAULT_WORKERS, MAX_WORKERS};
pub use error::{BlurError, CodecError};
pub use stripe_blur::classify::PixelClass;
pub use stripe_blur::driver::{blur, blur_into};
pub use stripe_blur::partition::{partition, RowRange};
pub use stripe_blur::row_blur::{RowBlur, RowBlurResult};
pub use stripe_blur::worker::{
    accumulate_neighborhood, apply_divisor_law, blur_rows, NeighborhoodSum, PRE_DIVISOR,
};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
