use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for the striped blur
///
/// The arithmetic of the blur itself cannot fail. Everything here is
/// either a malformed request or a failure of the worker threads.
#[derive(Debug, Error)]
pub enum BlurError {
    /// The requested worker count was zero
    #[error("Worker count must be at least 1")]
    InvalidWorkerCount,

    /// The requested worker count exceeds what one blur may spawn
    #[error("Worker count {workers} exceeds the maximum of {max}")]
    TooManyWorkers { workers: usize, max: usize },

    /// A buffer does not hold exactly `4 * width * height` bytes
    ///
    /// Returned for both the input and the output buffer before any
    /// worker is started.
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// Required length in bytes
        expected: usize,
        /// Length of the buffer that was passed in
        actual: usize,
    },

    /// `4 * width * height` does not fit in `usize`
    #[error("Image dimensions {width}x{height} overflow the addressable buffer size")]
    DimensionOverflow { width: u32, height: u32 },

    /// The operating system refused to start a worker thread
    ///
    /// Rows owned by the failed worker (and any later worker) were not
    /// written, so the output must not be used.
    #[error("Failed to spawn worker {index}: {source}")]
    WorkerSpawn {
        index: usize,
        #[source]
        source: io::Error,
    },

    /// A worker panicked before finishing its rows
    #[error("Worker {index} panicked before finishing its rows")]
    WorkerPanicked { index: usize },

    /// Failed to create ImageBuffer from processed pixels
    #[error("Failed to create ImageBuffer from processed pixels")]
    ImageBufferCreationFailed,
}

/// Error type for reading and writing image files
///
/// These failures happen at the boundary of the crate, around the blur,
/// never inside it.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input file could not be opened or decoded
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output file could not be encoded or written
    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The buffer handed to the encoder does not match its dimensions
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}
