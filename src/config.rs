use std::num::NonZeroUsize;

use crate::error::BlurError;

/// Worker count used when none is configured
pub const DEFAULT_WORKERS: usize = 4;

/// Upper bound on the worker count of a single blur
pub const MAX_WORKERS: usize = 4096;

/// How the per-range workers are run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheduler {
    /// One freshly spawned OS thread per row range, joined before returning
    #[default]
    ScopedThreads,
    /// One task per row range inside a `rayon::scope` on the global pool
    #[cfg(feature = "rayon")]
    Rayon,
}

/// Parameters of a blur run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurConfig {
    /// Number of row ranges, and therefore of workers
    pub workers: NonZeroUsize,
    pub scheduler: Scheduler,
}

impl BlurConfig {
    /// Creates a config with `workers` workers and the default scheduler
    ///
    /// # Errors
    ///
    /// * `BlurError::InvalidWorkerCount` - `workers` is zero
    /// * `BlurError::TooManyWorkers` - `workers` is above [`MAX_WORKERS`]
    pub fn new(workers: usize) -> Result<Self, BlurError> {
        if workers > MAX_WORKERS {
            return Err(BlurError::TooManyWorkers {
                workers,
                max: MAX_WORKERS,
            });
        }
        let workers = NonZeroUsize::new(workers).ok_or(BlurError::InvalidWorkerCount)?;
        Ok(Self {
            workers,
            scheduler: Scheduler::default(),
        })
    }

    #[must_use]
    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            workers: NonZeroUsize::new(DEFAULT_WORKERS).unwrap_or(NonZeroUsize::MIN),
            scheduler: Scheduler::default(),
        }
    }
}
