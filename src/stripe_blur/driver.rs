use std::thread;

use crate::config::{BlurConfig, Scheduler};
use crate::error::BlurError;
use crate::stripe_blur::partition::{partition, RowRange};
use crate::stripe_blur::worker::blur_rows;
use crate::utils::{rgba_buffer_len, validate_buffer_len};

/// One worker's share of the job: its rows and the output bytes they map to
type Stripe<'a> = (RowRange, &'a mut [u8]);

/// Blurs `input` into `output` using the workers described by `config`
///
/// The rows are partitioned into `config.workers` contiguous ranges and
/// each range is handed, together with its disjoint slice of `output`, to
/// its own worker. The call returns only after every worker has finished,
/// so `output` is either fully written (`Ok`) or must be discarded (`Err`).
///
/// # Arguments
///
/// * `input` - Source RGBA8 buffer, `4 * width * height` bytes
/// * `output` - Destination RGBA8 buffer of the same length
/// * `width`, `height` - Image dimensions in pixels
/// * `config` - Worker count and scheduler
///
/// # Errors
///
/// * `BlurError::DimensionOverflow` - the buffer size overflows `usize`
/// * `BlurError::BufferSizeMismatch` - either buffer has the wrong length
/// * `BlurError::WorkerSpawn` - a worker thread could not be started
/// * `BlurError::WorkerPanicked` - a worker panicked
pub fn blur_into(
    input: &[u8],
    output: &mut [u8],
    width: u32,
    height: u32,
    config: &BlurConfig,
) -> Result<(), BlurError> {
    let expected = rgba_buffer_len(width, height)?;
    validate_buffer_len(expected, input.len())?;
    validate_buffer_len(expected, output.len())?;

    log::info!(
        "blurring {width}x{height} image with {} workers ({:?})",
        config.workers,
        config.scheduler
    );

    let ranges = partition(height, config.workers);
    let stripes = split_stripes(output, width, &ranges);
    let job = |index: usize, input: &[u8], stripe: &mut [u8], range: RowRange| {
        run_worker(index, input, stripe, width, height, range);
    };

    match config.scheduler {
        Scheduler::ScopedThreads => run_scoped_threads(input, stripes, &job),
        #[cfg(feature = "rayon")]
        Scheduler::Rayon => run_rayon_tasks(input, stripes, &job),
    }
}

/// Blurs `input` into a freshly allocated buffer
///
/// # Errors
///
/// Same as [`blur_into`].
pub fn blur(
    input: &[u8],
    width: u32,
    height: u32,
    config: &BlurConfig,
) -> Result<Vec<u8>, BlurError> {
    let mut output = vec![0u8; rgba_buffer_len(width, height)?];
    blur_into(input, &mut output, width, height, config)?;
    Ok(output)
}

/// Cuts `output` into consecutive slices, one per range
///
/// The ranges come from [`partition`], so they are ordered and contiguous
/// and the slices cover `output` exactly.
fn split_stripes<'a>(
    output: &'a mut [u8],
    width: u32,
    ranges: &[RowRange],
) -> Vec<Stripe<'a>> {
    let mut remaining = output;
    ranges
        .iter()
        .map(|&range| {
            let (stripe, rest) =
                std::mem::take(&mut remaining).split_at_mut(range.byte_len(width));
            remaining = rest;
            (range, stripe)
        })
        .collect()
}

fn run_worker(
    index: usize,
    input: &[u8],
    stripe: &mut [u8],
    width: u32,
    height: u32,
    range: RowRange,
) {
    log::debug!(
        "worker {index} blurring rows {}..{} ({} rows)",
        range.start_y,
        range.end_y,
        range.len()
    );
    blur_rows(input, stripe, width, height, range);
}

/// Runs `job` for every stripe on its own scoped OS thread and joins them all
///
/// The first failure wins: a spawn error stops further spawning, and of
/// the joined workers the lowest panicking index is reported.
fn run_scoped_threads<F>(
    input: &[u8],
    stripes: Vec<Stripe<'_>>,
    job: &F,
) -> Result<(), BlurError>
where
    F: Fn(usize, &[u8], &mut [u8], RowRange) + Sync,
{
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(stripes.len());
        let mut result = Ok(());

        for (index, (range, stripe)) in stripes.into_iter().enumerate() {
            let spawned = thread::Builder::new()
                .name(format!("rowblur-worker-{index}"))
                .spawn_scoped(scope, move || job(index, input, stripe, range));

            match spawned {
                Ok(handle) => handles.push((index, handle)),
                Err(source) => {
                    log::error!("failed to spawn worker {index}: {source}");
                    result = Err(BlurError::WorkerSpawn { index, source });
                    break;
                }
            }
        }

        // Join everything that did start, even after a spawn failure.
        for (index, handle) in handles {
            if handle.join().is_err() {
                log::error!("worker {index} panicked");
                if result.is_ok() {
                    result = Err(BlurError::WorkerPanicked { index });
                }
            }
        }

        result
    })
}

/// Spawns one task per stripe inside a `rayon::scope` and waits for all of them
#[cfg(feature = "rayon")]
fn run_rayon_tasks<F>(
    input: &[u8],
    stripes: Vec<Stripe<'_>>,
    job: &F,
) -> Result<(), BlurError>
where
    F: Fn(usize, &[u8], &mut [u8], RowRange) + Sync,
{
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::{Mutex, PoisonError};

    let panicked: Mutex<Option<usize>> = Mutex::new(None);

    rayon::scope(|scope| {
        for (index, (range, stripe)) in stripes.into_iter().enumerate() {
            let panicked = &panicked;
            scope.spawn(move |_| {
                let outcome = catch_unwind(AssertUnwindSafe(|| job(index, input, stripe, range)));
                if outcome.is_err() {
                    log::error!("worker {index} panicked");
                    let mut first = panicked.lock().unwrap_or_else(PoisonError::into_inner);
                    *first = Some(first.map_or(index, |seen| seen.min(index)));
                }
            });
        }
    });

    match panicked.into_inner().unwrap_or_else(PoisonError::into_inner) {
        Some(index) => Err(BlurError::WorkerPanicked { index }),
        None => Ok(()),
    }
}
