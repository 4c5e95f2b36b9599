use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use rowblur::codec::{decode_rgba, encode_rgba, DEFAULT_INPUT, DEFAULT_OUTPUT};
use rowblur::{blur, BlurConfig, Scheduler, DEFAULT_WORKERS};

const EXIT_DECODE_FAILED: u8 = 1;
const EXIT_ENCODE_FAILED: u8 = 2;
const EXIT_BLUR_FAILED: u8 = 3;

/// Blur an image with a 3x3 kernel split across worker threads
#[derive(Debug, Parser)]
#[command(name = "rowblur", version, about)]
struct Args {
    /// Image to read
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Image to write
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of row ranges processed in parallel
    #[arg(short, long, default_value_t = DEFAULT_WORKERS, value_parser = parse_workers)]
    workers: usize,

    #[arg(long, value_enum, default_value_t = SchedulerArg::Threads)]
    scheduler: SchedulerArg,

    /// Exit with status 0 even when the output cannot be written
    #[arg(long)]
    best_effort: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SchedulerArg {
    /// One OS thread per row range
    Threads,
    /// One rayon task per row range
    Rayon,
}

impl SchedulerArg {
    fn scheduler(self) -> Scheduler {
        match self {
            Self::Threads => Scheduler::ScopedThreads,
            #[cfg(feature = "rayon")]
            Self::Rayon => Scheduler::Rayon,
            #[cfg(not(feature = "rayon"))]
            Self::Rayon => {
                log::warn!("built without the `rayon` feature, falling back to scoped threads");
                Scheduler::ScopedThreads
            }
        }
    }
}

/// Accepts worker counts in `1..=MAX_WORKERS`, the same range `BlurConfig::new` does
fn parse_workers(value: &str) -> Result<usize, String> {
    let workers = value.parse::<usize>().map_err(|err| err.to_string())?;
    BlurConfig::new(workers).map_err(|err| err.to_string())?;
    Ok(workers)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if let Err(err) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("rowblur: failed to initialize logging: {err}");
    }
}

fn run(args: &Args) -> ExitCode {
    let decoded = match decode_rgba(&args.input) {
        Ok(decoded) => decoded,
        Err(err) => {
            eprintln!("Error decoding image: {err}");
            return ExitCode::from(EXIT_DECODE_FAILED);
        }
    };

    let config = match BlurConfig::new(args.workers) {
        Ok(config) => config.with_scheduler(args.scheduler.scheduler()),
        Err(err) => {
            eprintln!("Error blurring image: {err}");
            return ExitCode::from(EXIT_BLUR_FAILED);
        }
    };

    let pixels = match blur(&decoded.pixels, decoded.width, decoded.height, &config) {
        Ok(pixels) => pixels,
        Err(err) => {
            error!("blur failed: {err:?}");
            eprintln!("Error blurring image: {err}");
            return ExitCode::from(EXIT_BLUR_FAILED);
        }
    };

    match encode_rgba(&args.output, &pixels, decoded.width, decoded.height) {
        Ok(()) => {
            info!("wrote {}", args.output.display());
            println!("Image saved.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error while encoding image: {err}");
            if args.best_effort {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_ENCODE_FAILED)
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}
