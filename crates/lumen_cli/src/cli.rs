use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "A Monte Carlo path tracer for spheres")]
pub struct Args {
    /// JSON file with `render` and `camera` sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples_per_pixel: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Master random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path; the format follows the extension (.png, .jpg, ...)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Render on one thread with a single random stream
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads for the parallel renderer (default: all cores)
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Set the logging level (default: `RUST_LOG`, else info)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Args {
    /// Level to force on the logger, if any.
    ///
    /// An explicit `--log-level` wins; otherwise a set `RUST_LOG` is left
    /// alone, and with neither the level is info.
    pub fn log_filter(&self, rust_log_set: bool) -> Option<LevelFilter> {
        match self.log_level {
            Some(level) => Some(level.into()),
            None if rust_log_set => None,
            None => Some(LevelFilter::Info),
        }
    }
}
