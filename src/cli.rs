use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
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

/// Renders a small sphere on a ground sphere to an ASCII PPM file.
#[derive(Debug, Parser)]
#[command(name = "sphere_tracer", version)]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: usize,

    /// Image height in pixels; derived from the aspect ratio when omitted
    #[arg(long)]
    pub height: Option<usize>,

    /// Width over height, also used for the camera viewport
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect_ratio: f64,

    /// Samples per pixel
    #[arg(short, long, default_value_t = 100)]
    pub samples: u32,

    /// Maximum number of diffuse bounces per sample
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value = "image.ppm")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Hide the scanline progress bar
    #[arg(long)]
    pub no_progress: bool,
}
