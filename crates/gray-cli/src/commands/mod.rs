//! CLI command implementations

pub mod contrast;
pub mod convert;
pub mod crop;
pub mod icon;
pub mod info;
pub mod invert;
pub mod paste;
pub mod shuffle;
pub mod zoom;

use anyhow::{Context, Result};
use gray_core::GrayImage;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub verbose: u8,
    pub time: bool,
}

/// Load image from path
pub fn load_image(path: &Path) -> Result<GrayImage> {
    gray_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &GrayImage) -> Result<()> {
    gray_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Runs `f`, printing its duration when `--time` is set.
pub fn timed<T>(label: &str, opts: Options, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    let elapsed = start.elapsed();
    info!(op = label, ?elapsed, "operation finished");
    if opts.time {
        println!("{label}: {}", format_duration(elapsed));
    }
    out
}

/// Format a duration for display
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.3} s")
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else {
        format!("{} us", d.as_micros())
    }
}
