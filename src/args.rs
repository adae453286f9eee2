// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use stamp_version_engine::config::{DEFAULT_DECLARATION, DEFAULT_MARKER, DEFAULT_TARGET};

/// Top-level CLI arguments parsed via clap.
///
/// Every flag is optional; with none given the tool stamps
/// `src/globals.cpp` exactly as a bare build step expects.
#[derive(Parser, Debug)]
#[command(
    name = "stamp_version",
    version = crate::VERSION,
    about = "Stamp a YYYYMMDDHHMMSS version into the declaration following a marker comment"
)]
pub struct Args {
    /// File to stamp
    #[arg(short, long, default_value = DEFAULT_TARGET, value_hint = ValueHint::FilePath, help_heading = "Target")]
    pub target: PathBuf,

    /// Marker line that must precede the declaration (compared after trimming)
    #[arg(long, default_value = DEFAULT_MARKER, help_heading = "Target")]
    pub marker: String,

    /// Prefix identifying the declaration line to rewrite
    #[arg(long, default_value = DEFAULT_DECLARATION, help_heading = "Target")]
    pub declaration: String,

    /// Read the clock in UTC instead of local time
    #[arg(long, help_heading = "Behavior")]
    pub utc: bool,

    /// Report the edit without writing the file
    #[arg(short = 'n', long, help_heading = "Behavior")]
    pub dry_run: bool,

    /// Log scan and write details to stderr
    #[arg(short, long, help_heading = "Behavior")]
    pub verbose: bool,
}
