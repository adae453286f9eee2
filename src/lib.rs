// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;

use log::debug;
use stamp_version_engine::StampOutcome;
use stamp_version_engine::config::StampConfig;

use crate::args::Args;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one stamping pass for parsed CLI arguments.
///
/// # Errors
/// Any configuration or stamping failure, wrapped in [`error::AppError`].
pub fn run(args: Args) -> Result<StampOutcome> {
    let config = StampConfig::try_from(args)?;
    debug!("{config:?}");
    let outcome = stamp_version_engine::stamp(&config)?;
    debug!("{} -> {}", outcome.previous, outcome.replacement);
    Ok(outcome)
}
