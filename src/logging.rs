// src/logging.rs
use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::error::Result;

/// Install the stderr logger. `RUST_LOG` wins over `--verbose`.
///
/// # Errors
/// Fails if a global logger is already set.
pub fn init(verbose: bool) -> Result<()> {
    let default = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    Builder::from_env(Env::default().default_filter_or(default.as_str()))
        .format_timestamp(None)
        .format_target(false)
        .try_init()?;
    Ok(())
}
