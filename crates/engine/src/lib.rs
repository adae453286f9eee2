// crates/engine/src/lib.rs
use std::path::Path;

use log::{debug, info};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod record;
pub mod scanner;

use crate::config::StampConfig;
use crate::error::{Result, StampError};
use crate::record::{Timestamp, VersionRecord};
use crate::scanner::{ScanOutcome, Scanner};

/// What a successful stamp did (or, in a dry run, would do).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    pub timestamp: Timestamp,
    /// 1-based line number of the replaced declaration.
    pub line_number: usize,
    pub previous: String,
    pub replacement: String,
    pub written: bool,
}

/// Stamp the current local time into `target` using the default marker and
/// declaration prefix.
///
/// # Errors
///
/// See [`stamp`].
pub fn stamp_version(target: impl AsRef<Path>) -> Result<Timestamp> {
    stamp(&StampConfig::for_target(target.as_ref())).map(|outcome| outcome.timestamp)
}

/// Run one stamping pass as described by `config`.
///
/// The file is only touched when both marker and declaration are found and
/// `config.dry_run` is off; every other line is written back byte for byte.
///
/// # Errors
///
/// - `FileNotFound` if `config.target` does not exist (nothing is created).
/// - `MarkerNotFound` / `DeclarationNotFound` if the scan comes up short.
/// - `Io` if inspecting, reading or writing the file fails.
pub fn stamp(config: &StampConfig) -> Result<StampOutcome> {
    let record = VersionRecord::now(config.clock, &config.target);
    stamp_record(config, &record)
}

/// [`stamp`] with a caller-supplied record instead of a clock read.
///
/// The record's `target_path` is the file edited; `config.target` is ignored.
///
/// # Errors
///
/// See [`stamp`].
pub fn stamp_record(config: &StampConfig, record: &VersionRecord) -> Result<StampOutcome> {
    let path = record.target_path.as_path();
    debug!("stamping {} with {}", path.display(), record.timestamp);

    let content = filesystem::read_existing(path)?;
    let lines = scanner::split_lines(&content);
    debug!("read {} lines from {}", lines.len(), path.display());

    let finder = Scanner::new(&config.marker, &config.declaration);
    let edit = match finder.scan(&lines, &record.timestamp) {
        ScanOutcome::Found(edit) => edit,
        ScanOutcome::MarkerNotFound => {
            return Err(StampError::MarkerNotFound {
                path: path.to_path_buf(),
                marker: config.marker.clone(),
            });
        }
        ScanOutcome::DeclarationNotFound => {
            return Err(StampError::DeclarationNotFound {
                path: path.to_path_buf(),
                declaration: config.declaration.clone(),
            });
        }
    };

    if config.dry_run {
        info!("dry run, leaving {} untouched", path.display());
    } else {
        filesystem::atomic_write(path, &scanner::apply(&lines, &edit))?;
        info!(
            "updated line {} of {} to {}",
            edit.line_number(),
            path.display(),
            record.timestamp
        );
    }

    Ok(StampOutcome {
        timestamp: record.timestamp.clone(),
        line_number: edit.line_number(),
        previous: display_line(&edit.previous),
        replacement: display_line(&edit.replacement),
        written: !config.dry_run,
    })
}

fn display_line(line: &[u8]) -> String {
    String::from_utf8_lossy(line.trim_ascii_end()).into_owned()
}
