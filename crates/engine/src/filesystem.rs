// crates/engine/src/filesystem.rs
use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{IoOperation, Result, StampError};

/// Read `path` whole, failing with [`StampError::FileNotFound`] when it is absent.
///
/// # Errors
/// `FileNotFound` if nothing exists at `path`, `Io` for any other fault.
pub fn read_existing(path: &Path) -> Result<Vec<u8>> {
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(StampError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => return Err(StampError::io(IoOperation::Inspect, path, source)),
    }
    fs::read(path).map_err(|source| StampError::io(IoOperation::Read, path, source))
}

/// Atomically replace the contents of `path` with `data`.
///
/// The bytes go to a temp file in the same directory which is then renamed
/// over `path`; on any failure the temp file is removed and `path` is left
/// as it was. The existing file's permissions are carried over. A symlinked
/// `path` is resolved first so the link survives and its target is updated.
///
/// # Errors
/// `Io` with `IoOperation::Write` for any failure along the way.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let wrap = |source| StampError::io(IoOperation::Write, path, source);

    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if resolved != path {
        debug!("{} resolves to {}", path.display(), resolved.display());
    }

    let parent = match resolved.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(wrap)?;
    debug!("writing {} bytes via {}", data.len(), tmp.path().display());
    tmp.write_all(data).map_err(wrap)?;
    tmp.flush().map_err(wrap)?;
    // Best effort: the rename below is what matters for atomicity.
    let _ = tmp.as_file().sync_all();

    if let Ok(meta) = fs::metadata(&resolved) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(wrap)?;
    }

    tmp.persist(&resolved).map_err(|e| wrap(e.error))?;

    #[cfg(unix)]
    {
        if let Ok(dir) = fs::File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}
