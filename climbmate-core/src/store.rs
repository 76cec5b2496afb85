//! JSON persistence for video records.
//!
//! The store file holds a single JSON array of [`VideoRecord`]s. A missing
//! file reads as an empty catalog; anything unparseable is an error.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::catalog::VideoRecord;
use crate::error::{CoreError, CoreResult};

/// Reads all records from `path`.
pub fn load_records(path: &Path) -> CoreResult<Vec<VideoRecord>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Store {} does not exist, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(CoreError::Io(e)),
    };

    let records: Vec<VideoRecord> =
        serde_json::from_slice(&data).map_err(|source| CoreError::MalformedStore {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Writes `records` to `path`, creating parent directories as needed.
///
/// The data is written to a temporary file next to `path` and renamed into
/// place, so readers never observe a half-written store.
pub fn save_records(records: &[VideoRecord], path: &Path) -> CoreResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let json = serde_json::to_vec_pretty(records).map_err(CoreError::Encode)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&json)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| CoreError::Io(e.error))?;

    info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
