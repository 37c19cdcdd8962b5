use std::fs;
use std::path::Path;

use crate::entry::FileEntry;
use crate::error::{CoreError, Result};

/// Lists the entry names directly under `dir`, sorted lexicographically.
///
/// The listing is non-recursive and keeps every name it finds, including
/// subdirectories; a subdirectory that slips through pairs like any other
/// name and fails later at decode time.
pub fn list_entries(dir: &Path) -> Result<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(CoreError::InvalidInputPath {
            path: dir.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|name| CoreError::NonUtf8Name {
                path: dir.join(name),
            })?;
        entries.push(FileEntry::new(name));
    }
    entries.sort();
    Ok(entries)
}

/// Ensures the restored directory exists, creating missing parents.
///
/// A path that exists but is not a directory is rejected before any file
/// is processed.
pub fn prepare_restored_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(CoreError::InvalidOutputPath {
            path: dir.to_path_buf(),
        });
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
