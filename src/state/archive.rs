/// Check and copy operations
///
/// `check_files` flags `.txt` files in a folder that were modified after the
/// last archive; `copy_files` copies a flagged list into another folder.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use super::browser;
use super::data::CandidateList;
use crate::error::{ArchiveError, Result};

/// Only files with this suffix are archived (case-sensitive)
pub const ARCHIVE_SUFFIX: &str = ".txt";

/// Outcome of a successful copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: usize,
    pub destination: PathBuf,
}

/// Modification time of `path` in whole Unix seconds
pub fn modified_secs(path: &Path) -> std::io::Result<i64> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified).timestamp())
}

/// Collect the `.txt` files in `source` modified strictly after `last_archive`.
///
/// No recursion, no sorting: the list follows the folder listing order.
pub fn check_files(source: &Path, last_archive: i64) -> Result<CandidateList> {
    let mut candidates = CandidateList::new();

    for entry in browser::list(source)? {
        if entry.is_dir || !entry.name.ends_with(ARCHIVE_SUFFIX) {
            continue;
        }

        match modified_secs(&source.join(&entry.name)) {
            Ok(mtime) if mtime > last_archive => {
                candidates.push(entry.name);
            }
            Ok(_) => {}
            Err(e) => log::warn!("⚠️  Skipping {}: {}", entry.name, e),
        }
    }

    log::info!(
        "🔍 {} file(s) in {} modified since {}",
        candidates.len(),
        source.display(),
        last_archive
    );
    Ok(candidates)
}

/// Copy every listed file from `source` to `destination`, overwriting.
///
/// Stops at the first failure; files copied before it stay copied.
pub fn copy_files(candidates: &CandidateList, source: &Path, destination: &Path) -> Result<CopyReport> {
    if candidates.is_empty() {
        return Err(ArchiveError::NoFilesSelected);
    }

    let mut copied = 0;
    for name in candidates.iter() {
        copy_one(&source.join(name), &destination.join(name)).map_err(|e| {
            log::error!("❌ Copy failed for {} after {} file(s): {}", name, copied, e);
            ArchiveError::CopyFailed {
                file: name.to_string(),
                source: e,
            }
        })?;
        copied += 1;
    }

    log::info!("✅ Copied {} file(s) to {}", copied, destination.display());
    Ok(CopyReport {
        copied,
        destination: destination.to_path_buf(),
    })
}

/// Copy one file, refusing to copy a file onto itself
fn copy_one(from: &Path, to: &Path) -> std::io::Result<u64> {
    // fs::copy onto the same file truncates it and still reports success
    if to.exists() && fs::canonicalize(from)? == fs::canonicalize(to)? {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }
    fs::copy(from, to)
}
