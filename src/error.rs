/// Error types for the archiver
///
/// Every failure the user can trigger maps to one variant here. None of them
/// are fatal: the UI shows a warning dialog and aborts the current action.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ArchiveError>;

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Navigation target does not exist
    #[error("The folder {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// Navigation target exists but is not a folder
    #[error("{} is not a folder", .0.display())]
    NotADirectory(PathBuf),

    /// The user picked a file where a folder was expected
    #[error("The selected item is not a folder: {0}")]
    InvalidSelection(String),

    /// Copy was requested with an empty candidate list
    #[error("There were no files selected to be copied")]
    NoFilesSelected,

    /// A single file copy failed; earlier copies are kept
    #[error("Failed to copy {file}: {source}")]
    CopyFailed {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// A folder could not be listed (permissions, I/O)
    #[error("Could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The timestamp database failed
    #[error("Archive database error: {0}")]
    Store(#[from] rusqlite::Error),

    /// The config file could not be read or parsed
    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl ArchiveError {
    /// Short title for the warning dialog shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            ArchiveError::NotFound(_) => "Folder Not Found",
            ArchiveError::NotADirectory(_) | ArchiveError::InvalidSelection(_) => "Invalid Selection",
            ArchiveError::NoFilesSelected => "No Files Selected",
            ArchiveError::CopyFailed { .. } => "Copy Failed",
            ArchiveError::Unreadable { .. } => "Folder Unreadable",
            ArchiveError::Store(_) => "Archive Database Error",
            ArchiveError::Config { .. } => "Configuration Error",
        }
    }
}
