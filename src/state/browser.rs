/// Directory browser
///
/// Holds the folder a pane is looking at and its cached listing.
/// The current path only ever changes through `ascend`/`descend`, and only
/// to a path that was verified to be an existing folder.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::data::DirEntry;
use crate::error::{ArchiveError, Result};

/// List the immediate children of `path` in filesystem order
pub fn list(path: &Path) -> Result<Vec<DirEntry>> {
    ensure_dir(path)?;

    let mut entries = Vec::new();
    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ArchiveError::Unreadable {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        // Path::is_dir follows symlinks, so a link to a folder is a folder
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir: entry.path().is_dir(),
        });
    }

    Ok(entries)
}

/// Parent of `path` if it exists, otherwise `path` itself
pub fn ascend(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.is_dir() => parent.to_path_buf(),
        _ => path.to_path_buf(),
    }
}

/// `path/name` if that entry is a folder
pub fn descend(path: &Path, name: &str) -> Result<PathBuf> {
    let target = path.join(name);
    match fs::metadata(&target) {
        Ok(meta) if meta.is_dir() => Ok(target),
        Ok(_) => Err(ArchiveError::InvalidSelection(name.to_string())),
        Err(_) => Err(ArchiveError::NotFound(target)),
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ArchiveError::NotADirectory(path.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ArchiveError::NotFound(path.to_path_buf()))
        }
        Err(e) => Err(ArchiveError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// A navigable view of one folder
#[derive(Debug, Clone)]
pub struct DirectoryBrowser {
    current_path: PathBuf,
    entries: Vec<DirEntry>,
}

impl DirectoryBrowser {
    /// Open a browser on `path`, which must be an existing folder.
    /// Relative paths are resolved to an absolute one.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let current_path = fs::canonicalize(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ArchiveError::NotFound(path.clone()),
            _ => ArchiveError::Unreadable {
                path: path.clone(),
                source: e,
            },
        })?;
        let entries = list(&current_path)?;
        Ok(DirectoryBrowser { current_path, entries })
    }

    /// Open a browser on the process working directory
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| ArchiveError::Unreadable {
            path: PathBuf::from("."),
            source: e,
        })?;
        Self::new(cwd)
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    /// Re-read the listing of the current folder
    pub fn refresh(&mut self) -> Result<()> {
        self.entries = list(&self.current_path)?;
        Ok(())
    }

    /// Move to the parent folder; returns false when already at the top
    pub fn ascend(&mut self) -> Result<bool> {
        let parent = ascend(&self.current_path);
        if parent == self.current_path {
            return Ok(false);
        }
        self.move_to(parent)?;
        Ok(true)
    }

    /// Move into the child folder `name`
    pub fn descend(&mut self, name: &str) -> Result<()> {
        let target = descend(&self.current_path, name)?;
        self.move_to(target)
    }

    fn move_to(&mut self, path: PathBuf) -> Result<()> {
        // List first so a failure leaves the browser untouched
        let entries = list(&path)?;
        log::debug!("📂 {} -> {}", self.current_path.display(), path.display());
        self.current_path = path;
        self.entries = entries;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn canonical(path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap()
    }

    fn sorted(mut entries: Vec<DirEntry>) -> Vec<DirEntry> {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    #[test]
    fn test_list_immediate_children() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.txt"), "n").unwrap();

        let entries = sorted(list(dir.path()).unwrap());

        assert_eq!(
            entries,
            vec![
                DirEntry { name: "a.txt".into(), is_dir: false },
                DirEntry { name: "sub".into(), is_dir: true },
            ]
        );
    }

    #[test]
    fn test_list_missing_folder() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(list(&missing), Err(ArchiveError::NotFound(_))));
    }

    #[test]
    fn test_list_file_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "a").unwrap();
        assert!(matches!(list(&file), Err(ArchiveError::NotADirectory(_))));
    }

    #[test]
    fn test_ascend_to_parent() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        assert_eq!(ascend(&sub), dir.path());
    }

    #[test]
    fn test_ascend_at_root_is_noop() {
        let root = Path::new("/");
        assert_eq!(ascend(root), root);

        let mut browser = DirectoryBrowser::new(root).unwrap();
        assert!(!browser.ascend().unwrap());
        assert_eq!(browser.current_path(), root);
    }

    #[test]
    fn test_descend_into_file_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let mut browser = DirectoryBrowser::new(dir.path()).unwrap();
        let result = browser.descend("a.txt");

        assert!(matches!(result, Err(ArchiveError::InvalidSelection(ref n)) if n == "a.txt"));
        assert_eq!(browser.current_path(), canonical(dir.path()));
    }

    #[test]
    fn test_descend_and_ascend_round_trip() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("inner.txt"), "x").unwrap();

        let mut browser = DirectoryBrowser::new(dir.path()).unwrap();
        browser.descend("sub").unwrap();
        assert_eq!(browser.current_path(), canonical(&dir.path().join("sub")));
        assert_eq!(browser.entries().len(), 1);

        assert!(browser.ascend().unwrap());
        assert_eq!(browser.current_path(), canonical(dir.path()));
    }

    #[test]
    fn test_descend_missing_entry() {
        let dir = tempdir().unwrap();
        let mut browser = DirectoryBrowser::new(dir.path()).unwrap();
        assert!(matches!(browser.descend("gone"), Err(ArchiveError::NotFound(_))));
        assert_eq!(browser.current_path(), canonical(dir.path()));
    }

    #[test]
    fn test_relative_start_folder_is_absolute() {
        // Tests run from the crate root, which holds src/
        let mut browser = DirectoryBrowser::new("src").unwrap();
        assert!(browser.current_path().is_absolute());
        assert!(browser.current_path().ends_with("src"));

        assert!(browser.ascend().unwrap());
        assert_eq!(browser.current_path(), canonical(Path::new(".")));
    }

    #[test]
    fn test_new_on_missing_folder() {
        let dir = tempdir().unwrap();
        let result = DirectoryBrowser::new(dir.path().join("missing"));
        assert!(matches!(result, Err(ArchiveError::NotFound(_))));
    }

    #[test]
    fn test_refresh_picks_up_new_files() {
        let dir = tempdir().unwrap();
        let mut browser = DirectoryBrowser::new(dir.path()).unwrap();
        assert!(browser.entries().is_empty());

        fs::write(dir.path().join("new.txt"), "n").unwrap();
        browser.refresh().unwrap();

        assert_eq!(browser.entries().len(), 1);
    }
}
