/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the filesystem layer and the UI layer.

/// One immediate child of a listed folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File or folder name only (e.g., "notes.txt")
    pub name: String,
    /// True if the entry is a folder (symlinks are followed)
    pub is_dir: bool,
}

/// Files flagged as modified since the last archive, pending copy
///
/// Names are unique and keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    names: Vec<String>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filename; returns false if it was already listed
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.names.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl FromIterator<String> for CandidateList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = CandidateList::new();
        for name in iter {
            list.push(name);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_names_unique_and_ordered() {
        let mut list = CandidateList::new();
        assert!(list.push("b.txt"));
        assert!(list.push("a.txt"));
        assert!(!list.push("b.txt"));

        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["b.txt", "a.txt"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut list: CandidateList = vec!["x.txt".to_string()].into_iter().collect();
        assert!(!list.is_empty());

        list.clear();

        assert!(list.is_empty());
    }
}
