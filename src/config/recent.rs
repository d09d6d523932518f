//! Bounded, most-recent-first file lists.

use serde::{Serialize, Serializer};

/// An ordered list of file paths with a capacity.
///
/// The first entry is the most recent. The list never holds empty paths,
/// duplicates, or more than `capacity` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    files: Vec<String>,
    capacity: usize,
}

impl FileList {
    pub fn new(capacity: usize) -> Self {
        Self {
            files: Vec::new(),
            capacity,
        }
    }

    /// Builds a list from stored paths, dropping empty entries and later
    /// duplicates, then truncating to `capacity`.
    pub fn from_paths(paths: Vec<String>, capacity: usize) -> Self {
        let mut list = Self::new(capacity);
        for path in paths {
            if !path.is_empty() && !list.files.contains(&path) {
                list.files.push(path);
            }
        }
        list.files.truncate(capacity);
        list
    }

    /// Moves `file` to the front, inserting it if absent.
    pub fn add(&mut self, file: &str) {
        if file.is_empty() {
            return;
        }
        self.files.retain(|f| f != file);
        self.files.insert(0, file.to_string());
        self.files.truncate(self.capacity);
    }

    /// Changes the capacity, dropping the oldest entries if it shrank.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.files.truncate(capacity);
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Serialize for FileList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.files.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_paths_cleans_input() {
        let list = FileList::from_paths(paths(&["a", "", "b", "a", "c"]), 10);
        assert_eq!(list.as_slice(), paths(&["a", "b", "c"]).as_slice());
    }

    #[test]
    fn test_add_moves_to_front_and_truncates() {
        let mut list = FileList::from_paths(paths(&["a", "b", "c"]), 3);
        list.add("b");
        assert_eq!(list.as_slice(), paths(&["b", "a", "c"]).as_slice());
        list.add("d");
        assert_eq!(list.as_slice(), paths(&["d", "b", "a"]).as_slice());
    }

    #[test]
    fn test_add_ignores_empty_path() {
        let mut list = FileList::new(3);
        list.add("");
        assert!(list.is_empty());
    }

    #[test]
    fn test_shrinking_capacity_drops_oldest() {
        let mut list = FileList::from_paths(paths(&["a", "b", "c"]), 5);
        list.set_capacity(1);
        assert_eq!(list.as_slice(), paths(&["a"]).as_slice());
    }
}
