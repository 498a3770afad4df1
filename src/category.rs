//! Category name persistence.
//!
//! Categories live in a plain text file, one name per line, kept in file
//! order. Names are soft references: deleting a category never touches
//! the tasks that point at it.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Handle on a category file. Like the task store, every call opens the
/// file fresh and the last writer wins.
#[derive(Debug, Clone)]
pub struct CategoryStore {
    path: PathBuf,
}

impl CategoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CategoryStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All category names in file order; an empty file is an empty list.
    pub fn list(&self) -> Result<Vec<String>> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(raw.lines().map(str::to_string).collect())
    }

    /// Whether `name` matches an entry exactly (case-sensitive).
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|c| c == name))
    }

    /// Append `name` to the file. The separator goes before the name, so
    /// an empty file gains its first entry without a leading blank line.
    /// No uniqueness check: inserting an existing name duplicates it.
    pub fn create(&self, name: &str) -> Result<()> {
        let first_entry = fs::metadata(&self.path)?.len() == 0;
        let mut f = OpenOptions::new().append(true).open(&self.path)?;
        if first_entry {
            write!(f, "{name}")?;
        } else {
            write!(f, "\n{name}")?;
        }
        f.flush()?;
        debug!(name, "created category");
        Ok(())
    }

    /// Remove the first entry matching `name`, rewriting the remaining
    /// names one per line. Returns false, leaving the file alone, when
    /// the name is not present.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut names = self.list()?;
        let Some(pos) = names.iter().position(|c| c == name) else {
            return Ok(false);
        };
        names.remove(pos);
        fs::write(&self.path, names.join("\n"))?;
        debug!(name, "deleted category");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs::File;
    use tempfile::TempDir;

    fn scratch_store(dir: &TempDir) -> CategoryStore {
        let path = dir.path().join("categories.txt");
        File::create(&path).unwrap();
        CategoryStore::new(path)
    }

    #[test]
    fn first_entry_has_no_leading_blank_line() {
        let dir = TempDir::new().unwrap();
        let store = scratch_store(&dir);
        store.create("Work").unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "Work");
    }

    #[test]
    fn entries_keep_file_order() {
        let dir = TempDir::new().unwrap();
        let store = scratch_store(&dir);
        for name in ["Work", "Home", "Errands"] {
            store.create(name).unwrap();
        }
        assert_eq!(store.list().unwrap(), vec!["Work", "Home", "Errands"]);
        assert!(store.exists("Home").unwrap());
        assert!(!store.exists("home").unwrap());
    }

    #[test]
    fn delete_removes_only_the_first_match() {
        let dir = TempDir::new().unwrap();
        let store = scratch_store(&dir);
        for name in ["Work", "Home", "Work"] {
            store.create(name).unwrap();
        }
        assert!(store.delete("Work").unwrap());
        assert_eq!(store.list().unwrap(), vec!["Home", "Work"]);
    }

    #[test]
    fn delete_of_a_missing_name_reports_false() {
        let dir = TempDir::new().unwrap();
        let store = scratch_store(&dir);
        store.create("Work").unwrap();
        assert!(!store.delete("Play").unwrap());
        assert_eq!(store.list().unwrap(), vec!["Work"]);
    }

    #[test]
    fn deleting_the_last_entry_leaves_an_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = scratch_store(&dir);
        store.create("Work").unwrap();
        assert!(store.delete("Work").unwrap());
        assert!(store.list().unwrap().is_empty());
        // And the next create still starts cleanly.
        store.create("Home").unwrap();
        assert_eq!(store.list().unwrap(), vec!["Home"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let store = CategoryStore::new(dir.path().join("nope.txt"));
        assert!(matches!(store.list(), Err(Error::Io(_))));
        assert!(matches!(store.create("Work"), Err(Error::Io(_))));
    }
}
