//! Task file persistence.
//!
//! Tasks are stored as one pretty-printed JSON array per file. The
//! general mutation primitive is a full rewrite of that array; `append`
//! is a fast path for task creation that splices the new element into
//! the existing array text instead of re-serialising the collection.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::task::Task;

/// Handle on a task file. Every operation opens the file fresh; nothing
/// is cached between calls and there is no cross-process locking, so
/// concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file is zero-length, i.e. freshly bootstrapped with no
    /// tasks ever written. A missing file is an error, not an empty one.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(fs::metadata(&self.path)?.len() == 0)
    }

    /// Deserialise the whole file as a task array. The file must exist
    /// and hold well-formed JSON; use [`TaskStore::load`] when a
    /// zero-length file should read as "no tasks yet".
    pub fn read_all(&self) -> Result<Vec<Task>> {
        let raw = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), count = tasks.len(), "read task file");
        Ok(tasks)
    }

    /// Read the collection, treating a zero-length file as empty.
    pub fn load(&self) -> Result<Vec<Task>> {
        if self.is_empty()? {
            return Ok(Vec::new());
        }
        self.read_all()
    }

    /// Serialise `tasks` as a pretty-printed array, replacing the file.
    pub fn write_all(&self, tasks: &[Task]) -> Result<()> {
        let data = serde_json::to_string_pretty(tasks)?;
        self.replace_file(&data)?;
        debug!(path = %self.path.display(), count = tasks.len(), "rewrote task file");
        Ok(())
    }

    /// Add one task without re-serialising the rest of the file.
    ///
    /// On a zero-length file this writes a fresh one-element array.
    /// Otherwise the existing text is spliced: the trailing `]` is
    /// dropped and the new element appended, yielding the same bytes
    /// `write_all` would have produced. Only valid on files this writer
    /// wrote itself; hand-edited content belongs on the `write_all`
    /// path.
    pub fn append(&self, task: &Task) -> Result<()> {
        if self.is_empty()? {
            return self.write_all(std::slice::from_ref(task));
        }
        let raw = fs::read_to_string(&self.path)?;
        let body = raw.trim_end();
        let body = body.strip_suffix(']').unwrap_or(body).trim_end();
        if body == "[" {
            // A previously emptied array ("[]") cannot take a comma
            // splice.
            return self.write_all(std::slice::from_ref(task));
        }
        let element = indent_element(&serde_json::to_string_pretty(task)?);
        self.replace_file(&format!("{body},\n{element}\n]"))?;
        debug!(path = %self.path.display(), id = %task.id, "appended task");
        Ok(())
    }

    fn replace_file(&self, data: &str) -> Result<()> {
        // Atomic-ish write via temp + rename.
        let tmp = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }
}

/// Re-indent a stand-alone pretty-printed object to array-element depth.
fn indent_element(s: &str) -> String {
    s.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
