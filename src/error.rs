//! Error types shared by the stores and engines.
//!
//! Environment failures (I/O, malformed files) abort a command; the
//! remaining variants are ordinary domain outcomes that commands report
//! and carry on from.

use thiserror::Error;

/// Failure modes of store and engine operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A task or category file could not be read or written.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// The task file does not hold a well-formed task array.
    #[error("task file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task of id {0} doesn't exist")]
    TaskNotFound(String),

    #[error("invalid status '{0}', expected TODO or DONE")]
    InvalidStatus(String),

    #[error("invalid date '{0}', expected dd/mm/yyyy")]
    DateFormat(String),

    #[error("task description cannot be empty")]
    EmptyDescription,

    /// The store holds no tasks at all.
    #[error("no tasks are created yet")]
    EmptyStore,

    /// The store has tasks, but none due on the requested date.
    #[error("no tasks are created for {0}")]
    NoTasksForDate(String),
}

impl Error {
    /// Whether this is an environment failure rather than a domain
    /// outcome the command layer can print and recover from.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Json(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
