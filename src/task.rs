//! Task data structure and related functionality.
//!
//! This module defines the `Task` struct that represents a single item of
//! daily work, plus its completion status. Serde field order here is the
//! on-disk field order of the JSON task file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date;
use crate::error::Error;

/// Label shown for tasks that have no category assigned.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Todo,
    Done,
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TODO" => Ok(TaskStatus::Todo),
            "DONE" => Ok(TaskStatus::Done),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::Done => "DONE",
        })
    }
}

/// A single item of daily work.
///
/// `date` is always a canonical `dd/mm/yyyy` string, and `category` is a
/// soft reference to a name in the category store; neither is interpreted
/// beyond that here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub description: String,
    pub status: TaskStatus,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Task {
    /// Fresh TODO task due today, without a category.
    pub fn new(description: &str) -> Self {
        Task {
            id: Uuid::new_v4(),
            description: description.to_string(),
            status: TaskStatus::Todo,
            date: date::today(),
            category: None,
        }
    }

    /// Copy of this task due on `date`, under a freshly generated id.
    /// The source task is left exactly as it was.
    pub fn forwarded_to(&self, date: &str) -> Task {
        Task {
            id: Uuid::new_v4(),
            date: date.to_string(),
            ..self.clone()
        }
    }

    /// Category label for display, falling back to [`DEFAULT_CATEGORY`].
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("todo".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
        assert_eq!(" DONE ".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
        assert!(matches!(
            "DOING".parse::<TaskStatus>(),
            Err(Error::InvalidStatus(_))
        ));
    }

    #[test]
    fn forwarded_copy_gets_a_fresh_id() {
        let task = Task::new("write report");
        let copy = task.forwarded_to("02/01/2030");
        assert_ne!(copy.id, task.id);
        assert_eq!(copy.description, task.description);
        assert_eq!(copy.status, TaskStatus::Todo);
        assert_eq!(copy.date, "02/01/2030");
    }

    #[test]
    fn uncategorised_tasks_serialise_without_the_field() {
        let json = serde_json::to_string(&Task::new("check mail")).unwrap();
        assert!(!json.contains("category"));
        assert!(json.contains("\"TODO\""));
    }

    #[test]
    fn category_label_falls_back_to_other() {
        let mut task = Task::new("water plants");
        assert_eq!(task.category_label(), "Other");
        task.category = Some("Home".to_string());
        assert_eq!(task.category_label(), "Home");
    }
}
