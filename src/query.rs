//! Read-side selection over the task collection.
//!
//! Listing policy: "all" shows every task; otherwise exactly one of an
//! explicit date, the tomorrow flag, or the default of today applies.
//! An entirely empty store is reported differently from a date that
//! simply has no tasks.

use crate::date;
use crate::error::{Error, Result};
use crate::task::Task;

/// A resolved date selection for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every task, regardless of date.
    All,
    /// Tasks due on one specific `dd/mm/yyyy` date.
    On(String),
}

/// Resolve list options into a selection. Precedence: all, then an
/// explicit date, then the tomorrow flag, then today.
pub fn resolve_selection(all: bool, date: Option<String>, tomorrow: bool) -> Selection {
    if all {
        Selection::All
    } else if let Some(date) = date {
        Selection::On(date)
    } else if tomorrow {
        Selection::On(date::tomorrow())
    } else {
        Selection::On(date::today())
    }
}

/// Tasks whose date equals `date` exactly, in stored order.
pub fn filter_by_date(tasks: &[Task], date: &str) -> Vec<Task> {
    tasks.iter().filter(|t| t.date == date).cloned().collect()
}

/// Position of the task whose id has the string form `id`. Ids are
/// unique, so there is at most one; a string that is not a well-formed
/// id matches nothing.
pub fn position_by_id(tasks: &[Task], id: &str) -> Option<usize> {
    tasks.iter().position(|t| t.id.to_string() == id)
}

/// Apply `selection` to the loaded collection.
pub fn select(tasks: Vec<Task>, selection: &Selection) -> Result<Vec<Task>> {
    match selection {
        Selection::All => Ok(tasks),
        Selection::On(date) => {
            if tasks.is_empty() {
                return Err(Error::EmptyStore);
            }
            let matched = filter_by_date(&tasks, date);
            if matched.is_empty() {
                return Err(Error::NoTasksForDate(date.clone()));
            }
            Ok(matched)
        }
    }
}
