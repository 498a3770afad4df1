//! Mutations over the task collection.
//!
//! Every operation here is one complete read, edit, rewrite pass over
//! the task file (creation takes the append fast path instead). Inputs
//! are validated before anything touches disk, so a failed operation
//! leaves the file exactly as it was.

use tracing::debug;

use crate::category::CategoryStore;
use crate::date;
use crate::error::{Error, Result};
use crate::prompt::LineReader;
use crate::query;
use crate::store::TaskStore;
use crate::task::{Task, TaskStatus};

/// Options for creating a task, as collected by the command layer.
#[derive(Debug, Default)]
pub struct NewTask {
    pub description: String,
    pub date: Option<String>,
    pub tomorrow: bool,
    pub status: Option<String>,
    pub category: Option<String>,
}

/// What came of a request to move unfinished tasks forward.
#[derive(Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// This many forward-dated copies were added to the collection.
    Moved(usize),
    /// The source date was after the destination; nothing changed.
    Rejected,
    /// The user declined the confirmation; nothing changed.
    Aborted,
}

/// Create one task and append it to the store.
///
/// The effective date is the explicit date when given, else tomorrow
/// when flagged, else today. A category is attached only when
/// [`verify_category`] affirms it; a declined category leaves the task
/// uncategorised rather than failing the creation.
pub fn create_task(
    tasks: &TaskStore,
    categories: &CategoryStore,
    reader: &mut dyn LineReader,
    new: NewTask,
) -> Result<Task> {
    if new.description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }

    let mut task = Task::new(&new.description);
    if let Some(date) = new.date {
        date::parse_date(&date)?;
        task.date = date;
    } else if new.tomorrow {
        task.date = date::tomorrow();
    }
    if let Some(status) = new.status {
        task.status = status.parse::<TaskStatus>()?;
    }
    if let Some(category) = new.category {
        if verify_category(categories, reader, &category)? {
            task.category = Some(category);
        }
    }

    tasks.append(&task)?;
    debug!(id = %task.id, date = %task.date, "created task");
    Ok(task)
}

/// Check `name` against the category store, offering to create it when
/// missing. Returns whether the category exists once the exchange is
/// over. Unrecognised answers re-ask rather than deciding either way.
pub fn verify_category(
    categories: &CategoryStore,
    reader: &mut dyn LineReader,
    name: &str,
) -> Result<bool> {
    if categories.exists(name)? {
        return Ok(true);
    }
    println!("Category '{name}' does not exist");
    loop {
        let answer = reader.read_line("Do you want to create it? (y/n) ")?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => {
                categories.create(name)?;
                return Ok(true);
            }
            "n" | "no" => return Ok(false),
            _ => println!("Invalid response, type y or n"),
        }
    }
}

/// Update description and/or date of the task with id `id`. Fields left
/// as `None` keep their current value.
pub fn update_task(
    tasks: &TaskStore,
    id: &str,
    description: Option<String>,
    new_date: Option<String>,
) -> Result<()> {
    if let Some(date) = new_date.as_deref() {
        date::parse_date(date)?;
    }
    if let Some(desc) = description.as_deref() {
        if desc.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }
    }

    let mut collection = tasks.load()?;
    let pos = query::position_by_id(&collection, id)
        .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
    if let Some(desc) = description {
        collection[pos].description = desc;
    }
    if let Some(date) = new_date {
        collection[pos].date = date;
    }
    tasks.write_all(&collection)?;
    debug!(id, "updated task");
    Ok(())
}

/// Set the status of the task with id `id`.
pub fn set_status(tasks: &TaskStore, id: &str, status: TaskStatus) -> Result<()> {
    let mut collection = tasks.load()?;
    let pos = query::position_by_id(&collection, id)
        .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
    collection[pos].status = status;
    tasks.write_all(&collection)?;
    debug!(id, %status, "changed task status");
    Ok(())
}

/// Assign `category` to the task with id `id`, running category
/// verification first. Returns false when the user declined to create a
/// missing category, in which case nothing was written.
pub fn set_category(
    tasks: &TaskStore,
    categories: &CategoryStore,
    reader: &mut dyn LineReader,
    id: &str,
    category: &str,
) -> Result<bool> {
    if !verify_category(categories, reader, category)? {
        return Ok(false);
    }
    let mut collection = tasks.load()?;
    let pos = query::position_by_id(&collection, id)
        .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
    collection[pos].category = Some(category.to_string());
    tasks.write_all(&collection)?;
    Ok(true)
}

/// Remove the task with id `id`. Deleting an id that is not present is
/// a quiet no-op with the same end state: a stored collection without
/// that id.
pub fn delete_task(tasks: &TaskStore, id: &str) -> Result<()> {
    let collection = tasks.load()?;
    if collection.is_empty() {
        return Ok(());
    }
    let remaining: Vec<Task> = collection
        .into_iter()
        .filter(|t| t.id.to_string() != id)
        .collect();
    tasks.write_all(&remaining)?;
    debug!(id, "deleted task");
    Ok(())
}

/// Copy every unfinished task dated `from` onto `to` under fresh ids,
/// leaving the originals in place. The sources are neither completed
/// nor removed, so running this twice stacks a second set of copies.
///
/// The user is asked to confirm before the dates are validated; any
/// answer other than yes aborts.
pub fn move_incomplete(
    tasks: &TaskStore,
    reader: &mut dyn LineReader,
    from: &str,
    to: &str,
) -> Result<MoveOutcome> {
    let prompt = format!("Do you want to move undone tasks from {from} to {to}? (y/n) ");
    let answer = reader.read_line(&prompt)?;
    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        return Ok(MoveOutcome::Aborted);
    }

    if date::parse_date(from)? > date::parse_date(to)? {
        return Ok(MoveOutcome::Rejected);
    }

    let mut collection = tasks.load()?;
    if collection.is_empty() {
        return Ok(MoveOutcome::Moved(0));
    }

    let copies: Vec<Task> = collection
        .iter()
        .filter(|t| t.date == from && t.status == TaskStatus::Todo)
        .map(|t| t.forwarded_to(to))
        .collect();
    let moved = copies.len();
    collection.extend(copies);
    tasks.write_all(&collection)?;
    debug!(from, to, moved, "moved unfinished tasks forward");
    Ok(MoveOutcome::Moved(moved))
}
