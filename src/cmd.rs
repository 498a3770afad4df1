//! Command implementations for the CLI interface.
//!
//! Each subcommand resolves its options, calls into the stores and the
//! engines, and renders the outcome. Domain conditions (unknown ids,
//! empty selections, declined confirmations) print as ordinary
//! messages; file and parse failures go to stderr and exit nonzero.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::category::CategoryStore;
use crate::date;
use crate::error::Error;
use crate::ops::{self, MoveOutcome, NewTask};
use crate::prompt::StdinLineReader;
use crate::query::{self, Selection};
use crate::render;
use crate::store::TaskStore;
use crate::task::TaskStatus;

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks; with no options this lists today's tasks.
    List {
        /// List every task regardless of date.
        #[arg(short, long)]
        all: bool,
        /// List tasks due on a given date (dd/mm/yyyy).
        #[arg(long, conflicts_with_all = ["all", "tomorrow"])]
        date: Option<String>,
        /// List tomorrow's tasks.
        #[arg(long, conflicts_with = "all")]
        tomorrow: bool,
        /// Detailed multi-line view.
        #[arg(short, long, conflicts_with = "table")]
        detailed: bool,
        /// Fixed-width table view, including task ids.
        #[arg(short, long)]
        table: bool,
    },

    /// Add a new task.
    Add {
        /// What needs doing.
        description: String,
        /// Due date (dd/mm/yyyy); defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// Due tomorrow.
        #[arg(long, conflicts_with = "date")]
        tomorrow: bool,
        /// Initial status: TODO or DONE.
        #[arg(short, long)]
        status: Option<String>,
        /// Category name; offered for creation when missing.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Update a task's description and/or date by id.
    Update {
        /// Task id to update.
        id: String,
        /// New description.
        description: Option<String>,
        /// New due date (dd/mm/yyyy).
        #[arg(long)]
        date: Option<String>,
    },

    /// Mark a task as DONE by id.
    MarkDone {
        /// Task id to mark.
        id: String,
    },

    /// Mark a task as TODO by id.
    MarkTodo {
        /// Task id to mark.
        id: String,
    },

    /// Delete a task by id.
    Delete {
        /// Task id to delete.
        id: String,
    },

    /// Copy undone tasks from one date onto another, keeping the
    /// originals; defaults to today onto tomorrow.
    MoveTodo {
        /// Source date (dd/mm/yyyy).
        #[arg(long)]
        from: Option<String>,
        /// Destination date (dd/mm/yyyy).
        #[arg(long)]
        to: Option<String>,
    },

    /// Assign a category to a task by id.
    SetCategory {
        /// Task id to change.
        id: String,
        /// Category name; offered for creation when missing.
        category: String,
    },

    /// Manage the category list.
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Add a category name.
    Add {
        /// Name to add; duplicates are kept as-is.
        name: String,
    },
    /// List category names in file order.
    List,
    /// Delete the first entry with this name. Tasks keep their label.
    Delete {
        /// Name to delete.
        name: String,
    },
}

/// Report a core failure: domain conditions print as a normal message,
/// environment failures abort the process.
fn report(err: Error) {
    if err.is_fatal() {
        eprintln!("{err}");
        std::process::exit(1);
    }
    render::notice(&err.to_string());
}

/// List tasks for the resolved date selection in one of three styles.
pub fn cmd_list(
    tasks: &TaskStore,
    all: bool,
    date: Option<String>,
    tomorrow: bool,
    detailed: bool,
    table: bool,
) {
    let selection = query::resolve_selection(all, date, tomorrow);
    let collection = match tasks.load() {
        Ok(collection) => collection,
        Err(e) => return report(e),
    };
    let selected = match query::select(collection, &selection) {
        Ok(selected) => selected,
        Err(e) => return report(e),
    };
    if detailed {
        render::print_detailed(&selected);
    } else if table {
        render::print_table(&selected);
    } else {
        let title = match &selection {
            Selection::All => "All Tasks".to_string(),
            Selection::On(date) => format!("Tasks Due {date}"),
        };
        render::print_simple(&selected, &title);
    }
}

/// Create a task from the command-line options.
pub fn cmd_add(
    tasks: &TaskStore,
    categories: &CategoryStore,
    description: String,
    date: Option<String>,
    tomorrow: bool,
    status: Option<String>,
    category: Option<String>,
) {
    let mut reader = StdinLineReader;
    let new = NewTask {
        description,
        date,
        tomorrow,
        status,
        category,
    };
    match ops::create_task(tasks, categories, &mut reader, new) {
        Ok(_) => render::success("Task created successfully"),
        Err(e) => report(e),
    }
}

/// Update description and/or date on an existing task.
pub fn cmd_update(tasks: &TaskStore, id: String, description: Option<String>, date: Option<String>) {
    match ops::update_task(tasks, &id, description, date) {
        Ok(()) => render::success("Task modified successfully"),
        Err(e) => report(e),
    }
}

/// Set a task's completion status.
pub fn cmd_mark(tasks: &TaskStore, id: String, status: TaskStatus) {
    match ops::set_status(tasks, &id, status) {
        Ok(()) => render::success("Task modified successfully"),
        Err(e) => report(e),
    }
}

/// Delete a task by id.
pub fn cmd_delete(tasks: &TaskStore, id: String) {
    match ops::delete_task(tasks, &id) {
        Ok(()) => render::success("Task deleted successfully"),
        Err(e) => report(e),
    }
}

/// Move unfinished tasks forward between two dates.
pub fn cmd_move(tasks: &TaskStore, from: Option<String>, to: Option<String>) {
    let from = from.unwrap_or_else(date::today);
    let to = to.unwrap_or_else(date::tomorrow);
    let mut reader = StdinLineReader;
    match ops::move_incomplete(tasks, &mut reader, &from, &to) {
        Ok(MoveOutcome::Moved(0)) => render::notice(&format!("No undone tasks found for {from}")),
        Ok(MoveOutcome::Moved(_)) => render::success("Tasks moved successfully"),
        Ok(MoveOutcome::Rejected) => {
            render::notice("'From' date should be earlier than 'To' date")
        }
        Ok(MoveOutcome::Aborted) => render::notice("Operation cancelled"),
        Err(e) => report(e),
    }
}

/// Assign a category to a task.
pub fn cmd_set_category(
    tasks: &TaskStore,
    categories: &CategoryStore,
    id: String,
    category: String,
) {
    let mut reader = StdinLineReader;
    match ops::set_category(tasks, categories, &mut reader, &id, &category) {
        Ok(true) => render::success("Task modified successfully"),
        Ok(false) => render::notice("Category was not created; task left unchanged"),
        Err(e) => report(e),
    }
}

/// Handle category management commands.
pub fn cmd_category(categories: &CategoryStore, action: CategoryAction) {
    match action {
        CategoryAction::Add { name } => match categories.create(&name) {
            Ok(()) => render::success("Category created successfully"),
            Err(e) => report(e),
        },
        CategoryAction::List => match categories.list() {
            Ok(names) => render::print_categories(&names),
            Err(e) => report(e),
        },
        CategoryAction::Delete { name } => match categories.delete(&name) {
            Ok(true) => render::success("Category deleted successfully"),
            Ok(false) => render::notice(&format!("Category '{name}' doesn't exist")),
            Err(e) => report(e),
        },
    }
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use crate::cli::Cli;
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
