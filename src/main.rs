//! # td - Daily Task Tracker CLI
//!
//! A small command-line tracker for day-to-day tasks: every task has a
//! due date, a TODO/DONE status and an optional category, and whatever
//! was left undone can be rolled forward to another day in one command.
//!
//! ## Key Features
//!
//! - **Date-Centred Listing**: See today's tasks by default, or any
//!   single day, or everything at once
//! - **Three Views**: Checklist, fixed-width table (with ids), and a
//!   detailed per-task block
//! - **Categories**: A free-form category list; unknown names are
//!   offered for creation on the spot
//! - **Rollover**: `td move-todo` copies the day's unfinished tasks onto
//!   the next day while keeping the record of where they came from
//! - **Local File Storage**: One pretty-printed JSON file for tasks and
//!   one plain text file for categories
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task for today
//! td add "Write the weekly report"
//!
//! # Add one for tomorrow, under a category
//! td add "Book dentist" --tomorrow --category Health
//!
//! # What's on today?
//! td list
//!
//! # Roll everything unfinished over to tomorrow
//! td move-todo
//! ```
//!
//! ## Key Commands
//!
//! - `td list` - Today's tasks; `--tomorrow`, `--date`, or `--all`
//! - `td add <description>` - Create a task
//! - `td update <id>` - Change description or due date
//! - `td mark-done <id>` / `td mark-todo <id>` - Flip completion
//! - `td move-todo` - Copy undone tasks onto another day
//! - `td category add|list|delete` - Manage the category list
//!
//! Data is stored locally in `~/.taskday/` as `tasks.json` and
//! `categories.txt`. Both are plain files you can read, diff, and
//! source control.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod category;
pub mod cli;
pub mod cmd;
pub mod date;
pub mod error;
pub mod ops;
pub mod prompt;
pub mod query;
pub mod render;
pub mod store;
pub mod task;

use category::CategoryStore;
use cli::Cli;
use cmd::*;
use store::TaskStore;
use task::TaskStatus;

fn main() {
    // Tracing is opt-in via RUST_LOG; default is silent.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Completions don't need the data files.
    if let Commands::Completions { shell } = &cli.command {
        cmd_completions(*shell);
        return;
    }

    // Determine the data directory
    let data_dir = {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".taskday")
    };

    let task_path = cli
        .file
        .clone()
        .unwrap_or_else(|| data_dir.join("tasks.json"));
    let category_path = cli
        .categories
        .clone()
        .unwrap_or_else(|| data_dir.join("categories.txt"));

    // The stores treat a missing file as an I/O error, so bootstrap both
    // files empty before first use.
    for path in [&task_path, &category_path] {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Failed to create data directory {}: {}", parent.display(), e);
                    std::process::exit(1);
                }
            }
        }
        if !path.exists() {
            if let Err(e) = File::create(path) {
                eprintln!("Failed to create {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let tasks = TaskStore::new(task_path);
    let categories = CategoryStore::new(category_path);
    tracing::debug!(
        tasks = %tasks.path().display(),
        categories = %categories.path().display(),
        "using data files"
    );

    match cli.command {
        Commands::Completions { .. } => unreachable!("completions handled above"),

        Commands::List {
            all,
            date,
            tomorrow,
            detailed,
            table,
        } => cmd_list(&tasks, all, date, tomorrow, detailed, table),

        Commands::Add {
            description,
            date,
            tomorrow,
            status,
            category,
        } => cmd_add(&tasks, &categories, description, date, tomorrow, status, category),

        Commands::Update {
            id,
            description,
            date,
        } => cmd_update(&tasks, id, description, date),

        Commands::MarkDone { id } => cmd_mark(&tasks, id, TaskStatus::Done),

        Commands::MarkTodo { id } => cmd_mark(&tasks, id, TaskStatus::Todo),

        Commands::Delete { id } => cmd_delete(&tasks, id),

        Commands::MoveTodo { from, to } => cmd_move(&tasks, from, to),

        Commands::SetCategory { id, category } => {
            cmd_set_category(&tasks, &categories, id, category)
        }

        Commands::Category { action } => cmd_category(&categories, action),
    }
}
