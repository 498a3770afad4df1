//! Terminal output for task and category listings.
//!
//! Three list styles, all writing rows to stdout: the default checklist
//! grouped under a boxed header, a fixed-width table, and a detailed
//! per-task block. Colour is limited to status markers and message
//! accents, and drops out automatically when stdout is not a terminal.

use colored::Colorize;

use crate::task::{Task, TaskStatus};

const HEADER_WIDTH: usize = 57;

/// Default checklist view: one `[ ]`/`[x]` row per task under a boxed
/// title.
pub fn print_simple(tasks: &[Task], title: &str) {
    print_boxed_header(title);
    for task in tasks {
        let mark = match task.status {
            TaskStatus::Todo => "[ ]".red(),
            TaskStatus::Done => "[x]".green(),
        };
        println!(
            " {} {}: {}",
            mark,
            task.category_label().green(),
            task.description
        );
    }
}

fn print_boxed_header(title: &str) {
    let inner = HEADER_WIDTH - 2;
    println!("{}", format!("┌{}┐", "─".repeat(inner)).green());
    println!("{}", format!("│{}│", " ".repeat(inner)).green());
    println!("{}", format!("│{title:^inner$}│").green());
    println!("{}", format!("│{}│", " ".repeat(inner)).green());
    println!("{}", format!("└{}┘", "─".repeat(inner)).green());
}

/// Print tasks in a formatted table.
pub fn print_table(tasks: &[Task]) {
    // Header.
    println!(
        "{:<36} {:<32} {:<6} {:<10} {}",
        "ID", "Description", "Status", "Due", "Category"
    );
    for task in tasks {
        println!(
            "{:<36} {:<32} {:<6} {:<10} {}",
            task.id.to_string(),
            truncate(&task.description, 32),
            task.status,
            task.date,
            task.category_label()
        );
    }
}

/// Detailed multi-line view, one block per task.
pub fn print_detailed(tasks: &[Task]) {
    for task in tasks {
        println!("Task ID:     {}", task.id);
        println!("Description: {}", task.description);
        println!("Status:      {}", task.status);
        println!("Date:        {}", task.date);
        println!("Category:    {}", task.category_label());
        println!("{}", "-".repeat(49));
    }
}

/// One category name per row, in file order.
pub fn print_categories(names: &[String]) {
    if names.is_empty() {
        println!("No categories yet");
        return;
    }
    for name in names {
        println!("{name}");
    }
}

/// Success accent for mutation confirmations.
pub fn success(message: &str) {
    println!("{} {}", "✔".green(), message);
}

/// Non-fatal problem report: bad input, nothing matched, or a declined
/// confirmation.
pub fn notice(message: &str) {
    println!("{}", message.red());
}

/// Truncate a string to a width, appending an ellipsis when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
