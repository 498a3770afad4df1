use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

/// Command wired to scratch data files inside `dir`.
fn td(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("td").expect("binary");
    cmd.arg("--file")
        .arg(dir.path().join("tasks.json"))
        .arg("--categories")
        .arg(dir.path().join("categories.txt"));
    cmd
}

/// Pull the first task id off the table view for a date.
fn first_id(dir: &TempDir, date: &str) -> String {
    let output = td(dir)
        .args(["list", "--date", date, "--table"])
        .output()
        .expect("list runs");
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let row = stdout.lines().nth(1).expect("a task row");
    row.split_whitespace().next().expect("an id").to_string()
}

#[test]
fn help_works() {
    Command::cargo_bin("td")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Daily task management CLI"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = [
        "list",
        "add",
        "update",
        "mark-done",
        "mark-todo",
        "delete",
        "move-todo",
        "set-category",
        "category",
        "completions",
    ];

    for cmd in subcommands {
        Command::cargo_bin("td")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}

#[test]
fn completions_need_no_data_files() {
    Command::cargo_bin("td")
        .expect("binary")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("td"));
}

#[test]
fn listing_an_empty_store_explains_itself() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("no tasks are created yet"));
}

#[test]
fn add_then_list_by_date() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "write report", "--date", "05/06/2030"])
        .assert()
        .success()
        .stdout(contains("Task created successfully"));

    td(&dir)
        .args(["list", "--date", "05/06/2030"])
        .assert()
        .success()
        .stdout(contains("Tasks Due 05/06/2030").and(contains("write report")));

    // A date with no tasks reads differently from an empty store.
    td(&dir)
        .args(["list", "--date", "06/06/2030"])
        .assert()
        .success()
        .stdout(contains("no tasks are created for 06/06/2030"));
}

#[test]
fn add_rejects_a_malformed_date() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "x", "--date", "2030-06-05"])
        .assert()
        .success()
        .stdout(contains("expected dd/mm/yyyy"));

    td(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("no tasks are created yet"));
}

#[test]
fn add_rejects_an_unknown_status() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "x", "--status", "DOING"])
        .assert()
        .success()
        .stdout(contains("invalid status 'DOING'"));
}

#[test]
fn mark_done_shows_up_in_the_table() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "ship the fix", "--date", "05/06/2030"])
        .assert()
        .success();

    let id = first_id(&dir, "05/06/2030");
    td(&dir)
        .args(["mark-done", &id])
        .assert()
        .success()
        .stdout(contains("Task modified successfully"));

    td(&dir)
        .args(["list", "--date", "05/06/2030", "--table"])
        .assert()
        .success()
        .stdout(contains("DONE"));
}

#[test]
fn update_changes_description_and_date() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "old words", "--date", "05/06/2030"])
        .assert()
        .success();

    let id = first_id(&dir, "05/06/2030");
    td(&dir)
        .args(["update", &id, "new words", "--date", "06/06/2030"])
        .assert()
        .success()
        .stdout(contains("Task modified successfully"));

    td(&dir)
        .args(["list", "--date", "06/06/2030"])
        .assert()
        .success()
        .stdout(contains("new words"));
}

#[test]
fn unknown_ids_are_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "exists", "--date", "05/06/2030"])
        .assert()
        .success();

    td(&dir)
        .args(["mark-done", "no-such-id"])
        .assert()
        .success()
        .stdout(contains("doesn't exist"));
}

#[test]
fn delete_removes_the_task() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "short lived", "--date", "05/06/2030"])
        .assert()
        .success();

    let id = first_id(&dir, "05/06/2030");
    td(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(contains("Task deleted successfully"));

    td(&dir)
        .args(["list", "--date", "05/06/2030"])
        .assert()
        .success()
        .stdout(contains("no tasks are created for 05/06/2030"));
}

#[test]
fn move_todo_copies_only_unfinished_tasks() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "carry me over", "--date", "05/06/2030"])
        .assert()
        .success();
    td(&dir)
        .args(["add", "already finished", "--date", "05/06/2030", "--status", "DONE"])
        .assert()
        .success();

    td(&dir)
        .args(["move-todo", "--from", "05/06/2030", "--to", "06/06/2030"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Tasks moved successfully"));

    // The copy landed on the destination date.
    td(&dir)
        .args(["list", "--date", "06/06/2030"])
        .assert()
        .success()
        .stdout(contains("carry me over").and(contains("already finished").not()));

    // The originals are still on the source date.
    td(&dir)
        .args(["list", "--date", "05/06/2030"])
        .assert()
        .success()
        .stdout(contains("carry me over").and(contains("already finished")));
}

#[test]
fn move_todo_can_be_declined() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "stay put", "--date", "05/06/2030"])
        .assert()
        .success();

    td(&dir)
        .args(["move-todo", "--from", "05/06/2030", "--to", "06/06/2030"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    td(&dir)
        .args(["list", "--date", "06/06/2030"])
        .assert()
        .success()
        .stdout(contains("no tasks are created for 06/06/2030"));
}

#[test]
fn move_todo_rejects_a_backwards_range() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "anchored", "--date", "05/06/2030"])
        .assert()
        .success();

    td(&dir)
        .args(["move-todo", "--from", "05/06/2030", "--to", "01/06/2030"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("'From' date should be earlier than 'To' date"));
}

#[test]
fn category_lifecycle() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["category", "add", "Work"])
        .assert()
        .success()
        .stdout(contains("Category created successfully"));
    td(&dir)
        .args(["category", "add", "Home"])
        .assert()
        .success();

    td(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Work").and(contains("Home")));

    td(&dir)
        .args(["category", "delete", "Work"])
        .assert()
        .success()
        .stdout(contains("Category deleted successfully"));
    td(&dir)
        .args(["category", "delete", "Work"])
        .assert()
        .success()
        .stdout(contains("Category 'Work' doesn't exist"));
}

#[test]
fn add_offers_to_create_a_missing_category() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "lift weights", "--date", "05/06/2030", "--category", "Gym"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("does not exist").and(contains("Task created successfully")));

    td(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Gym"));

    td(&dir)
        .args(["list", "--date", "05/06/2030"])
        .assert()
        .success()
        .stdout(contains("Gym: lift weights"));
}

#[test]
fn declined_category_still_creates_the_task() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "just a task", "--date", "05/06/2030", "--category", "Nope"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Task created successfully"));

    // The task exists under the fallback label; the category does not.
    td(&dir)
        .args(["list", "--date", "05/06/2030"])
        .assert()
        .success()
        .stdout(contains("Other: just a task"));
    td(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("No categories yet"));
}

#[test]
fn set_category_reassigns_an_existing_task() {
    let dir = TempDir::new().unwrap();
    td(&dir).args(["category", "add", "Errands"]).assert().success();
    td(&dir)
        .args(["add", "post the parcel", "--date", "05/06/2030"])
        .assert()
        .success();

    let id = first_id(&dir, "05/06/2030");
    td(&dir)
        .args(["set-category", &id, "Errands"])
        .assert()
        .success()
        .stdout(contains("Task modified successfully"));

    td(&dir)
        .args(["list", "--date", "05/06/2030"])
        .assert()
        .success()
        .stdout(contains("Errands: post the parcel"));
}

#[test]
fn list_all_spans_every_date() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "near", "--date", "05/06/2030"])
        .assert()
        .success();
    td(&dir)
        .args(["add", "far", "--date", "05/06/2031"])
        .assert()
        .success();

    td(&dir)
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(contains("All Tasks").and(contains("near")).and(contains("far")));
}

#[test]
fn detailed_view_shows_every_field() {
    let dir = TempDir::new().unwrap();
    td(&dir)
        .args(["add", "inspect me", "--date", "05/06/2030"])
        .assert()
        .success();

    td(&dir)
        .args(["list", "--date", "05/06/2030", "--detailed"])
        .assert()
        .success()
        .stdout(
            contains("Task ID:")
                .and(contains("Description: inspect me"))
                .and(contains("Status:      TODO"))
                .and(contains("Date:        05/06/2030"))
                .and(contains("Category:    Other")),
        );
}
