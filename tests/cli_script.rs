use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(config_json: Option<&str>) -> (Command, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    if let Some(json) = config_json {
        std::fs::write(&path, json).unwrap();
    }
    let mut cmd = Command::cargo_bin("expense_core_cli").unwrap();
    cmd.env("EXPENSE_CORE_CLI_SCRIPT", "1")
        .env("EXPENSE_CORE_CONFIG", &path)
        .env_remove("RUST_LOG");
    (cmd, dir)
}

#[test]
fn script_mode_adds_edits_and_lists() {
    let (mut cmd, _dir) = script_command(Some(r#"{ "id_scheme": "sequential" }"#));
    cmd.write_stdin(
        "add 45 2025-04-05 \"Morning coffee\"\nedit e1 amount=700\nlist\nexit\n",
    )
    .assert()
    .success()
    .stdout(contains("Expense added (e3)."))
    .stdout(contains("Expense e1 updated."))
    .stdout(contains("Morning coffee"))
    .stdout(contains("Total: ₹944.00 (3 expenses)"));
}

#[test]
fn invalid_input_reports_fields_and_keeps_running() {
    let (mut cmd, _dir) = script_command(None);
    cmd.write_stdin("add -3 2025-02-30 Snacks\nlist\n")
        .assert()
        .success()
        .stdout(contains("Amount: Value must be greater than zero"))
        .stdout(contains("Date: Use YYYY-MM-DD format with a real calendar date"))
        .stdout(contains("Please check your input values."))
        .stdout(contains("(2 expenses)"))
        .stdout(contains("Snacks").not());
}

#[test]
fn reject_policy_surfaces_unknown_ids() {
    let (mut cmd, _dir) = script_command(Some(r#"{ "unknown_ids": "reject" }"#));
    cmd.write_stdin("delete nope\n")
        .assert()
        .success()
        .stdout(contains("Expense not found: nope"));
}

#[test]
fn unknown_commands_get_suggestions() {
    let (mut cmd, _dir) = script_command(None);
    cmd.write_stdin("lsit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `lsit`"))
        .stdout(contains("Suggestion: `list`?"));
}

#[test]
fn empty_store_lists_nothing() {
    let (mut cmd, _dir) = script_command(Some(r#"{ "seed_demo_expenses": false }"#));
    cmd.write_stdin("rm e1\nlist\n")
        .assert()
        .success()
        .stdout(contains("nothing deleted"))
        .stdout(contains("No expenses recorded."));
}
