// tests/test_cli.rs
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn favlink(dir: &TempDir) -> Command {
    let db_path = dir.path().join("favlink.db");
    let mut cmd = Command::cargo_bin("favlink").unwrap();
    cmd.env("FAVLINK_DB_URL", db_path.to_str().unwrap());
    cmd
}

#[test]
fn given_help_flag_when_run_then_usage_is_printed() {
    Command::cargo_bin("favlink")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn given_generate_config_when_run_then_toml_is_printed() {
    Command::cargo_bin("favlink")
        .unwrap()
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("db_url"));
}

#[test]
fn given_added_bookmark_when_list_then_it_shows_up() {
    let dir = TempDir::new().unwrap();

    favlink(&dir)
        .args([
            "add",
            "https://rust-lang.org",
            "--title",
            "Rust",
            "-t",
            "lang,systems",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://rust-lang.org"));

    favlink(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"))
        .stdout(predicate::str::contains("#lang #systems"));
}

#[test]
fn given_query_when_list_then_non_matching_rows_are_hidden() {
    let dir = TempDir::new().unwrap();

    favlink(&dir)
        .args(["add", "https://rust-lang.org", "--title", "Rust"])
        .assert()
        .success();
    favlink(&dir)
        .args(["add", "https://news.example", "--title", "News"])
        .assert()
        .success();

    favlink(&dir)
        .args(["list", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"))
        .stdout(predicate::str::contains("News").not());
}

#[test]
fn given_json_flag_when_list_then_output_is_a_json_array() {
    let dir = TempDir::new().unwrap();

    favlink(&dir)
        .args(["add", "https://rust-lang.org", "--title", "Rust"])
        .assert()
        .success();

    let output = favlink(&dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], "https://rust-lang.org");
    assert!(items[0]["createdAt"].is_string());
}

#[test]
fn given_share_url_when_add_then_fields_are_prefilled() {
    let dir = TempDir::new().unwrap();

    favlink(&dir)
        .args([
            "add",
            "--share",
            "https://app.example/share-target?title=Shared&url=https%3A%2F%2Fshared.example",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shared"))
        .stdout(predicate::str::contains("https://shared.example"));
}

#[test]
fn given_unknown_id_when_show_then_command_fails() {
    let dir = TempDir::new().unwrap();

    favlink(&dir)
        .args(["show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("999"));
}

#[test]
fn given_clear_without_yes_then_nothing_is_deleted() {
    let dir = TempDir::new().unwrap();

    favlink(&dir)
        .args(["add", "https://rust-lang.org", "--title", "Rust"])
        .assert()
        .success();

    favlink(&dir).arg("clear").assert().failure();

    favlink(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"));

    favlink(&dir).args(["clear", "--yes"]).assert().success();

    favlink(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust").not());
}

#[test]
fn given_export_file_when_import_into_fresh_db_then_data_moves_over() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let backup = source.path().join("backup.json");

    favlink(&source)
        .args(["add", "https://rust-lang.org", "--title", "Rust", "-t", "lang"])
        .assert()
        .success();

    favlink(&source)
        .args(["export", "-o", backup.to_str().unwrap()])
        .assert()
        .success();

    favlink(&target)
        .args(["import", backup.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Imported 1"));

    favlink(&target)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://rust-lang.org"));
}

#[test]
fn given_bad_id_list_when_delete_then_usage_error_and_no_partial_delete() {
    let dir = TempDir::new().unwrap();

    favlink(&dir)
        .args(["add", "https://rust-lang.org", "--title", "Rust"])
        .assert()
        .success();

    favlink(&dir)
        .args(["delete", "1,abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ID format"));

    // The valid id ahead of the bad one must not have been deleted.
    favlink(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"));
}

#[test]
fn given_update_when_title_changes_then_other_fields_survive() {
    let dir = TempDir::new().unwrap();

    favlink(&dir)
        .args([
            "add",
            "https://rust-lang.org",
            "--title",
            "Rust",
            "-t",
            "lang",
        ])
        .assert()
        .success();

    let added_line_before = show_added_line(&dir);

    favlink(&dir)
        .args(["update", "1", "--title", "Rust homepage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust homepage"));

    favlink(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://rust-lang.org"))
        .stdout(predicate::str::contains("#lang"));

    // An update must never rewrite the creation timestamp.
    assert_eq!(show_added_line(&dir), added_line_before);
}

/// The rendered `added <timestamp>` line of `show 1`.
fn show_added_line(dir: &TempDir) -> String {
    let output = favlink(dir)
        .args(["show", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .find(|line| line.trim_start().starts_with("added "))
        .expect("show output carries an added line")
        .to_string()
}
