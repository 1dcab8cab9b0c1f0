use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run auditlens isolated from the caller's environment and config.
fn auditlens(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("auditlens");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("AUDITLENS_LANG")
        .env_remove("AUDITLENS_LOG")
        .env_remove("AUDITLENS_CONFIG");
    cmd
}

const ACTIVITY_LOG: &str = r#"{"id":1,"created_at":"2026-01-05T08:00:00Z","user_full_name":"Alice Doe","user_email":"alice@corp.io","action":"USER_LOGIN_SUCCESS","ip_address":"10.0.0.5","details":{"email":"alice@corp.io"}}
{"id":2,"created_at":"2026-02-10T09:30:00Z","user_full_name":"Bob Stone","user_email":"bob@corp.io","action":"APP_SETTING_CHANGED","ip_address":"10.0.0.6","details":{"setting_key":"site_title","old_value":"{\"en\":\"Old title\",\"ar\":\"عنوان\"}","new_value":"<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path d='M12 2L2 7l10 5 10-5-10-5z'/></svg>"}}
{"id":3,"created_at":"2026-03-01T12:00:00Z","user_full_name":"Alice Doe","user_email":"alice@corp.io","action":"ROLE_PERMISSION_ADDED","details":{"permission_action":"manage:users","role_name":"supervisor"}}
{"id":4,"created_at":"2025-01-01T00:00:00Z","user_full_name":null,"user_email":null,"action":"USER_ROLE_CHANGED","details":{"target_user_email":"sara@corp.io","old_role_name":"user","new_role_name":"admin"}}
"#;

const SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path d='M12 2L2 7l10 5 10-5-10-5z'/></svg>";

fn with_log() -> assert_fs::TempDir {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("activity_log.jsonl").write_str(ACTIVITY_LOG).unwrap();
    dir
}

// ─── Rendering ───────────────────────────────────────────────────

#[test]
fn log_renders_summaries() {
    let dir = with_log();

    auditlens(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Activity Log"))
        .stdout(predicate::str::contains("alice@corp.io signed in"))
        .stdout(predicate::str::contains("Changed setting site_title"))
        .stdout(predicate::str::contains(
            "Granted Manage users to the Supervisor role",
        ))
        .stdout(predicate::str::contains("Changed the role of sara@corp.io"))
        .stdout(predicate::str::contains("1 - 4 of 4"));
}

#[test]
fn log_renders_before_and_after() {
    let dir = with_log();

    auditlens(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Before: EN: Old title | AR: عنوان"))
        .stdout(predicate::str::contains("Before: User"))
        .stdout(predicate::str::contains("After: Administrator"))
        .stdout(predicate::str::contains("After: N/A"));
}

#[test]
fn log_shows_system_user_and_missing_ip() {
    let dir = with_log();

    auditlens(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("System <N/A>"))
        .stdout(predicate::str::contains("2025/01/01 00:00:00"));
}

#[test]
fn log_collapses_long_values_by_default() {
    let dir = with_log();

    auditlens(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("--expand)"))
        .stdout(predicate::str::contains(SVG).not());
}

#[test]
fn log_expand_shows_full_values() {
    let dir = with_log();

    auditlens(&dir)
        .args(["log", "--expand"])
        .assert()
        .success()
        .stdout(predicate::str::contains(SVG));
}

#[test]
fn log_in_arabic() {
    let dir = with_log();

    auditlens(&dir)
        .args(["log", "--lang", "ar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("سجل النشاط"))
        .stdout(predicate::str::contains("تم تغيير الإعداد"));
}

// ─── Filters and paging ──────────────────────────────────────────

#[test]
fn log_search_filters_by_user() {
    let dir = with_log();

    auditlens(&dir)
        .args(["log", "--search", "BOB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Stone"))
        .stdout(predicate::str::contains("Alice Doe").not())
        .stdout(predicate::str::contains("1 - 1 of 1"));
}

#[test]
fn log_action_filter() {
    let dir = with_log();

    auditlens(&dir)
        .args(["log", "--action", "USER_ROLE_CHANGED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sara@corp.io"))
        .stdout(predicate::str::contains("1 - 1 of 1"));
}

#[test]
fn log_date_range_is_inclusive() {
    let dir = with_log();

    auditlens(&dir)
        .args(["log", "--from", "2026-02-10", "--to", "2026-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 - 2 of 2"));
}

#[test]
fn log_no_match_warns() {
    let dir = with_log();

    auditlens(&dir)
        .args(["log", "--search", "nobody-xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No logs found"))
        .stdout(predicate::str::contains("Try removing filters"));
}

#[test]
fn log_invalid_date_fails() {
    let dir = with_log();

    auditlens(&dir)
        .args(["log", "--from", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn log_reversed_range_fails() {
    let dir = with_log();

    auditlens(&dir)
        .args(["log", "--from", "2026-03-01", "--to", "2026-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is after"));
}

#[test]
fn log_pages_with_configured_size() {
    let dir = with_log();
    dir.child("auditlens.toml")
        .write_str("[log]\npage_size = 2\n")
        .unwrap();

    auditlens(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 - 2 of 4"))
        .stdout(predicate::str::contains("Page: [1] 2"));

    auditlens(&dir)
        .args(["log", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 - 4 of 4"))
        .stdout(predicate::str::contains("Page: 1 [2]"));
}

#[test]
fn log_missing_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    auditlens(&dir)
        .arg("log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn log_malformed_line_fails_with_line_number() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("activity_log.jsonl")
        .write_str("{\"id\":1,\"created_at\":\"2026-01-01T00:00:00Z\",\"action\":\"X\"}\n{broken\n")
        .unwrap();

    auditlens(&dir)
        .arg("log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed event at line 2"));
}

#[test]
fn log_reads_file_flag() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("exports/old.jsonl").write_str(ACTIVITY_LOG).unwrap();

    auditlens(&dir)
        .args(["log", "--file", "exports/old.jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 - 4 of 4"));
}

#[test]
fn log_filter_hint_is_localized() {
    let dir = with_log();

    auditlens(&dir)
        .args(["log", "--lang", "ar", "--search", "nobody-xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("جرّب إزالة عوامل التصفية"))
        .stdout(predicate::str::contains("Try removing filters").not());
}

// ─── Actions ─────────────────────────────────────────────────────

#[test]
fn actions_lists_distinct_codes_with_labels() {
    let dir = with_log();

    auditlens(&dir)
        .arg("actions")
        .assert()
        .success()
        .stdout(predicate::str::contains("All actions (4)"))
        .stdout(predicate::str::contains("APP_SETTING_CHANGED"))
        .stdout(predicate::str::contains("Setting changed"))
        .stdout(predicate::str::contains("Login succeeded"));
}
