//! End-to-end tests for `folio run`.

mod fixtures;
use fixtures::*;

use folio::constants::{MSG_CONTACT_SENT, MSG_INIT_DEGRADED};

#[test]
fn test_run_contact_script_json() {
    let temp_dir = temp_config_dir();
    let script = write_file(temp_dir.path(), "contact.toml", CONTACT_SCRIPT);

    let output = run_folio(
        &["run", script.to_str().unwrap(), "--json"],
        temp_dir.path(),
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "run should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(result["now_ms"], 2000);
    assert_eq!(result["loading_visible"], false);
    assert_eq!(result["theme"], "light");
    assert_eq!(result["notifications"][0]["message"], MSG_CONTACT_SENT);
    assert_eq!(result["notifications"][0]["severity"], "success");
    assert!(result["init_error"].is_null());
}

#[test]
fn test_run_human_readable() {
    let temp_dir = temp_config_dir();
    let script = write_file(
        temp_dir.path(),
        "cv.toml",
        r#"
        [[steps]]
        type = "click"
        target = "download_cv"
        "#,
    );

    let output = run_folio(&["run", script.to_str().unwrap()], temp_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Preparing CV..."), "stdout: {stdout}");
    assert!(stdout.contains("(disabled)"));
}

#[test]
fn test_run_system_dark_and_persist() {
    let temp_dir = temp_config_dir();
    let script = write_file(
        temp_dir.path(),
        "toggle.toml",
        r#"
        [[steps]]
        type = "click"
        target = "theme_toggle"
        "#,
    );
    let script = script.to_str().unwrap();

    // Dark OS signal, toggled once to light and persisted
    let output = run_folio(
        &["run", script, "--json", "--system-dark", "--persist"],
        temp_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["theme"], "light");
    assert_eq!(result["stored_theme"], "light");
    assert!(temp_dir.path().join("preferences.toml").exists());

    // Next session starts from the stored preference despite the dark signal
    let empty = write_file(temp_dir.path(), "empty.toml", "");
    let output = run_folio(
        &["run", empty.to_str().unwrap(), "--json", "--system-dark", "--persist"],
        temp_dir.path(),
    );
    assert_eq!(stdout_json(&output)["theme"], "light");
}

#[test]
fn test_run_without_persist_leaves_no_preference_file() {
    let temp_dir = temp_config_dir();
    let script = write_file(
        temp_dir.path(),
        "toggle.toml",
        "[[steps]]\ntype = \"click\"\ntarget = \"theme_toggle\"\n",
    );

    let output = run_folio(&["run", script.to_str().unwrap()], temp_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(!temp_dir.path().join("preferences.toml").exists());
}

#[test]
fn test_run_with_broken_layout_degrades() {
    let temp_dir = temp_config_dir();
    let layout = write_file(temp_dir.path(), "layout.toml", "menu_bars = 2\n");
    let script = write_file(temp_dir.path(), "wait.toml", "[[steps]]\nwait_ms = 1000\n");

    let output = run_folio(
        &[
            "run",
            script.to_str().unwrap(),
            "--layout",
            layout.to_str().unwrap(),
            "--json",
        ],
        temp_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert!(result["init_error"].as_str().unwrap().contains("bars"));
    assert_eq!(result["wiring"]["mobile_menu"], false);
    assert_eq!(result["notifications"][0]["message"], MSG_INIT_DEGRADED);
}

#[test]
fn test_run_json_script() {
    let temp_dir = temp_config_dir();
    let script = write_file(
        temp_dir.path(),
        "scroll.json",
        r#"{"steps": [{"type": "scroll", "y": 2850}, {"wait_ms": 16}]}"#,
    );

    let output = run_folio(
        &["run", script.to_str().unwrap(), "--json"],
        temp_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["active_link"], "#projects");
    assert_eq!(result["navbar_scrolled"], true);
}

#[test]
fn test_run_missing_script_fails_validation() {
    let temp_dir = temp_config_dir();
    let missing = temp_dir.path().join("nope.toml");

    let output = run_folio(&["run", missing.to_str().unwrap()], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read script"));
}

#[test]
fn test_run_malformed_script_fails_validation() {
    let temp_dir = temp_config_dir();
    let script = write_file(
        temp_dir.path(),
        "bad.toml",
        "[[steps]]\ntype = \"teleport\"\n",
    );

    let output = run_folio(&["run", script.to_str().unwrap()], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
}
