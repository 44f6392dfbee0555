//! Shared test fixtures for controller and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use folio::config::TimingConfig;
use folio::controller::PageController;
use folio::dom::{FormField, MemoryDocument, PageLayout};
use folio::storage::MemoryStore;
use folio::theme::FixedColorScheme;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::Duration;
use tempfile::TempDir;

/// Controller over the stock portfolio page, initialized with a light OS scheme.
pub fn portfolio_controller() -> PageController<MemoryDocument, MemoryStore> {
    controller_with(PageLayout::portfolio(), MemoryStore::new(), false)
}

/// Controller over `layout`, initialized against a fixed OS scheme.
pub fn controller_with(
    layout: PageLayout,
    store: MemoryStore,
    prefers_dark: bool,
) -> PageController<MemoryDocument, MemoryStore> {
    let mut controller =
        PageController::new(MemoryDocument::new(layout), store, TimingConfig::default());
    controller.initialize(&FixedColorScheme(prefers_dark));
    controller
}

/// Types the four contact fields.
pub fn fill_contact_form(
    controller: &mut PageController<MemoryDocument, MemoryStore>,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) {
    let doc = controller.registry_mut();
    doc.set_field(FormField::Name, name);
    doc.set_field(FormField::Email, email);
    doc.set_field(FormField::Subject, subject);
    doc.set_field(FormField::Message, message);
}

/// Shorthand for virtual milliseconds.
pub const fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Path to the folio binary
pub fn folio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_folio")
}

/// Runs folio with an isolated config directory.
pub fn run_folio(args: &[&str], config_dir: &Path) -> Output {
    Command::new(folio_bin())
        .env("FOLIO_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute folio")
}

/// Creates a temp config directory whose config pins the theme fallback to light.
pub fn temp_config_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("config.toml"),
        "[ui]\ntheme_mode = \"light\"\n",
    )
    .expect("Failed to write config");
    temp_dir
}

/// Writes `content` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON output: {e}\nstdout: {stdout}\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// A script filling in and submitting the contact form, then waiting it out.
pub const CONTACT_SCRIPT: &str = r#"
[[steps]]
type = "input"
field = "name"
value = "Ada Lovelace"

[[steps]]
type = "input"
field = "email"
value = "ada@example.com"

[[steps]]
type = "input"
field = "subject"
value = "Collaboration"

[[steps]]
type = "input"
field = "message"
value = "Let's build an engine."

[[steps]]
type = "submit"

[[steps]]
wait_ms = 2000
"#;
