//! CLI command handlers for Folio.
//!
//! Headless access to the page controller: scripted session replay, the
//! stored theme preference, email checks and configuration.

pub mod check_email;
pub mod common;
pub mod config;
pub mod run;
pub mod theme;

// Re-export types used by main.rs and tests
pub use check_email::CheckEmailArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use run::RunArgs;
pub use theme::ThemeArgs;
