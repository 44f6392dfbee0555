//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// Theme fallback mode, used when no theme preference is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Ask the OS for its color scheme
    #[default]
    Auto,
    /// Behave as if the OS reported dark mode
    Dark,
    /// Behave as if the OS reported light mode
    Light,
}

impl ThemeMode {
    /// Parses `auto`, `light` or `dark` (case-insensitive).
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => anyhow::bail!("Invalid theme mode '{other}'. Must be 'auto', 'light', or 'dark'"),
        }
    }

    /// Lowercase name as written to the config file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Preference file override (defaults to `<config dir>/preferences.toml`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<PathBuf>,
}

/// Offsets, breakpoints and delays used by the page controller.
///
/// Pixel values are CSS pixels; durations are milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Height of the fixed header subtracted from scroll targets
    pub header_offset: f64,
    /// Offset added to the scroll position to find the current section
    pub scroll_reference_offset: f64,
    /// Scroll position beyond which the navbar gets the `scrolled` class
    pub navbar_scrolled_threshold: f64,
    /// Viewport width above which the mobile menu is closed on resize
    pub mobile_breakpoint: f64,
    /// Simulated contact submission latency
    pub submit_delay_ms: u64,
    /// Simulated CV preparation latency
    pub cv_delay_ms: u64,
    /// Delay before a new notification becomes visible
    pub notification_show_ms: u64,
    /// Lifetime of a notification before auto-dismiss
    pub notification_auto_hide_ms: u64,
    /// Delay between hiding a notification and removing it
    pub notification_remove_ms: u64,
    /// Scroll coalescing window
    pub scroll_throttle_ms: u64,
    /// Resize settle window
    pub resize_debounce_ms: u64,
    /// Delay before the initial loading overlay is hidden
    pub initial_overlay_hide_ms: u64,
    /// Delay before the degraded-initialization warning is shown
    pub init_failure_notice_ms: u64,
    /// Minimum visible ratio that starts an entrance animation
    pub intersection_threshold: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scroll_reference_offset: 100.0,
            navbar_scrolled_threshold: 50.0,
            mobile_breakpoint: 768.0,
            submit_delay_ms: 2000,
            cv_delay_ms: 1500,
            notification_show_ms: 100,
            notification_auto_hide_ms: 5000,
            notification_remove_ms: 300,
            scroll_throttle_ms: 16,
            resize_debounce_ms: 250,
            initial_overlay_hide_ms: 500,
            init_failure_notice_ms: 1000,
            intersection_threshold: 0.1,
        }
    }
}

impl TimingConfig {
    /// Simulated contact submission latency.
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Simulated CV preparation latency.
    pub const fn cv_delay(&self) -> Duration {
        Duration::from_millis(self.cv_delay_ms)
    }

    /// Delay before a notification becomes visible.
    pub const fn notification_show(&self) -> Duration {
        Duration::from_millis(self.notification_show_ms)
    }

    /// Notification lifetime before auto-dismiss.
    pub const fn notification_auto_hide(&self) -> Duration {
        Duration::from_millis(self.notification_auto_hide_ms)
    }

    /// Delay between hide and removal.
    pub const fn notification_remove(&self) -> Duration {
        Duration::from_millis(self.notification_remove_ms)
    }

    /// Scroll coalescing window.
    pub const fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    /// Resize settle window.
    pub const fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Delay before the initial overlay hide.
    pub const fn initial_overlay_hide(&self) -> Duration {
        Duration::from_millis(self.initial_overlay_hide_ms)
    }

    /// Delay before the degraded-initialization warning.
    pub const fn init_failure_notice(&self) -> Duration {
        Duration::from_millis(self.init_failure_notice_ms)
    }

    /// Validates timing values.
    ///
    /// Delays must be non-zero, offsets non-negative and the intersection
    /// threshold within (0, 1].
    pub fn validate(&self) -> Result<()> {
        let delays = [
            ("submit_delay_ms", self.submit_delay_ms),
            ("cv_delay_ms", self.cv_delay_ms),
            ("notification_show_ms", self.notification_show_ms),
            ("notification_auto_hide_ms", self.notification_auto_hide_ms),
            ("notification_remove_ms", self.notification_remove_ms),
            ("scroll_throttle_ms", self.scroll_throttle_ms),
            ("resize_debounce_ms", self.resize_debounce_ms),
            ("initial_overlay_hide_ms", self.initial_overlay_hide_ms),
            ("init_failure_notice_ms", self.init_failure_notice_ms),
        ];
        for (name, value) in delays {
            if value == 0 {
                anyhow::bail!("timing.{name} must be greater than zero");
            }
        }

        let offsets = [
            ("header_offset", self.header_offset),
            ("scroll_reference_offset", self.scroll_reference_offset),
            ("navbar_scrolled_threshold", self.navbar_scrolled_threshold),
            ("mobile_breakpoint", self.mobile_breakpoint),
        ];
        for (name, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("timing.{name} must be a non-negative number, got {value}");
            }
        }

        if !(self.intersection_threshold > 0.0 && self.intersection_threshold <= 1.0) {
            anyhow::bail!(
                "timing.intersection_threshold must be within (0, 1], got {}",
                self.intersection_threshold
            );
        }

        Ok(())
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme fallback mode (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Folio/config.toml`
/// - macOS: `~/Library/Application Support/Folio/config.toml`
/// - Windows: `%APPDATA%\Folio\config.toml`
///
/// `FOLIO_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Controller offsets and delays
    #[serde(default)]
    pub timing: TimingConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Honors `FOLIO_CONFIG_DIR`, otherwise uses the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Folio");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolves the preference file, honoring the `paths.preferences` override.
    pub fn preferences_path(&self) -> Result<PathBuf> {
        match &self.paths.preferences {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("preferences.toml")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()?;

        if let Some(path) = &self.paths.preferences {
            if path.as_os_str().is_empty() {
                anyhow::bail!("paths.preferences must not be empty");
            }
        }

        Ok(())
    }
}
