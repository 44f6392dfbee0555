//! Theme preference and color-scheme detection.
//!
//! The page supports two themes. The applied theme lives on the root
//! document attribute; the stored preference lives in the
//! [`PreferenceStore`](crate::storage::PreferenceStore). When no preference
//! is stored, the environment's reported color scheme decides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ThemeMode;

/// Theme applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette (the default when no signal is available)
    #[default]
    Light,
    /// Dark palette
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the root attribute and to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph shown on the theme toggle.
    ///
    /// The icon advertises the theme a click switches to: a sun while dark,
    /// a moon while light.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    /// Maps the environment's dark-mode signal to a theme.
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Source of the environment's preferred color scheme.
pub trait ColorSchemeSource {
    /// Returns true when the environment reports a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

/// Queries the operating system through the `dark-light` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSource for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => true,
            // Unspecified or a detection error means no dark signal
            Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => false,
        }
    }
}

/// Fixed answer, for tests and for configured overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Builds the color-scheme source selected by the configured theme mode.
#[must_use]
pub fn scheme_for_mode(mode: ThemeMode) -> Box<dyn ColorSchemeSource> {
    match mode {
        ThemeMode::Auto => Box::new(SystemColorScheme),
        ThemeMode::Dark => Box::new(FixedColorScheme(true)),
        ThemeMode::Light => Box::new(FixedColorScheme(false)),
    }
}
