//! Configuration structures for the snip snippet picker.
//!
//! This module provides configuration types for all components of the application:
//!
//! - [`PickerConfig`] - Selection session settings (page size)
//! - [`PreviewConfig`] - Preview loading settings (line/char limits, debounce)
//! - [`CatalogConfig`] - File enumeration settings (depth, symlinks)
//! - [`TuiConfig`] - Terminal UI settings (colors)
//! - [`Config`] - Root configuration combining all settings
//!
//! The configuration is read once per invocation and handed to the session
//! explicitly; nothing in the selection state machine reads it ambiently.

use std::time::Duration;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::preview::PreviewLimits;

/// Color scheme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

/// Configuration for the selection session.
///
/// # Examples
///
/// ```
/// use snip_core::PickerConfig;
///
/// assert_eq!(PickerConfig::default().page_size, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Number of catalog entries shown per page while browsing.
    pub page_size: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self { page_size: 50 }
    }
}

/// Configuration for preview loading.
///
/// # Examples
///
/// ```
/// use snip_core::PreviewConfig;
///
/// let config = PreviewConfig::default();
/// assert_eq!(config.max_lines, 30);
/// assert_eq!(config.max_chars, 1000);
/// assert_eq!(config.debounce_ms, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Maximum number of lines kept in a preview.
    pub max_lines: usize,

    /// Maximum number of characters kept in a preview.
    pub max_chars: usize,

    /// Delay in milliseconds before a highlighted entry is previewed.
    ///
    /// Any highlight change within this window cancels the pending load.
    pub debounce_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_lines: 30,
            max_chars: 1000,
            debounce_ms: 100,
        }
    }
}

impl PreviewConfig {
    /// Returns the truncation limits for preview rendering.
    #[must_use]
    pub const fn limits(&self) -> PreviewLimits {
        PreviewLimits {
            max_lines: self.max_lines,
            max_chars: self.max_chars,
        }
    }

    /// Returns the debounce window as a [`Duration`].
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Configuration for file enumeration under each snippet folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Maximum directory depth below a snippet folder.
    pub max_depth: usize,

    /// Whether symbolic links are followed during enumeration.
    ///
    /// Directory cycles are broken by canonical path either way.
    pub follow_links: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_depth: 32,
            follow_links: true,
        }
    }
}

/// Configuration for the terminal user interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,
}

/// Root configuration for the snippet picker.
///
/// # Examples
///
/// ```
/// use snip_core::Config;
///
/// let config = Config::from_json_str(r#"{"snippet_folders": ["/srv/snippets"]}"#)?;
/// assert_eq!(config.snippet_folders, vec!["/srv/snippets"]);
/// assert_eq!(config.picker.page_size, 50);
/// # Ok::<(), snip_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordered list of snippet folder paths, as configured.
    ///
    /// May contain blanks, duplicates, or hidden paths; validation happens
    /// when a session starts.
    pub snippet_folders: Vec<String>,

    /// Selection session configuration.
    pub picker: PickerConfig,

    /// Preview configuration.
    pub preview: PreviewConfig,

    /// Enumeration configuration.
    pub catalog: CatalogConfig,

    /// Terminal UI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Parses a configuration from JSON text, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file from disk.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(%path, folders = config.snippet_folders.len(), "Loaded configuration");
        Ok(config)
    }

    /// Checks option values that would make a session meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.picker.page_size == 0 {
            return Err(ConfigError::invalid_option(
                "picker.page_size",
                "must be at least 1",
            ));
        }
        if self.preview.max_lines == 0 {
            return Err(ConfigError::invalid_option(
                "preview.max_lines",
                "must be at least 1",
            ));
        }
        if self.preview.max_chars == 0 {
            return Err(ConfigError::invalid_option(
                "preview.max_chars",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_config_defaults() {
        let config = PreviewConfig::default();
        assert_eq!(config.limits().max_lines, 30);
        assert_eq!(config.limits().max_chars, 1000);
        assert_eq!(config.debounce(), Duration::from_millis(100));
    }

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.max_depth, 32);
        assert!(config.follow_links);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            snippet_folders: vec!["/a".to_owned(), "/b".to_owned()],
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"preview": {"max_lines": 10}}"#;
        let config = Config::from_json_str(json).unwrap();
        assert_eq!(config.preview.max_lines, 10);
        // Other fields should have defaults
        assert_eq!(config.preview.max_chars, 1000);
        assert_eq!(config.picker.page_size, 50);
        assert!(config.snippet_folders.is_empty());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = Config::from_json_str(r#"{"picker": {"page_size": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { ref option, .. } if option == "picker.page_size"));
    }

    #[test]
    fn test_zero_preview_limits_rejected() {
        assert!(Config::from_json_str(r#"{"preview": {"max_lines": 0}}"#).is_err());
        assert!(Config::from_json_str(r#"{"preview": {"max_chars": 0}}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Utf8Path::new("/definitely/not/here/snip.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_color_scheme_serialization() {
        insta::assert_snapshot!(serde_json::to_string(&ColorScheme::Dark).unwrap(), @r#""dark""#);
        assert_eq!(
            serde_json::to_string(&ColorScheme::Auto).unwrap(),
            r#""auto""#
        );
    }
}
