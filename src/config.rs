//! Configuration for width measurement

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetCollection, VersionDataset};
use crate::error::{ConfigError, WidthError};
use crate::text::{ClipOptions, ControlCodes, TextMeasure};
use crate::wrap::TextWrapper;

/// Environment variable that selects the Unicode version
pub const UNICODE_VERSION_ENV: &str = "UNICODE_VERSION";

/// Measurement settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Requested Unicode version; `None` means latest
    pub unicode_version: Option<String>,
    /// Cells for East Asian Ambiguous characters (1 or 2)
    pub ambiguous_width: usize,
    /// Tab stop interval, `None` to make TAB zero width
    pub tabstop: Option<usize>,
    pub control_codes: ControlCodes,
    /// JSON file with extra datasets merged over the builtin ones
    pub extra_tables: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unicode_version: None,
            ambiguous_width: 1,
            tabstop: Some(8),
            control_codes: ControlCodes::Parse,
            extra_tables: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/mochi/width.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("width.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring {}: {}", config_path.display(), e);
                    },
                }
            }
        }
        Self::default()
    }

    /// Apply `UNICODE_VERSION` from the environment
    pub fn with_env(self) -> Self {
        self.with_version_override(std::env::var(UNICODE_VERSION_ENV).ok().as_deref())
    }

    /// Apply a version override; empty and `auto` leave the config alone
    pub fn with_version_override(mut self, version: Option<&str>) -> Self {
        match version.map(str::trim) {
            None | Some("") => {},
            Some(v) if v.eq_ignore_ascii_case("auto") => {},
            Some(v) => self.unicode_version = Some(v.to_string()),
        }
        self
    }

    /// Builtin datasets, plus those from `extra_tables` if set
    pub fn datasets(&self) -> Result<Cow<'static, DatasetCollection>, ConfigError> {
        let builtin = DatasetCollection::builtin();
        match &self.extra_tables {
            None => Ok(Cow::Borrowed(builtin)),
            Some(path) => {
                let extra = DatasetCollection::load(path)?;
                Ok(Cow::Owned(builtin.merged_with(&extra)))
            },
        }
    }

    /// Dataset for the configured version.
    ///
    /// A version string with no numeric part falls back to the latest
    /// dataset with a warning instead of failing.
    pub fn select<'c>(&self, collection: &'c DatasetCollection) -> &'c VersionDataset {
        match collection.resolve(self.unicode_version.as_deref()) {
            Ok(dataset) => dataset,
            Err(WidthError::InvalidVersion(version)) => {
                tracing::warn!(
                    "Unicode version {:?} is not valid, using latest {}",
                    version,
                    collection.latest().version
                );
                collection.latest()
            },
            Err(_) => collection.latest(),
        }
    }

    /// Text measurer with these settings
    pub fn measure<'d>(&self, dataset: &'d VersionDataset) -> TextMeasure<'d> {
        TextMeasure::new(dataset)
            .control_codes(self.control_codes)
            .tabstop(self.tabstop.unwrap_or(0))
    }

    pub fn clip_options(&self) -> ClipOptions {
        ClipOptions {
            tabsize: self.tabstop.unwrap_or(0),
            ambiguous_width: self.ambiguous_width,
            ..ClipOptions::default()
        }
    }

    pub fn wrapper<'d>(&self, dataset: &'d VersionDataset, width: usize) -> TextWrapper<'d> {
        TextWrapper::new(dataset, width)
            .control_codes(self.control_codes)
            .tabstop(self.tabstop.unwrap_or(0))
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("mochi"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.unicode_version, None);
        assert_eq!(config.ambiguous_width, 1);
        assert_eq!(config.tabstop, Some(8));
        assert_eq!(config.control_codes, ControlCodes::Parse);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            unicode_version: Some("9.0".into()),
            control_codes: ControlCodes::Strict,
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"strict\""));
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"ambiguous_width": 2}"#).unwrap();
        assert_eq!(config.ambiguous_width, 2);
        assert_eq!(config.tabstop, Some(8));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("width.json");
        let config = Config {
            tabstop: None,
            ..Config::default()
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_version_override() {
        let config = Config::default().with_version_override(Some("12.1"));
        assert_eq!(config.unicode_version.as_deref(), Some("12.1"));
        let config = config.with_version_override(Some("auto"));
        assert_eq!(config.unicode_version.as_deref(), Some("12.1"));
        let config = config.with_version_override(Some(""));
        assert_eq!(config.unicode_version.as_deref(), Some("12.1"));
        let config = Config::default().with_version_override(None);
        assert_eq!(config.unicode_version, None);
    }

    #[test]
    fn test_select() {
        let builtin = DatasetCollection::builtin();
        let mut config = Config::default();
        assert_eq!(config.select(builtin).version.as_str(), "15.1.0");
        config.unicode_version = Some("13.0".into());
        assert_eq!(config.select(builtin).version.as_str(), "13.0.0");
        config.unicode_version = Some("not-a-version".into());
        assert_eq!(config.select(builtin).version.as_str(), "15.1.0");
    }

    #[test]
    fn test_extra_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        let mut future = DatasetCollection::builtin().latest().clone();
        future.version = "99.0.0".parse().unwrap();
        std::fs::write(&path, serde_json::to_string(&vec![future]).unwrap()).unwrap();

        let config = Config {
            extra_tables: Some(path),
            unicode_version: Some("99".into()),
            ..Config::default()
        };
        let collection = config.datasets().unwrap();
        assert_eq!(config.select(&collection).version.as_str(), "99.0.0");
        assert_eq!(collection.oldest().version.as_str(), "4.1.0");
    }

    #[test]
    fn test_missing_extra_tables_is_an_error() {
        let config = Config {
            extra_tables: Some(PathBuf::from("/nonexistent/tables.json")),
            ..Config::default()
        };
        assert!(matches!(config.datasets(), Err(ConfigError::Dataset(_))));
    }

    #[test]
    fn test_tabstop_none_disables_tabs() {
        let config = Config {
            tabstop: None,
            ..Config::default()
        };
        let latest = DatasetCollection::builtin().latest();
        assert_eq!(config.measure(latest).width("a\tb").unwrap(), 2);
        assert_eq!(Config::default().measure(latest).width("a\tb").unwrap(), 9);
    }

    #[test]
    fn test_clip_options_follow_config() {
        let config = Config {
            ambiguous_width: 2,
            tabstop: Some(4),
            ..Config::default()
        };
        let options = config.clip_options();
        assert_eq!(options.ambiguous_width, 2);
        assert_eq!(options.tabsize, 4);
        assert_eq!(options.fillchar, ' ');
        assert!(options.propagate_sgr);
    }
}
