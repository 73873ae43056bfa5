//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `COOKOUT__<SECTION>__<KEY>`, e.g.
//!    `COOKOUT__LABELS__EVENT=Barbeque`
//! 3. Config file (`--config FILE`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use cookout_core::domain::{DomainError, EntityLabels};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Entity names rendered into validation messages.
    pub labels: LabelsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelsConfig {
    pub event: String,
    pub collection: String,
    pub participant: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let labels = EntityLabels::default();
        Self {
            labels: LabelsConfig {
                event: labels.event().into(),
                collection: labels.collection().into(),
                participant: labels.participant().into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let config = Config::builder()
            .set_default("labels.event", defaults.labels.event)?
            .set_default("labels.collection", defaults.labels.collection)?
            .set_default("labels.participant", defaults.labels.participant)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("COOKOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cookout.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cookout", "cookout")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(Self::local_path)
    }

    /// Per-directory configuration file.
    pub fn local_path() -> PathBuf {
        PathBuf::from(".cookout.toml")
    }

    /// Entity labels described by the `[labels]` section.
    pub fn entity_labels(&self) -> Result<EntityLabels, DomainError> {
        EntityLabels::new(
            &self.labels.event,
            &self.labels.collection,
            &self.labels.participant,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_labels_are_domain_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.labels.event, "Event");
        assert_eq!(cfg.entity_labels().unwrap(), EntityLabels::default());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.labels, AppConfig::default().labels);
    }

    #[test]
    fn missing_required_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&temp.path().join("absent.toml"), true).is_err());
    }

    #[test]
    fn file_overrides_defaults_per_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[labels]\nevent = \"BarbequeDto\"\nparticipant = \"PersonDto\"\n")
            .unwrap();

        let cfg = AppConfig::load_from(&path, true).unwrap();
        assert_eq!(cfg.entity_labels().unwrap(), EntityLabels::legacy());
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn blank_label_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.labels.collection = " ".into();
        assert!(cfg.entity_labels().is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
