//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`LibraryLimits`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SHELF_LIBRARY__MAX_BOOKS=20`, `SHELF_OUTPUT__NO_COLOR=true`
//! 3. Config file (`--config FILE`, or the platform default path if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use shelf_core::domain::LibraryLimits;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Limits for scenarios that do not declare their own.
    pub library: LimitsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_books: usize,
    pub max_borrowed: usize,
    pub max_patrons: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library: LimitsConfig {
                max_books: 10,
                max_borrowed: 3,
                max_patrons: 10,
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Resolve configuration from defaults, file and environment.
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
        let defaults = toml::to_string(&Self::default()).context("serialising defaults")?;

        let config: Self = Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("SHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?
            .try_deserialize()
            .context("invalid configuration")?;

        config.limits().context("invalid [library] section")?;
        Ok(config)
    }

    /// Default library limits, validated.
    pub fn limits(&self) -> Result<LibraryLimits, shelf_core::domain::DomainError> {
        LibraryLimits::new(
            self.library.max_books,
            self.library.max_borrowed,
            self.library.max_patrons,
        )
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.shelf.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "shelf", "shelf")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".shelf.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid_limits() {
        let limits = AppConfig::default().limits().unwrap();
        assert_eq!(limits.max_books(), 10);
        assert_eq!(limits.max_borrowed(), 3);
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let cfg = AppConfig::load_from(Path::new("/does/not/exist.toml"), false).unwrap();
        assert_eq!(cfg.library, AppConfig::default().library);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let path = PathBuf::from("/does/not/exist.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_overrides_some_keys() {
        let file = write_config("[library]\nmax_books = 4\n");
        let cfg = AppConfig::load_from(file.path(), true).unwrap();
        assert_eq!(cfg.library.max_books, 4);
        assert_eq!(cfg.library.max_patrons, 10);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let file = write_config("[library]\nmax_borrowed = 0\n");
        let err = AppConfig::load_from(file.path(), true).unwrap_err();
        assert!(format!("{err:#}").contains("max_borrowed"));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
