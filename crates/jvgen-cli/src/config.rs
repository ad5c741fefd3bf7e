//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `JVGEN_*` environment variables, `__` between sections
//!    (`JVGEN_DEFAULTS__VERSION=2.0.0`)
//! 3. `.jvgen.toml` in the current directory
//! 4. The `--config` file, or the user config file
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use jvgen_core::domain::config::{DEFAULT_DESCRIPTION, DEFAULT_VERSION};

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".jvgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Offered as the group id when `--group-id` is absent.
    pub group_id: Option<String>,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of template overrides.
    pub local_path: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            group_id: None,
            version: DEFAULT_VERSION.into(),
            description: DEFAULT_DESCRIPTION.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.
    /// Without it the user config file is read if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(config_file, Path::new(LOCAL_CONFIG_FILE))
    }

    fn load_from(config_file: Option<&Path>, local_file: &Path) -> anyhow::Result<Self> {
        let primary = match config_file {
            Some(path) => File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .add_source(
                Config::try_from(&AppConfig::default())
                    .context("Failed to serialise default configuration")?,
            )
            .add_source(primary)
            .add_source(
                File::from(local_file.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("JVGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.jvgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "jvgen", "jvgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_generator_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.version, "1.0.0");
        assert_eq!(cfg.defaults.description, "A Java 25 LTS Project");
        assert_eq!(cfg.defaults.group_id, None);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("jvgen.toml");
        fs::write(
            &path,
            "[defaults]\ngroup_id = \"com.acme\"\n\n[templates]\nlocal_path = \"/opt/tpl\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(Some(&path), &temp.path().join("none.toml")).unwrap();
        assert_eq!(cfg.defaults.group_id.as_deref(), Some("com.acme"));
        assert_eq!(cfg.defaults.version, "1.0.0");
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("/opt/tpl")));
    }

    #[test]
    fn local_file_wins_over_explicit_file() {
        let temp = TempDir::new().unwrap();
        let main = temp.path().join("main.toml");
        let local = temp.path().join(".jvgen.toml");
        fs::write(&main, "[defaults]\nversion = \"2.0.0\"\n").unwrap();
        fs::write(&local, "[defaults]\nversion = \"3.0.0\"\n").unwrap();

        let cfg = AppConfig::load_from(Some(&main), &local).unwrap();
        assert_eq!(cfg.defaults.version, "3.0.0");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert!(AppConfig::load_from(Some(&missing), &temp.path().join("x.toml")).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
