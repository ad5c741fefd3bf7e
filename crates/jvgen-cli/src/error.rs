//! CLI error type: everything a command can fail with, how it is shown and
//! which exit code it maps to.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use jvgen_core::error::{ErrorCategory as CoreCategory, JvgenError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A required value was neither passed nor promptable.
    #[error("Missing {flag}: no interactive terminal to prompt on")]
    NoTerminal { flag: &'static str },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Anything raised by `jvgen-core` or an adapter, shown as-is.
    #[error(transparent)]
    Core(#[from] JvgenError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be rendered as JSON.
    #[error("Failed to serialise output: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// The user answered "no".
    #[error("Operation cancelled")]
    Cancelled,

    /// Built without a cargo feature the command needs.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<jvgen_core::domain::DomainError> for CliError {
    fn from(err: jvgen_core::domain::DomainError) -> Self {
        CliError::Core(err.into())
    }
}

/// Exit-code classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl CliError {
    /// What the user can do about it.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Run with --help to see the accepted values".into()],
            Self::NoTerminal { flag } => vec![
                format!("Pass {flag} on the command line"),
                "Or run from an interactive terminal to be prompted".into(),
            ],
            Self::ConfigError { .. } => vec![
                format!(
                    "Check the config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Show the effective values with 'jvgen config list'".into(),
                "Recreate the defaults with 'jvgen init --force'".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check permissions on the target directory".into(),
                "Check free disk space".into(),
            ],
            Self::Serialization { .. } => vec![
                "Rerun without --output-format json".into(),
                "This is a bug; please report it with the --verbose output".into(),
            ],
            Self::Prompt { .. } => vec!["Pass every value as a flag and add --yes".into()],
            Self::Cancelled => vec!["Nothing was written".into()],
            Self::FeatureNotAvailable { feature } => vec![format!(
                "Reinstall with the feature enabled: cargo install jvgen-cli --features {feature}"
            )],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::NoTerminal { .. } | Self::Cancelled => {
                ErrorCategory::UserError
            }
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict | CoreCategory::Template => {
                    ErrorCategory::UserError
                }
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Serialization { .. } | Self::Prompt { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    /// 1 internal, 2 user error, 3 not found, 4 configuration.
    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |t| t.red().bold().to_string()),
            self
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {} {err}\n",
                    paint("Caused by:", |t| t.dimmed().to_string())
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  - {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |t| t.dimmed().to_string())
            ));
        }
        out
    }

    /// Emit one tracing event at a severity matching the category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => tracing::warn!(error = %self),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self)
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source);
        }
    }
}

/// Attach a message to foreign errors at the call-site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jvgen_core::application::ApplicationError;
    use jvgen_core::domain::DomainError;
    use std::io;
    use std::path::PathBuf;

    fn core(err: impl Into<JvgenError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn core_errors_map_to_exit_codes() {
        let invalid = core(DomainError::InvalidModuleName { value: "X".into() });
        assert_eq!(invalid.exit_code(), 2);

        let exists = core(ApplicationError::ProjectExists {
            path: PathBuf::from("/tmp/shop"),
        });
        assert_eq!(exists.exit_code(), 2);

        let not_found = core(ApplicationError::ProjectRootNotFound {
            start: PathBuf::from("/tmp"),
        });
        assert_eq!(not_found.exit_code(), 3);

        let config = core(JvgenError::Configuration {
            message: "bad".into(),
        });
        assert_eq!(config.exit_code(), 4);

        let internal = core(ApplicationError::filesystem("/tmp/x", "disk full"));
        assert_eq!(internal.exit_code(), 1);
    }

    #[test]
    fn cli_errors_map_to_exit_codes() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into()
            }
            .exit_code(),
            2
        );
        assert_eq!(CliError::NoTerminal { flag: "--yes" }.exit_code(), 2);
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn core_message_is_shown_unwrapped() {
        let err = core(ApplicationError::ProjectExists {
            path: PathBuf::from("/tmp/shop"),
        });
        assert!(err.to_string().contains("/tmp/shop"));
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn no_terminal_names_the_flag() {
        let err = CliError::NoTerminal {
            flag: "--group-id",
        };
        assert!(err.to_string().contains("--group-id"));
        assert!(err.suggestions().iter().any(|s| s.contains("--group-id")));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::Cancelled;
        let s = err.format_plain(false);
        assert!(s.contains("Error: Operation cancelled"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("read-only filesystem"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: read-only filesystem"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
