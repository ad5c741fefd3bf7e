//! Output management and formatting.
//!
//! Human lines go to stdout through [`console::Term`]; in `json` mode they
//! are suppressed so stdout carries exactly one JSON document.

use std::io::{self, IsTerminal};
use std::time::Duration;

use clap::ValueEnum;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

#[derive(Clone, Copy)]
enum Tone {
    Good,
    Warn,
    Note,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins; `auto` falls back to `output.format` from the
    /// config, and `auto` there resolves on whether stdout is a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Plain line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.line(|| msg.to_owned())
    }

    /// `✓ msg` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2713}', Tone::Good, msg)
    }

    /// `⚠ msg` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status('\u{26a0}', Tone::Warn, msg)
    }

    /// `ℹ msg` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2139}', Tone::Note, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.line(|| {
            if self.no_color {
                text.to_owned()
            } else {
                text.cyan().bold().to_string()
            }
        })
    }

    /// `  Label:  value` row.
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        self.line(|| {
            let label = format!("{label}:");
            if self.no_color {
                format!("  {label:<14}{value}")
            } else {
                format!("  {:<14}{}", label.dimmed(), value.bold())
            }
        })
    }

    /// Emit `value` as pretty JSON; only in `json` mode.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        if self.resolved_format != OutputFormat::Json {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value)
            .map_err(|source| CliError::Serialization { source })?;
        self.term.write_line(&text)?;
        Ok(())
    }

    /// Spinner on stderr while a long step runs. Hidden unless human output
    /// goes to a terminal.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.resolved_format != OutputFormat::Human || self.quiet || !io::stderr().is_terminal()
        {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner().with_style(style);
        bar.set_message(msg.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    }

    /// Write one human line; nothing in quiet or json mode.
    fn line(&self, render: impl FnOnce() -> String) -> io::Result<()> {
        if self.quiet || self.resolved_format == OutputFormat::Json {
            return Ok(());
        }
        self.term.write_line(&render())
    }

    fn status(&self, symbol: char, tone: Tone, msg: &str) -> io::Result<()> {
        self.line(|| {
            if self.no_color {
                return format!("{symbol} {msg}");
            }
            let symbol = symbol.to_string();
            match tone {
                Tone::Good => format!("{} {}", symbol.green().bold(), msg.green()),
                Tone::Warn => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
                Tone::Note => format!("{} {}", symbol.blue().bold(), msg.blue()),
            }
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: format,
            yes: false,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn only_human_output_is_colored() {
        assert!(!make_manager(false, OutputFormat::Human).no_color);
        assert!(make_manager(false, OutputFormat::Plain).no_color);
        assert!(make_manager(false, OutputFormat::Json).no_color);
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(make_manager(false, OutputFormat::Json).format(), OutputFormat::Json);
        assert_eq!(make_manager(false, OutputFormat::Plain).format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
            yes: false,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }

    struct Unserialisable;

    impl Serialize for Unserialisable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("no JSON form"))
        }
    }

    #[test]
    fn json_failure_is_an_internal_error() {
        let err = make_manager(false, OutputFormat::Json)
            .json(&Unserialisable)
            .unwrap_err();
        assert!(matches!(err, CliError::Serialization { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("no JSON form"));

        // Nothing is serialised outside json mode.
        assert!(make_manager(false, OutputFormat::Plain).json(&Unserialisable).is_ok());
    }

    #[test]
    fn spinner_is_hidden_outside_human_mode() {
        assert!(make_manager(false, OutputFormat::Plain).spinner("x").is_hidden());
    }
}
