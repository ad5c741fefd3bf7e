//! Interactive prompts.
//!
//! Prompting only happens when stdin is a terminal and the `interactive`
//! feature is compiled in. Otherwise a required value that is missing is a
//! [`CliError::NoTerminal`] naming the flag to pass instead.

use std::io::{self, IsTerminal};

use jvgen_core::domain::DomainError;

use crate::error::{CliError, CliResult};

/// Validator applied to prompted input; the error text is shown before the
/// prompt repeats.
pub type Validator = fn(&str) -> Result<(), DomainError>;

#[derive(Debug, Clone, Copy)]
pub struct Prompter {
    enabled: bool,
}

impl Prompter {
    /// Prompt only when a terminal is attached.
    pub fn detect() -> Self {
        Self {
            enabled: cfg!(feature = "interactive") && io::stdin().is_terminal(),
        }
    }

    /// Never prompt.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Ask for a value that has no default, re-prompting until `validate`
    /// accepts it.
    pub fn required(
        &self,
        label: &str,
        flag: &'static str,
        validate: Validator,
    ) -> CliResult<String> {
        if !self.enabled {
            return Err(CliError::NoTerminal { flag });
        }
        imp::input(label, None, Some(validate))
    }

    /// Ask for a value, offering `default`. Without a terminal the default is
    /// taken as-is.
    pub fn with_default(&self, label: &str, default: &str) -> CliResult<String> {
        if !self.enabled {
            return Ok(default.to_string());
        }
        imp::input(label, Some(default), None)
    }

    /// Yes/no question, defaulting to yes.
    pub fn confirm(&self, question: &str) -> CliResult<bool> {
        if !self.enabled {
            return Err(CliError::NoTerminal { flag: "--yes" });
        }
        imp::confirm(question)
    }
}

#[cfg(feature = "interactive")]
mod imp {
    use dialoguer::{Confirm, Input};

    use super::Validator;
    use crate::error::{CliError, CliResult};

    fn prompt_error(e: dialoguer::Error) -> CliError {
        CliError::Prompt {
            message: e.to_string(),
        }
    }

    pub(super) fn input(
        label: &str,
        default: Option<&str>,
        validate: Option<Validator>,
    ) -> CliResult<String> {
        let mut input = Input::<String>::new().with_prompt(label);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if let Some(validate) = validate {
            input = input.validate_with(move |value: &String| -> Result<(), String> {
                validate(value.trim()).map_err(|e| e.to_string())
            });
        }
        input
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(prompt_error)
    }

    pub(super) fn confirm(question: &str) -> CliResult<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(true)
            .interact()
            .map_err(prompt_error)
    }
}

#[cfg(not(feature = "interactive"))]
mod imp {
    use super::Validator;
    use crate::error::{CliError, CliResult};

    pub(super) fn input(
        _label: &str,
        _default: Option<&str>,
        _validate: Option<Validator>,
    ) -> CliResult<String> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    pub(super) fn confirm(_question: &str) -> CliResult<bool> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}
