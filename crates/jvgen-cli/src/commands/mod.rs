//! Command handlers, one module per subcommand.

use std::path::PathBuf;

use tracing::debug;

use jvgen_adapters::BuiltinTemplates;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::Prompter,
};

pub mod add;
pub mod completions;
pub mod config;
pub mod demo;
pub mod example;
pub mod generate;
pub mod init;

/// Built-in templates plus any configured override directory.
fn template_store(config: &AppConfig) -> CliResult<BuiltinTemplates> {
    let store = BuiltinTemplates::discover(config.templates.local_path.as_deref())?;
    if let Some(dir) = store.source() {
        debug!(dir = %dir.display(), "Using template overrides");
    }
    Ok(store)
}

/// Ask before writing unless `--yes` or `--quiet` was given.
fn confirm(
    global: &GlobalArgs,
    output: &OutputManager,
    prompter: &Prompter,
    question: &str,
) -> CliResult<()> {
    if global.yes || output.is_quiet() {
        return Ok(());
    }
    if prompter.confirm(question)? {
        Ok(())
    } else {
        Err(CliError::Cancelled)
    }
}

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().with_cli_context(|| "Failed to read the current directory")
}
