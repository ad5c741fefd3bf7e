//! # jvgen
//!
//! Generator for layered multi-module Maven projects.
//!
//! `main` parses arguments, installs tracing, then hands over to [`run`],
//! which loads configuration and dispatches the subcommand. Every failure
//! comes back as a [`CliError`], printed once on stderr:
//!
//! | Exit | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    // Help and version exit 0 on stdout; usage errors exit 2 on stderr.
    let cli = Cli::try_parse().unwrap_or_else(|e| e.exit());

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let verbose = cli.global.verbose > 0;
    match run(cli) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let Cli { global, command } = cli;

    let config = AppConfig::load(global.config.as_deref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })?;
    let output = OutputManager::new(&global, &config);
    debug!(format = ?output.format(), yes = global.yes, "Starting command");

    match command {
        Commands::Generate(args) => commands::generate::execute(args, global, config, output),
        Commands::Example(args) => commands::example::execute(args, global, config, output),
        Commands::Demo => commands::demo::execute(global, config, output),
        Commands::Add(args) => commands::add::execute(args, global, config, output),
        Commands::Init(args) => commands::init::execute(args, global, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();

    let message = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{message}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_manifest() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn every_subcommand_is_registered() {
        let cmd = Cli::command();
        let names: Vec<_> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        for expected in [
            "generate",
            "example",
            "demo",
            "add",
            "init",
            "completions",
            "config",
        ] {
            assert!(names.contains(&expected), "missing subcommand {expected}");
        }
    }
}
