//! Tracing setup. The core and adapter crates only emit events; the
//! subscriber is installed here, once, before any command runs.
//!
//! `RUST_LOG` wins when set. Otherwise the level comes from the flags:
//! warn by default, `-v` info, `-vv` debug, `-vvv` trace, `-q` error.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

const CRATES: [&str; 3] = ["jvgen", "jvgen_core", "jvgen_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(args)));

    // Events go to stderr so stdout stays clean for `--output-format json`.
    let events = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(args.verbose >= 2)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn directives(args: &GlobalArgs) -> String {
    let level = level_for(args);
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
            yes: false,
        }
    }

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(level_for(&flags(0, false)), LevelFilter::WARN);
        assert_eq!(level_for(&flags(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&flags(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&flags(7, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(level_for(&flags(0, true)), LevelFilter::ERROR);
    }

    #[test]
    fn one_directive_per_crate() {
        assert_eq!(
            directives(&flags(1, false)),
            "jvgen=info,jvgen_core=info,jvgen_adapters=info"
        );
    }
}
