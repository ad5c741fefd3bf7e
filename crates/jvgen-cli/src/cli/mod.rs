//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "jvgen",
    bin_name = "jvgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered Java project generator",
    long_about = "jvgen generates multi-module Maven projects with a layered \
                  architecture (common, domain, infrastructure, adapter, \
                  application, starter) and a complete user CRUD example.",
    after_help = "EXAMPLES:\n\
        \x20 jvgen generate                      # interactive\n\
        \x20 jvgen generate -g com.acme -a shop  # from flags\n\
        \x20 jvgen example                       # preset demo project\n\
        \x20 jvgen demo                          # (re)write the CRUD example\n\
        \x20 jvgen add payment                   # add application-payment",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project.
    #[command(
        visible_aliases = ["gen", "g"],
        about = "Generate a new layered Maven project",
        after_help = "Missing values are prompted for when a terminal is attached.\n\n\
            EXAMPLES:\n\
            \x20 jvgen generate\n\
            \x20 jvgen generate --group-id com.acme --artifact-id shop --yes\n\
            \x20 jvgen generate -g com.acme -a shop --package com.acme.shop -o ../shop"
    )]
    Generate(GenerateArgs),

    /// Generate the preset example project.
    #[command(
        about = "Generate the preset example project (com.example.demo / demo-app)",
        after_help = "EXAMPLES:\n\
            \x20 jvgen example\n\
            \x20 jvgen example --output /tmp/demo-app"
    )]
    Example(ExampleArgs),

    /// Write the user CRUD example into an existing project.
    #[command(
        about = "Write the CRUD example into the current project",
        after_help = "Run anywhere inside a generated project; the root is found \
            by walking up from the current directory.\n\n\
            EXAMPLES:\n\
            \x20 jvgen demo\n\
            \x20 jvgen demo --yes"
    )]
    Demo,

    /// Add an application module to an existing project.
    #[command(
        about = "Add an application module",
        after_help = "Module names are lowercase kebab-case and become \
            application/application-<name>.\n\n\
            EXAMPLES:\n\
            \x20 jvgen add payment\n\
            \x20 jvgen add user-profile --yes"
    )]
    Add(AddArgs),

    /// Initialise a jvgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 jvgen init           # user config directory\n\
            \x20 jvgen init --local   # .jvgen.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 jvgen completions bash > ~/.local/share/bash-completion/completions/jvgen\n\
            \x20 jvgen completions zsh  > ~/.zfunc/_jvgen\n\
            \x20 jvgen completions fish > ~/.config/fish/completions/jvgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the jvgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 jvgen config get defaults.version\n\
            \x20 jvgen config list\n\
            \x20 jvgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `jvgen generate`.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Maven group id, e.g. `com.mycompany`.
    #[arg(short = 'g', long = "group-id", value_name = "GROUP_ID")]
    pub group_id: Option<String>,

    /// Maven artifact id, e.g. `my-app`.
    #[arg(short = 'a', long = "artifact-id", value_name = "ARTIFACT_ID")]
    pub artifact_id: Option<String>,

    /// Project version (default: 1.0.0).
    #[arg(long = "project-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Display name (default: the artifact id).
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Project description.
    #[arg(short = 'd', long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Base Java package (default: the group id).
    #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Output directory (default: ./<artifact-id>).
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── example ───────────────────────────────────────────────────────────────────

/// Arguments for `jvgen example`.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// Output directory (default: ./demo-app).
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `jvgen add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Module name in kebab-case, e.g. `payment` or `user-profile`.
    #[arg(value_name = "MODULE")]
    pub name: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `jvgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.jvgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `jvgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `jvgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.version`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_flags() {
        let cli = Cli::parse_from([
            "jvgen",
            "generate",
            "-g",
            "com.acme",
            "-a",
            "shop",
            "--package",
            "com.acme.shop",
            "-o",
            "out",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate");
        };
        assert_eq!(args.group_id.as_deref(), Some("com.acme"));
        assert_eq!(args.artifact_id.as_deref(), Some("shop"));
        assert_eq!(args.package.as_deref(), Some("com.acme.shop"));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(!args.dry_run);
    }

    #[test]
    fn generate_aliases() {
        for alias in ["gen", "g"] {
            let cli = Cli::parse_from(["jvgen", alias]);
            assert!(matches!(cli.command, Commands::Generate(_)));
        }
    }

    #[test]
    fn yes_is_global() {
        let cli = Cli::parse_from(["jvgen", "add", "payment", "--yes"]);
        assert!(cli.global.yes);
        let Commands::Add(args) = cli.command else {
            panic!("expected Add");
        };
        assert_eq!(args.name, "payment");
    }

    #[test]
    fn add_requires_a_name() {
        assert!(Cli::try_parse_from(["jvgen", "add"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["jvgen", "--quiet", "--verbose", "demo"]);
        assert!(result.is_err());
    }
}
