//! Implementation of the `jvgen generate` command.
//!
//! Responsibility: collect a `ProjectConfig` from flags, config defaults and
//! prompts, call the scaffold service, and display results. No business
//! logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use jvgen_adapters::LocalFilesystem;
use jvgen_core::{
    application::{ScaffoldService, WriteSummary},
    domain::{DomainValidator, ProjectConfig, ProjectStructure},
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

/// Execute `jvgen generate`.
///
/// 1. Resolve every field (flag → config default → prompt → built-in default)
/// 2. Show the configuration
/// 3. `--dry-run`: list what would be written and stop
/// 4. Confirm unless `--yes`
/// 5. Generate via `ScaffoldService` and print next steps
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let prompter = Prompter::detect();
    let project = resolve_config(&args, &config, &prompter)?;

    debug!(
        group_id = project.group_id(),
        artifact_id = project.artifact_id(),
        package = project.package_name(),
        output_dir = %project.output_dir().display(),
        "Configuration resolved"
    );

    let service = ScaffoldService::new(
        Box::new(super::template_store(&config)?),
        Box::new(LocalFilesystem::new()),
    );

    show_configuration(&project, &output)?;

    if args.dry_run {
        let structure = service.plan(&project)?;
        output.info(&format!(
            "Dry run: would create {} files in {} directories under {}",
            structure.file_count(),
            structure.directory_count(),
            structure.root().display(),
        ))?;
        output.json(&DryRun::from(&structure))?;
        return Ok(());
    }

    super::confirm(&global, &output, &prompter, "Generate the project?")?;
    let summary = run(&service, &project, &output)?;
    print_next_steps(&project, &output)?;
    output.json(&summary)?;
    Ok(())
}

/// Generate with a spinner and a success line. Shared with `jvgen example`.
pub(crate) fn run(
    service: &ScaffoldService,
    project: &ProjectConfig,
    output: &OutputManager,
) -> CliResult<WriteSummary> {
    let spinner = output.spinner(&format!("Generating {}...", project.artifact_id()));
    let result = service.generate(project);
    spinner.finish_and_clear();
    let summary = result?;

    info!(
        files = summary.files_created,
        directories = summary.directories_created,
        "Project generated"
    );
    output.success(&format!(
        "Project '{}' created at {} ({} files)",
        project.project_name(),
        summary.root.display(),
        summary.files_created,
    ))?;
    Ok(summary)
}

// ── Configuration capture ────────────────────────────────────────────────────

/// Merge flags, config defaults and prompts into a validated configuration.
///
/// Optional fields are only prompted for when a required one was, so a fully
/// flagged invocation never stops to ask.
fn resolve_config(
    args: &GenerateArgs,
    config: &AppConfig,
    prompter: &Prompter,
) -> CliResult<ProjectConfig> {
    let mut asked = false;

    let group_id = match args.group_id.clone().or_else(|| config.defaults.group_id.clone()) {
        Some(value) => value,
        None => {
            asked = true;
            prompter.required(
                "Group ID (e.g. com.mycompany)",
                "--group-id",
                DomainValidator::validate_group_id,
            )?
        }
    };

    let artifact_id = match args.artifact_id.clone() {
        Some(value) => value,
        None => {
            asked = true;
            prompter.required(
                "Artifact ID (e.g. my-app)",
                "--artifact-id",
                DomainValidator::validate_artifact_id,
            )?
        }
    };

    let optional = |flag: &Option<String>, label: &str, default: &str| -> CliResult<String> {
        match flag {
            Some(value) => Ok(value.clone()),
            None if asked => prompter.with_default(label, default),
            None => Ok(default.to_string()),
        }
    };

    let version = optional(&args.version, "Version", &config.defaults.version)?;
    let name = optional(&args.name, "Project name", &artifact_id)?;
    let description = optional(
        &args.description,
        "Project description",
        &config.defaults.description,
    )?;

    let output_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => PathBuf::from(optional(&None, "Output directory", &format!("./{artifact_id}"))?),
    };

    let mut builder = ProjectConfig::builder()
        .group_id(group_id)
        .artifact_id(artifact_id)
        .version(version)
        .project_name(name)
        .project_description(description)
        .output_dir(output_dir);
    if let Some(package) = &args.package {
        builder = builder.package_name(package.clone());
    }
    Ok(builder.build()?)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

pub(crate) fn show_configuration(project: &ProjectConfig, out: &OutputManager) -> CliResult<()> {
    out.header("Project configuration")?;
    out.field("Group ID", project.group_id())?;
    out.field("Artifact ID", project.artifact_id())?;
    out.field("Version", project.version())?;
    out.field("Name", project.project_name())?;
    out.field("Description", project.project_description())?;
    out.field("Package", project.package_name())?;
    out.field("Location", &project.output_dir().display().to_string())?;
    out.print("")?;
    Ok(())
}

pub(crate) fn print_next_steps(project: &ProjectConfig, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", project.output_dir().display()))?;
    out.print("  mvn clean install")?;
    out.print("  cd starter && mvn spring-boot:run")?;
    out.print("")?;
    out.print("  jvgen add <module>   # add an application module")?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct DryRun<'a> {
    root: &'a Path,
    directories: Vec<&'a Path>,
    files: Vec<&'a Path>,
}

impl<'a> From<&'a ProjectStructure> for DryRun<'a> {
    fn from(structure: &'a ProjectStructure) -> Self {
        Self {
            root: structure.root(),
            directories: structure.directories().map(|d| d.path.as_path()).collect(),
            files: structure.files().map(|f| f.path.as_path()).collect(),
        }
    }
}
