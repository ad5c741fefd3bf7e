//! `jvgen add <module>`: add an application module to an existing project.

use tracing::{info, instrument};

use jvgen_adapters::{LocalFilesystem, PomEditor};
use jvgen_core::application::{ModulePlan, ModuleService, PatchStatus};

use crate::{
    cli::{AddArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

#[instrument(skip_all, fields(module = %args.name))]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = ModuleService::new(
        Box::new(super::template_store(&config)?),
        Box::new(LocalFilesystem::new()),
        Box::new(PomEditor::new()),
    );

    let plan = service.prepare(&super::current_dir()?, &args.name)?;
    show_plan(&plan, &output)?;

    super::confirm(&global, &output, &Prompter::detect(), "Add the module?")?;

    let report = service.apply(plan)?;
    info!(artifact_id = %report.artifact_id, "Module added");

    output.success(&format!(
        "Module '{}' created at {}",
        report.artifact_id,
        report.module_dir.display()
    ))?;
    output.json(&report)?;
    Ok(())
}

fn show_plan(plan: &ModulePlan, out: &OutputManager) -> CliResult<()> {
    let root = &plan.project.root;
    let relative = plan.module_dir.strip_prefix(root).unwrap_or(&plan.module_dir);

    out.header(&format!("Adding module {}", plan.module))?;
    out.field("Project", &root.display().to_string())?;
    out.field("Module dir", &relative.display().to_string())?;
    out.field("Files", &plan.structure().file_count().to_string())?;

    match plan.module_declaration {
        PatchStatus::Applied => out.info("pom.xml: module will be declared in <modules>")?,
        PatchStatus::AlreadyPresent => out.warning("pom.xml: module already declared")?,
    }
    match plan.dependency_registration {
        PatchStatus::Applied => {
            out.info("pom.xml: dependency will be added to <dependencyManagement>")?
        }
        PatchStatus::AlreadyPresent => out.warning("pom.xml: managed dependency already present")?,
    }
    out.print("")?;
    Ok(())
}
