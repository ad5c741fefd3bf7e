//! `jvgen demo`: (re)write the user CRUD example into an existing project.

use tracing::instrument;

use jvgen_adapters::{LocalFilesystem, PomEditor};
use jvgen_core::application::DemoService;

use crate::{
    cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager,
    prompt::Prompter,
};

#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = DemoService::new(
        Box::new(super::template_store(&config)?),
        Box::new(LocalFilesystem::new()),
        Box::new(PomEditor::new()),
    );

    let project = service.locate(&super::current_dir()?)?;

    output.header("Writing the user CRUD example")?;
    output.field("Project", &project.root.display().to_string())?;
    output.field("Group ID", project.config.group_id())?;
    output.field("Package", project.config.package_name())?;
    output.print("")?;
    output.warning("Existing example files will be overwritten")?;

    super::confirm(&global, &output, &Prompter::detect(), "Write the example files?")?;

    let spinner = output.spinner("Writing example files...");
    let result = service.write(&project);
    spinner.finish_and_clear();
    let summary = result?;

    output.success(&format!(
        "Example written: {} files created, {} overwritten",
        summary.files_created, summary.files_overwritten
    ))?;
    output.print("")?;
    output.print("Try it:")?;
    output.print("  mvn clean install && cd starter && mvn spring-boot:run")?;
    output.print("  curl http://localhost:8080/api/users")?;
    output.json(&summary)?;
    Ok(())
}
