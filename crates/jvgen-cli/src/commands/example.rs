//! `jvgen example`: generate the preset demo project without prompting.

use tracing::instrument;

use jvgen_adapters::LocalFilesystem;
use jvgen_core::{application::ScaffoldService, domain::ProjectConfig};

use crate::{
    cli::{ExampleArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: ExampleArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut project = ProjectConfig::example();
    if let Some(dir) = args.output {
        project = project.relocated(dir);
    }

    let service = ScaffoldService::new(
        Box::new(super::template_store(&config)?),
        Box::new(LocalFilesystem::new()),
    );

    super::generate::show_configuration(&project, &output)?;
    let summary = super::generate::run(&service, &project, &output)?;
    super::generate::print_next_steps(&project, &output)?;
    output.json(&summary)?;
    Ok(())
}
