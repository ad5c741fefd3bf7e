//! Scaffold Service - new project generation.
//!
//! 1. Lay out the project blueprint for the configured package
//! 2. Render every template strictly
//! 3. Write the tree through one journal, refusing existing targets

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        journal::{WriteSummary, write_atomically},
        ports::{Filesystem, TemplateStore},
        services::render::render_blueprint,
    },
    domain::{Blueprint, ProjectConfig, ProjectStructure, RenderContext},
    error::JvgenResult,
};

pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Render the complete project without touching the filesystem.
    pub fn plan(&self, config: &ProjectConfig) -> JvgenResult<ProjectStructure> {
        let blueprint = Blueprint::project(config.package_path());
        let context = RenderContext::new(config);
        render_blueprint(
            self.store.as_ref(),
            &blueprint,
            &context,
            config.output_dir(),
        )
    }

    /// Generate a new project at `config.output_dir()`.
    ///
    /// Fails with [`ApplicationError::ProjectExists`] if the directory is
    /// already there. On any later failure nothing is left behind.
    #[instrument(
        skip_all,
        fields(
            group_id = config.group_id(),
            artifact_id = config.artifact_id(),
            output_dir = %config.output_dir().display()
        )
    )]
    pub fn generate(&self, config: &ProjectConfig) -> JvgenResult<WriteSummary> {
        let root = config.output_dir();
        if self.filesystem.exists(root) {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        let structure = self.plan(config)?;
        info!(
            files = structure.file_count(),
            directories = structure.directory_count(),
            "Project rendered"
        );

        let summary = write_atomically(self.filesystem.as_ref(), &structure)?;
        info!("Project generated");
        Ok(summary)
    }
}
