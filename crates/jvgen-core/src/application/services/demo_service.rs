//! Demo Service - (re)write the user CRUD example into an existing project.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        journal::{WriteSummary, write_atomically},
        ports::{DescriptorEditor, Filesystem, TemplateStore},
        services::{
            discovery::{ProjectContext, load_project},
            render::render_blueprint,
        },
    },
    domain::{Blueprint, RenderContext},
    error::JvgenResult,
};

pub struct DemoService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    editor: Box<dyn DescriptorEditor>,
}

impl DemoService {
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        editor: Box<dyn DescriptorEditor>,
    ) -> Self {
        Self {
            store,
            filesystem,
            editor,
        }
    }

    /// Find the project around `start` and read its configuration.
    pub fn locate(&self, start: &Path) -> JvgenResult<ProjectContext> {
        load_project(self.filesystem.as_ref(), self.editor.as_ref(), start)
    }

    /// Write the demo files into `project`, overwriting earlier copies.
    #[instrument(skip_all, fields(root = %project.root.display()))]
    pub fn write(&self, project: &ProjectContext) -> JvgenResult<WriteSummary> {
        let config = &project.config;
        let blueprint = Blueprint::demo(config.package_path());
        let structure = render_blueprint(
            self.store.as_ref(),
            &blueprint,
            &RenderContext::new(config),
            &project.root,
        )?;

        let summary = write_atomically(self.filesystem.as_ref(), &structure)?;
        info!(
            created = summary.files_created,
            overwritten = summary.files_overwritten,
            "Demo written"
        );
        Ok(summary)
    }

    pub fn run(&self, start: &Path) -> JvgenResult<WriteSummary> {
        let project = self.locate(start)?;
        self.write(&project)
    }
}
