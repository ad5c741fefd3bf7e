//! Module Service - add an application module to an existing project.
//!
//! Preparing a module does every check and renders every file, including
//! the patched parent descriptor, without writing anything. Applying it
//! writes the whole batch through one journal.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        journal::{WriteSummary, write_atomically},
        ports::{DescriptorEditor, Filesystem, TemplateStore},
        services::{
            discovery::{ProjectContext, load_project},
            render::render_blueprint,
        },
    },
    domain::{
        Blueprint, ManagedDependency, ModuleName, PatchOutcome, ProjectStructure, RenderContext,
        descriptor::{DESCRIPTOR_FILE, REFERENCE_DEPENDENCY},
    },
    error::JvgenResult,
};

/// Whether a descriptor patch changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchStatus {
    Applied,
    AlreadyPresent,
}

impl From<&PatchOutcome> for PatchStatus {
    fn from(outcome: &PatchOutcome) -> Self {
        match outcome {
            PatchOutcome::Applied(_) => Self::Applied,
            PatchOutcome::AlreadyPresent => Self::AlreadyPresent,
        }
    }
}

/// A fully rendered module addition, not yet written.
#[derive(Debug, Clone)]
pub struct ModulePlan {
    pub module: ModuleName,
    pub project: ProjectContext,
    pub module_dir: PathBuf,
    pub module_declaration: PatchStatus,
    pub dependency_registration: PatchStatus,
    structure: ProjectStructure,
}

impl ModulePlan {
    pub fn structure(&self) -> &ProjectStructure {
        &self.structure
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    pub module: String,
    pub artifact_id: String,
    pub module_dir: PathBuf,
    pub module_declaration: PatchStatus,
    pub dependency_registration: PatchStatus,
    pub summary: WriteSummary,
}

pub struct ModuleService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    editor: Box<dyn DescriptorEditor>,
}

impl ModuleService {
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

    /// Validate `name`, locate the project around `start` and render the
    /// module plus the patched parent descriptor.
    ///
    /// Nothing is written; an invalid name fails before the filesystem is
    /// even consulted.
    #[instrument(skip_all, fields(module = name, start = %start.display()))]
    pub fn prepare(&self, start: &Path, name: &str) -> JvgenResult<ModulePlan> {
        let module = ModuleName::parse(name)?;

        let project = load_project(self.filesystem.as_ref(), self.editor.as_ref(), start)?;
        let root = &project.root;

        if !self.filesystem.is_dir(&root.join("application")) {
            return Err(ApplicationError::ApplicationDirMissing { root: root.clone() }.into());
        }

        let module_dir = root.join(module.module_path());
        if self.filesystem.exists(&module_dir) {
            return Err(ApplicationError::ModuleExists {
                name: module.artifact_id(),
                path: module_dir,
            }
            .into());
        }

        let config = &project.config;
        let mut structure = render_blueprint(
            self.store.as_ref(),
            &Blueprint::module(&module, config.package_path()),
            &RenderContext::new(config).with_module(&module),
            root,
        )?;

        let descriptor_path = project.descriptor_path();
        let mut descriptor = project.descriptor.clone();

        let declaration =
            self.editor
                .declare_module(&descriptor_path, &descriptor, &module.module_path())?;
        if let PatchOutcome::Applied(text) = &declaration {
            descriptor = text.clone();
        } else {
            warn!(module = %module, "Module already declared in parent descriptor");
        }

        let dependency = ManagedDependency::internal(config.group_id(), module.artifact_id());
        let registration = self.editor.add_managed_dependency(
            &descriptor_path,
            &descriptor,
            &dependency,
            REFERENCE_DEPENDENCY,
        )?;
        if let PatchOutcome::Applied(text) = &registration {
            descriptor = text.clone();
        } else {
            warn!(module = %module, "Managed dependency already registered");
        }

        if declaration.is_applied() || registration.is_applied() {
            structure.add_file(DESCRIPTOR_FILE, descriptor);
        }
        structure.validate()?;

        Ok(ModulePlan {
            module_declaration: PatchStatus::from(&declaration),
            dependency_registration: PatchStatus::from(&registration),
            module,
            project,
            module_dir,
            structure,
        })
    }

    /// Write a prepared module. All-or-nothing, parent descriptor included.
    #[instrument(skip_all, fields(module = %plan.module))]
    pub fn apply(&self, plan: ModulePlan) -> JvgenResult<ModuleReport> {
        let summary = write_atomically(self.filesystem.as_ref(), &plan.structure)?;
        info!(artifact_id = %plan.module.artifact_id(), "Module added");

        Ok(ModuleReport {
            module: plan.module.to_string(),
            artifact_id: plan.module.artifact_id(),
            module_dir: plan.module_dir,
            module_declaration: plan.module_declaration,
            dependency_registration: plan.dependency_registration,
            summary,
        })
    }

    pub fn add_module(&self, start: &Path, name: &str) -> JvgenResult<ModuleReport> {
        let plan = self.prepare(start, name)?;
        self.apply(plan)
    }
}
