//! Application layer for jvgen.
//!
//! This layer contains:
//! - **Services**: use case orchestration (scaffold, demo, module)
//! - **Ports**: traits for the filesystem, template store and descriptor editor
//! - **Journal**: all-or-nothing batch writes
//! - **Errors**: orchestration failures
//!
//! Business rules live in `crate::domain`.

pub mod error;
pub mod journal;
pub mod ports;
pub mod services;

pub use services::{
    DemoService, ModulePlan, ModuleReport, ModuleService, PatchStatus, ProjectContext,
    ScaffoldService, find_project_root, load_project,
};

pub use journal::{WriteJournal, WriteSummary, write_atomically};
pub use ports::{DescriptorEditor, Filesystem, TemplateStore};

pub use error::ApplicationError;
