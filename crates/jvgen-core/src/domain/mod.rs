//! Core domain layer for jvgen.
//!
//! Pure logic only: no filesystem, no XML, no console. Everything that
//! touches the outside world goes through the ports in
//! [`crate::application::ports`].
//!
//! ## Layout
//!
//! - [`config`]: the immutable [`ProjectConfig`] and its builder
//! - [`placeholder`]: the closed placeholder set and [`RenderContext`]
//! - [`naming`]: [`ModuleName`] and its derived spellings
//! - [`template_id`]: one [`TemplateId`] per static template
//! - [`blueprint`]: relative layouts for project, demo and module runs
//! - [`project_structure`]: the rendered tree handed to the writer
//! - [`descriptor`]: build descriptor vocabulary

pub mod blueprint;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod naming;
pub mod placeholder;
pub mod project_structure;
pub mod template_id;

mod validation;

pub use blueprint::{Blueprint, BlueprintKind};
pub use config::{ProjectConfig, ProjectConfigBuilder};
pub use descriptor::{DescriptorInfo, ManagedDependency, PatchOutcome};
pub use error::{DomainError, ErrorCategory};
pub use naming::ModuleName;
pub use placeholder::{Placeholder, RenderContext};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use template_id::TemplateId;
pub use validation::DomainValidator;
