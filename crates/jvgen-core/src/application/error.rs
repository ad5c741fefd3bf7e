//! Application layer errors.
//!
//! These are orchestration failures: filesystem access, project discovery
//! and descriptor handling. Business rule violations are
//! [`DomainError`](crate::domain::DomainError).

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    #[error("Module '{name}' already exists at {path}")]
    ModuleExists { name: String, path: PathBuf },

    /// No ancestor of `start` looks like a generated project.
    #[error("No jvgen project found from {start} upwards")]
    ProjectRootNotFound { start: PathBuf },

    #[error("Project at {root} has no application directory")]
    ApplicationDirMissing { root: PathBuf },

    #[error("Invalid build descriptor {path}: {reason}")]
    InvalidDescriptor { path: PathBuf, reason: String },

    #[error("Build descriptor {path} does not declare <{field}>")]
    MissingDescriptorField { path: PathBuf, field: &'static str },

    /// A descriptor patch could not find the element it is positioned against.
    #[error("Cannot patch {path}: anchor {anchor} not found")]
    AnchorNotFound { path: PathBuf, anchor: String },

    /// Cleanup after a failed batch did not complete.
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different artifact id or output directory".into(),
            ],
            Self::ModuleExists { name, .. } => vec![
                format!("Module '{}' is already part of this project", name),
                "Pick another module name".into(),
            ],
            Self::ProjectRootNotFound { .. } => vec![
                "Run this command inside a generated project".into(),
                "A project root has a pom.xml next to a domain, common or application directory"
                    .into(),
            ],
            Self::ApplicationDirMissing { .. } => vec![
                "Modules are added under the application/ directory".into(),
                "Regenerate the project with `jvgen generate`".into(),
            ],
            Self::InvalidDescriptor { .. } | Self::MissingDescriptorField { .. } => vec![
                "Check that pom.xml is well-formed".into(),
                "The project must declare its own <groupId> or a <parent> with one".into(),
            ],
            Self::AnchorNotFound { anchor, .. } => vec![
                format!("pom.xml no longer contains {}", anchor),
                "Register the module by hand or restore the generated parent pom.xml".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } | Self::ModuleExists { .. } => ErrorCategory::Conflict,
            Self::ProjectRootNotFound { .. } | Self::ApplicationDirMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::InvalidDescriptor { .. }
            | Self::MissingDescriptorField { .. }
            | Self::AnchorNotFound { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
        }
    }
}
