//! Driven (output) ports - implemented by infrastructure.
//!
//! The `jvgen-adapters` crate provides the implementations.

use std::path::{Path, PathBuf};

use crate::domain::{DescriptorInfo, ManagedDependency, PatchOutcome, TemplateId};
use crate::error::JvgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `jvgen_adapters::filesystem::LocalFilesystem` (production)
/// - `jvgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Mutating calls never create missing parents on their own except
/// [`Filesystem::create_dir_all`]; callers go through
/// [`WriteJournal`](crate::application::WriteJournal).
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> JvgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> JvgenResult<()>;

    fn read_file(&self, path: &Path) -> JvgenResult<String>;

    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn remove_file(&self, path: &Path) -> JvgenResult<()>;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &Path) -> JvgenResult<()>;

    /// Absolute form of `path`.
    fn canonicalize(&self, path: &Path) -> JvgenResult<PathBuf>;
}

/// Port for template text lookup.
///
/// Implemented by `jvgen_adapters::BuiltinTemplates`, which embeds every
/// template at compile time and optionally prefers files from an override
/// directory.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    fn get(&self, id: TemplateId) -> JvgenResult<String>;
}

/// Port for reading and patching the parent build descriptor.
///
/// Implemented by `jvgen_adapters::PomEditor`. Every method takes the
/// descriptor text and returns new text; nothing is written here. `path` is
/// only used to annotate errors.
#[cfg_attr(test, mockall::automock)]
pub trait DescriptorEditor: Send + Sync {
    /// Recover the project coordinates.
    fn extract(&self, path: &Path, content: &str) -> JvgenResult<DescriptorInfo>;

    /// Add `module_path` to the `<modules>` list.
    fn declare_module(
        &self,
        path: &Path,
        content: &str,
        module_path: &str,
    ) -> JvgenResult<PatchOutcome>;

    /// Register `dependency` under `<dependencyManagement>`, right after the
    /// managed dependency whose artifact id is `anchor`.
    fn add_managed_dependency(
        &self,
        path: &Path,
        content: &str,
        dependency: &ManagedDependency,
        anchor: &str,
    ) -> JvgenResult<PatchOutcome>;
}
