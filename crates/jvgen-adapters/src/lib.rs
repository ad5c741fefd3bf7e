//! Infrastructure adapters for jvgen.
//!
//! This crate implements the ports defined in `jvgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod pom_editor;

pub use builtin_templates::{BuiltinTemplates, TEMPLATES_DIR_ENV};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use pom_editor::PomEditor;
