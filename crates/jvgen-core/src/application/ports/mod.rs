//! Application ports (traits) for external dependencies.
//!
//! - `Filesystem`: file operations
//! - `TemplateStore`: template text lookup
//! - `DescriptorEditor`: build descriptor extraction and patching
//!
//! Driving ports live in the CLI, which calls the services directly.

pub mod output;

pub use output::{DescriptorEditor, Filesystem, TemplateStore};

#[cfg(test)]
pub use output::{MockDescriptorEditor, MockFilesystem, MockTemplateStore};
