//! Build descriptor vocabulary shared by the services and the descriptor
//! editor port.

use std::path::PathBuf;

use crate::domain::{
    ProjectConfig,
    config::{DEFAULT_ARTIFACT_ID, DEFAULT_DESCRIPTION, DEFAULT_VERSION},
};

/// File name of the parent build descriptor.
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// At least one of these must sit next to [`DESCRIPTOR_FILE`] for a
/// directory to count as a project root.
pub const ROOT_MARKER_DIRS: [&str; 3] = ["domain", "common", "application"];

/// Managed dependency every generated parent descriptor carries; new
/// application modules are registered right after it.
pub const REFERENCE_DEPENDENCY: &str = "application-user";

/// `<properties>` entry recording the base Java package, so projects whose
/// package differs from their group id keep it for later additions.
pub const PACKAGE_PROPERTY: &str = "jvgen.package";

/// Coordinates recovered from an existing descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptorInfo {
    pub group_id: String,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Base package from [`PACKAGE_PROPERTY`]; the group id when absent.
    pub package: Option<String>,
}

impl DescriptorInfo {
    /// Turn extracted coordinates into a configuration rooted at `root`.
    ///
    /// Extracted values are taken as-is: the descriptor already exists, so
    /// they are not re-validated against the prompt patterns.
    pub fn into_config(self, root: impl Into<PathBuf>) -> ProjectConfig {
        let artifact_id = self
            .artifact_id
            .unwrap_or_else(|| DEFAULT_ARTIFACT_ID.to_string());
        let package = self.package.unwrap_or_else(|| self.group_id.clone());
        ProjectConfig::from_parts(
            self.group_id,
            artifact_id.clone(),
            self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            self.name.unwrap_or(artifact_id),
            self.description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            package,
            root.into(),
        )
    }
}

/// A `<dependency>` block to register under `<dependencyManagement>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ManagedDependency {
    /// Internal module dependency, versioned with the parent.
    pub fn internal(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: "${project.version}".into(),
        }
    }
}

/// Result of one descriptor patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The patch was applied; holds the complete new descriptor text.
    Applied(String),
    /// The entry was already declared; the descriptor is unchanged.
    AlreadyPresent,
}

impl PatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}
