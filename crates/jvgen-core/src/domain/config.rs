//! Project configuration value object.
//!
//! A [`ProjectConfig`] is built once per invocation, either from user input
//! (prompts, flags, defaults) or from an existing parent descriptor, and is
//! read by every rendering step afterwards. There are no setters.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, validation::DomainValidator};

pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_DESCRIPTION: &str = "A Java 25 LTS Project";
pub const DEFAULT_ARTIFACT_ID: &str = "app";

/// Immutable project configuration.
///
/// Invariant: `package_path` is `package_name` with `.` replaced by `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    group_id: String,
    artifact_id: String,
    version: String,
    project_name: String,
    project_description: String,
    package_name: String,
    package_path: String,
    output_dir: PathBuf,
}

impl ProjectConfig {
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    /// Preset used by `jvgen example`.
    pub fn example() -> Self {
        Self {
            group_id: "com.example.demo".into(),
            artifact_id: "demo-app".into(),
            version: DEFAULT_VERSION.into(),
            project_name: "Demo Application".into(),
            project_description: "A demo application for testing".into(),
            package_name: "com.example.demo".into(),
            package_path: "com/example/demo".into(),
            output_dir: PathBuf::from("./demo-app"),
        }
    }

    /// Unvalidated constructor for values that already live in a descriptor.
    pub(crate) fn from_parts(
        group_id: String,
        artifact_id: String,
        version: String,
        project_name: String,
        project_description: String,
        package_name: String,
        output_dir: PathBuf,
    ) -> Self {
        let package_path = package_name.replace('.', "/");
        Self {
            group_id,
            artifact_id,
            version,
            project_name,
            project_description,
            package_name,
            package_path,
            output_dir,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_description(&self) -> &str {
        &self.project_description
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn package_path(&self) -> &str {
        &self.package_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Same configuration rooted somewhere else.
    pub fn relocated(&self, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..self.clone()
        }
    }
}

/// Builder for [`ProjectConfig`].
///
/// Only `group_id` and `artifact_id` are required; everything else falls
/// back to the same defaults the interactive prompts offer.
#[derive(Debug, Default, Clone)]
pub struct ProjectConfigBuilder {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    project_name: Option<String>,
    project_description: Option<String>,
    package_name: Option<String>,
    output_dir: Option<PathBuf>,
}

impl ProjectConfigBuilder {
    pub fn group_id(mut self, value: impl Into<String>) -> Self {
        self.group_id = Some(value.into());
        self
    }

    pub fn artifact_id(mut self, value: impl Into<String>) -> Self {
        self.artifact_id = Some(value.into());
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    pub fn project_name(mut self, value: impl Into<String>) -> Self {
        self.project_name = Some(value.into());
        self
    }

    pub fn project_description(mut self, value: impl Into<String>) -> Self {
        self.project_description = Some(value.into());
        self
    }

    /// Defaults to the group id.
    pub fn package_name(mut self, value: impl Into<String>) -> Self {
        self.package_name = Some(value.into());
        self
    }

    /// Defaults to `./<artifact_id>`.
    pub fn output_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(value.into());
        self
    }

    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let group_id = non_empty(self.group_id).ok_or(DomainError::MissingRequiredField {
            field: "group_id",
        })?;
        let artifact_id = non_empty(self.artifact_id).ok_or(DomainError::MissingRequiredField {
            field: "artifact_id",
        })?;

        DomainValidator::validate_group_id(&group_id)?;
        DomainValidator::validate_artifact_id(&artifact_id)?;

        let package_name = non_empty(self.package_name).unwrap_or_else(|| group_id.clone());
        DomainValidator::validate_group_id(&package_name)?;
        let package_path = package_name.replace('.', "/");

        Ok(ProjectConfig {
            version: non_empty(self.version).unwrap_or_else(|| DEFAULT_VERSION.into()),
            project_name: non_empty(self.project_name).unwrap_or_else(|| artifact_id.clone()),
            project_description: non_empty(self.project_description)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.into()),
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(format!("./{artifact_id}"))),
            group_id,
            artifact_id,
            package_name,
            package_path,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
