use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;

static GROUP_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)+$").expect("group id pattern is valid")
});

static ARTIFACT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("artifact id pattern is valid"));

/// Centralized input validation.
///
/// Every identifier that ends up in a path or a descriptor is checked here
/// before any filesystem mutation happens.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_group_id(value: &str) -> Result<(), DomainError> {
        if GROUP_ID.is_match(value) {
            Ok(())
        } else {
            Err(DomainError::InvalidGroupId {
                value: value.to_string(),
            })
        }
    }

    pub fn validate_artifact_id(value: &str) -> Result<(), DomainError> {
        if ARTIFACT_ID.is_match(value) {
            Ok(())
        } else {
            Err(DomainError::InvalidArtifactId {
                value: value.to_string(),
            })
        }
    }

    /// Module names share the artifact id alphabet.
    pub fn validate_module_name(value: &str) -> Result<(), DomainError> {
        if ARTIFACT_ID.is_match(value) {
            Ok(())
        } else {
            Err(DomainError::InvalidModuleName {
                value: value.to_string(),
            })
        }
    }
}
