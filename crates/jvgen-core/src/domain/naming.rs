//! Module naming conventions.
//!
//! A module is named once, in kebab-case, and every artifact derives its own
//! spelling from that:
//!
//! | Form              | `user-profile`                      |
//! |-------------------|-------------------------------------|
//! | artifact id       | `application-user-profile`          |
//! | module path       | `application/application-user-profile` |
//! | package segment   | `userprofile`                       |
//! | type name         | `UserProfile`                       |
//! | description       | `user profile`                      |

use std::fmt;

use crate::domain::{error::DomainError, validation::DomainValidator};

/// Validated application module name (`^[a-z][a-z0-9-]*$`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        DomainValidator::validate_module_name(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `application-<name>`
    pub fn artifact_id(&self) -> String {
        format!("application-{}", self.0)
    }

    /// Path of the module relative to the project root, as declared in the
    /// parent `<modules>` list.
    pub fn module_path(&self) -> String {
        format!("application/{}", self.artifact_id())
    }

    pub fn package_segment(&self) -> String {
        self.0.replace('-', "")
    }

    pub fn type_name(&self) -> String {
        self.0.split('-').map(capitalize).collect()
    }

    pub fn description(&self) -> String {
        self.0.replace('-', " ")
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
