// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside application errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid group id '{value}': expected a dotted lowercase name like com.mycompany")]
    InvalidGroupId { value: String },

    #[error("Invalid artifact id '{value}': use lowercase letters, digits and hyphens")]
    InvalidArtifactId { value: String },

    #[error("Invalid module name '{value}': use lowercase letters, digits and hyphens")]
    InvalidModuleName { value: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Unresolved placeholders in template '{template}': {}", tokens.join(", "))]
    UnresolvedPlaceholders {
        template: String,
        tokens: Vec<String>,
    },

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidGroupId { .. } => vec![
                "Group ids are dotted lowercase segments".into(),
                "Examples: com.mycompany, org.example.shop".into(),
            ],
            Self::InvalidArtifactId { .. } => vec![
                "Artifact ids start with a lowercase letter".into(),
                "Only lowercase letters, digits and '-' are allowed".into(),
                "Examples: my-app, order-service".into(),
            ],
            Self::InvalidModuleName { .. } => vec![
                "Module names start with a lowercase letter".into(),
                "Only lowercase letters, digits and '-' are allowed".into(),
                "Examples: payment, order, user-management".into(),
            ],
            Self::UnresolvedPlaceholders { template, .. } => vec![
                format!("Template '{}' references unknown placeholders", template),
                "Check custom templates in your templates directory".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidGroupId { .. }
            | Self::InvalidArtifactId { .. }
            | Self::InvalidModuleName { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::UnresolvedPlaceholders { .. } => ErrorCategory::Template,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Internal,
}
