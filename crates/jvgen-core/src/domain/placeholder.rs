//! Placeholder vocabulary and rendering.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Placeholder (closed set)                                │
//! │  └── GROUP_ID, ARTIFACT_ID, ..., MODULE_CLASS            │
//! │                                                          │
//! │  RenderContext (Value Object)                            │
//! │  └── Placeholder -> value, built from ProjectConfig      │
//! │      (+ ModuleName for module templates)                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Templates reference placeholders as `{{KEY}}`. Rendering is a literal
//! replace-all per entry with no recursion, so a value that itself looks
//! like a token is emitted verbatim. XML templates are rendered through
//! [`RenderContext::escaped_for_xml`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{ModuleName, ProjectConfig, error::DomainError};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[A-Z][A-Z0-9_]*\}\}").expect("token pattern is valid"));

/// Every placeholder a template may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    GroupId,
    ArtifactId,
    Version,
    ProjectName,
    ProjectDescription,
    PackageName,
    PackagePath,
    ModuleName,
    ModuleDescription,
    ModulePackage,
    ModuleClass,
}

impl Placeholder {
    pub const ALL: [Placeholder; 11] = [
        Self::GroupId,
        Self::ArtifactId,
        Self::Version,
        Self::ProjectName,
        Self::ProjectDescription,
        Self::PackageName,
        Self::PackagePath,
        Self::ModuleName,
        Self::ModuleDescription,
        Self::ModulePackage,
        Self::ModuleClass,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::GroupId => "GROUP_ID",
            Self::ArtifactId => "ARTIFACT_ID",
            Self::Version => "VERSION",
            Self::ProjectName => "PROJECT_NAME",
            Self::ProjectDescription => "PROJECT_DESCRIPTION",
            Self::PackageName => "PACKAGE_NAME",
            Self::PackagePath => "PACKAGE_PATH",
            Self::ModuleName => "MODULE_NAME",
            Self::ModuleDescription => "MODULE_DESCRIPTION",
            Self::ModulePackage => "MODULE_PACKAGE",
            Self::ModuleClass => "MODULE_CLASS",
        }
    }

    /// The literal token as it appears in template text.
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Context for template rendering.
///
/// Immutable after creation; [`RenderContext::with_module`] returns a new
/// context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    values: BTreeMap<Placeholder, String>,
}

impl RenderContext {
    /// Project-level placeholders.
    pub fn new(config: &ProjectConfig) -> Self {
        let values = BTreeMap::from([
            (Placeholder::GroupId, config.group_id().to_string()),
            (Placeholder::ArtifactId, config.artifact_id().to_string()),
            (Placeholder::Version, config.version().to_string()),
            (Placeholder::ProjectName, config.project_name().to_string()),
            (
                Placeholder::ProjectDescription,
                config.project_description().to_string(),
            ),
            (Placeholder::PackageName, config.package_name().to_string()),
            (Placeholder::PackagePath, config.package_path().to_string()),
        ]);
        Self { values }
    }

    /// Adds the module placeholders derived from `module`.
    pub fn with_module(mut self, module: &ModuleName) -> Self {
        self.values
            .insert(Placeholder::ModuleName, module.as_str().to_string());
        self.values
            .insert(Placeholder::ModuleDescription, module.description());
        self.values
            .insert(Placeholder::ModulePackage, module.package_segment());
        self.values.insert(Placeholder::ModuleClass, module.type_name());
        self
    }

    /// Copy whose values are safe as XML text content.
    pub fn escaped_for_xml(&self) -> Self {
        let values = self
            .values
            .iter()
            .map(|(placeholder, value)| (*placeholder, escape_xml(value)))
            .collect();
        Self { values }
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    /// Replace every known token. Tokens without a value stay verbatim.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (placeholder, value) in &self.values {
            result = result.replace(&placeholder.token(), value);
        }
        result
    }

    /// Render, then fail if any `{{UPPER_SNAKE}}` token survived.
    ///
    /// `name` identifies the template in the error.
    pub fn render_strict(&self, name: &str, template: &str) -> Result<String, DomainError> {
        let rendered = self.render(template);
        let leftovers = unresolved_tokens(template, self);
        if leftovers.is_empty() {
            Ok(rendered)
        } else {
            Err(DomainError::UnresolvedPlaceholders {
                template: name.to_string(),
                tokens: leftovers,
            })
        }
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Tokens in `template` that `ctx` cannot resolve, in first-seen order.
///
/// Scans the template rather than the output so that substituted values
/// which happen to contain braces are never reported.
fn unresolved_tokens(template: &str, ctx: &RenderContext) -> Vec<String> {
    let mut seen = Vec::new();
    for m in TOKEN.find_iter(template) {
        let token = m.as_str();
        let key = &token[2..token.len() - 2];
        let known = Placeholder::from_key(key).is_some_and(|p| ctx.get(p).is_some());
        if !known && !seen.iter().any(|s: &String| s == token) {
            seen.push(token.to_string());
        }
    }
    seen
}
