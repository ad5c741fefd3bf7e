//! `pom.xml` extraction and patching.
//!
//! The descriptor is scanned once with a streaming `quick-xml` reader into a
//! flat list of closed elements with their byte spans. Lookups match on the
//! element path from `<project>` down, so `<parent>` and dependency
//! coordinates never shadow the project's own. Patches splice text at those
//! spans; everything else in the document is kept byte for byte.

use std::path::Path;

use quick_xml::{Reader, events::Event};
use thiserror::Error;
use tracing::{debug, instrument};

use jvgen_core::{
    application::{ApplicationError, ports::DescriptorEditor},
    domain::{
        DescriptorInfo, ManagedDependency, PatchOutcome,
        config::{DEFAULT_ARTIFACT_ID, DEFAULT_VERSION},
        descriptor::PACKAGE_PROPERTY,
    },
    error::{JvgenError, JvgenResult},
};

const INDENT: &str = "    ";

const MODULES: &[&str] = &["project", "modules"];
const MODULE: &[&str] = &["project", "modules", "module"];
const MANAGED_DEPENDENCY: &[&str] = &[
    "project",
    "dependencyManagement",
    "dependencies",
    "dependency",
];
const PACKAGE: &[&str] = &["project", "properties", PACKAGE_PROPERTY];

#[derive(Debug, Error)]
enum ScanError {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("element <{0}> is never closed")]
    Unclosed(String),

    #[error("root element is <{0}>, expected <project>")]
    WrongRoot(String),

    #[error("document has no root element")]
    Empty,
}

/// One closed element.
#[derive(Debug)]
struct Node {
    path: Vec<String>,
    /// Direct text content, trimmed.
    text: String,
    /// Direct children as `(name, text)`.
    children: Vec<(String, String)>,
    /// Offset of the opening `<`.
    start: usize,
    /// Offset of the closing tag's `<`; `None` for `<empty/>` elements.
    close_start: Option<usize>,
    /// Offset just past the element.
    end: usize,
}

impl Node {
    fn is(&self, path: &[&str]) -> bool {
        self.path.len() == path.len() && self.path.iter().zip(path).all(|(a, b)| a == b)
    }

    fn child(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_str())
    }
}

struct Frame {
    name: String,
    text: String,
    children: Vec<(String, String)>,
    start: usize,
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn scan(content: &str) -> Result<Vec<Node>, ScanError> {
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<Frame> = Vec::new();
    let mut nodes = Vec::new();
    let mut root_seen = false;

    loop {
        let event = reader.read_event()?;
        let pos = reader.buffer_position() as usize;

        match event {
            Event::Start(e) => {
                let name = local_name(e.local_name().as_ref());
                if stack.is_empty() {
                    if name != "project" {
                        return Err(ScanError::WrongRoot(name));
                    }
                    root_seen = true;
                }
                stack.push(Frame {
                    name,
                    text: String::new(),
                    children: Vec::new(),
                    start: tag_start(content, pos),
                });
            }
            Event::Empty(e) => {
                let name = local_name(e.local_name().as_ref());
                if stack.is_empty() {
                    return Err(ScanError::WrongRoot(name));
                }
                let mut path: Vec<String> = stack.iter().map(|f| f.name.clone()).collect();
                path.push(name.clone());
                if let Some(parent) = stack.last_mut() {
                    parent.children.push((name, String::new()));
                }
                nodes.push(Node {
                    path,
                    text: String::new(),
                    children: Vec::new(),
                    start: tag_start(content, pos),
                    close_start: None,
                    end: pos,
                });
            }
            Event::Text(e) => {
                if let Some(frame) = stack.last_mut() {
                    // A stray `&` only spoils this element's text, not the scan.
                    match e.unescape() {
                        Ok(text) => frame.text.push_str(&text),
                        Err(_) => frame.text.push_str(&String::from_utf8_lossy(&e)),
                    }
                }
            }
            Event::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::End(_) => {
                let Some(frame) = stack.pop() else {
                    continue;
                };
                let text = frame.text.trim().to_string();
                let mut path: Vec<String> = stack.iter().map(|f| f.name.clone()).collect();
                path.push(frame.name.clone());
                if let Some(parent) = stack.last_mut() {
                    parent.children.push((frame.name, text.clone()));
                }
                nodes.push(Node {
                    path,
                    text,
                    children: frame.children,
                    start: frame.start,
                    close_start: Some(content[..pos].rfind("</").unwrap_or(frame.start)),
                    end: pos,
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(ScanError::Unclosed(frame.name));
    }
    if !root_seen {
        return Err(ScanError::Empty);
    }
    Ok(nodes)
}

/// Offset of the `<` that opened the tag ending at `pos`.
fn tag_start(content: &str, pos: usize) -> usize {
    content[..pos].rfind('<').unwrap_or(0)
}

/// Whitespace between the start of the line and `offset`, if that is all
/// there is.
fn line_indent(content: &str, offset: usize) -> Option<&str> {
    let line_start = content[..offset].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &content[line_start..offset];
    prefix.chars().all(char::is_whitespace).then_some(prefix)
}

/// The document's own line terminator, so inserted lines match it.
fn line_ending(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Editor for Maven parent descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PomEditor;

impl PomEditor {
    pub fn new() -> Self {
        Self
    }

    fn nodes(&self, path: &Path, content: &str) -> JvgenResult<Vec<Node>> {
        scan(content).map_err(|e| invalid(path, e))
    }
}

fn invalid(path: &Path, e: ScanError) -> JvgenError {
    ApplicationError::InvalidDescriptor {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn anchor_not_found(path: &Path, anchor: impl Into<String>) -> JvgenError {
    ApplicationError::AnchorNotFound {
        path: path.to_path_buf(),
        anchor: anchor.into(),
    }
    .into()
}

fn text_at<'a>(nodes: &'a [Node], path: &[&str]) -> Option<&'a str> {
    nodes
        .iter()
        .find(|n| n.is(path))
        .map(|n| n.text.as_str())
        .filter(|t| !t.is_empty())
}

impl DescriptorEditor for PomEditor {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn extract(&self, path: &Path, content: &str) -> JvgenResult<DescriptorInfo> {
        let nodes = self.nodes(path, content)?;

        let own = |field: &str| text_at(&nodes, &["project", field]).map(str::to_string);
        let inherited =
            |field: &str| text_at(&nodes, &["project", "parent", field]).map(str::to_string);

        let group_id = own("groupId").or_else(|| inherited("groupId")).ok_or(
            ApplicationError::MissingDescriptorField {
                path: path.to_path_buf(),
                field: "groupId",
            },
        )?;

        let info = DescriptorInfo {
            group_id,
            artifact_id: own("artifactId"),
            version: own("version").or_else(|| inherited("version")),
            name: own("name"),
            description: own("description"),
            package: text_at(&nodes, PACKAGE).map(str::to_string),
        };
        debug!(
            group_id = %info.group_id,
            artifact_id = info.artifact_id.as_deref().unwrap_or(DEFAULT_ARTIFACT_ID),
            version = info.version.as_deref().unwrap_or(DEFAULT_VERSION),
            "Descriptor read"
        );
        Ok(info)
    }

    #[instrument(skip(self, path, content))]
    fn declare_module(
        &self,
        path: &Path,
        content: &str,
        module_path: &str,
    ) -> JvgenResult<PatchOutcome> {
        let nodes = self.nodes(path, content)?;

        if nodes.iter().any(|n| n.is(MODULE) && n.text == module_path) {
            return Ok(PatchOutcome::AlreadyPresent);
        }

        let close = nodes
            .iter()
            .find(|n| n.is(MODULES))
            .and_then(|n| n.close_start)
            .ok_or_else(|| anchor_not_found(path, "</modules>"))?;

        let patched = match line_indent(content, close) {
            Some(indent) => {
                let line_start = close - indent.len();
                let nl = line_ending(content);
                format!(
                    "{}{indent}{INDENT}<module>{module_path}</module>{nl}{}",
                    &content[..line_start],
                    &content[line_start..]
                )
            }
            None => format!(
                "{}<module>{module_path}</module>{}",
                &content[..close],
                &content[close..]
            ),
        };
        Ok(PatchOutcome::Applied(patched))
    }

    #[instrument(
        skip(self, path, content, dependency),
        fields(artifact_id = %dependency.artifact_id)
    )]
    fn add_managed_dependency(
        &self,
        path: &Path,
        content: &str,
        dependency: &ManagedDependency,
        anchor: &str,
    ) -> JvgenResult<PatchOutcome> {
        let nodes = self.nodes(path, content)?;
        let managed = || nodes.iter().filter(|n| n.is(MANAGED_DEPENDENCY));

        if managed().any(|n| n.child("artifactId") == Some(dependency.artifact_id.as_str())) {
            return Ok(PatchOutcome::AlreadyPresent);
        }

        let reference = managed()
            .find(|n| n.child("artifactId") == Some(anchor))
            .ok_or_else(|| anchor_not_found(path, format!("managed dependency {anchor}")))?;

        let indent = line_indent(content, reference.start).unwrap_or("            ");
        let nl = line_ending(content);
        let block = format!(
            "{nl}{indent}<dependency>\
             {nl}{indent}{INDENT}<groupId>{}</groupId>\
             {nl}{indent}{INDENT}<artifactId>{}</artifactId>\
             {nl}{indent}{INDENT}<version>{}</version>\
             {nl}{indent}</dependency>",
            dependency.group_id, dependency.artifact_id, dependency.version
        );

        let at = reference.end;
        Ok(PatchOutcome::Applied(format!(
            "{}{block}{}",
            &content[..at],
            &content[at..]
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>3.3.0</version>
    </parent>

    <groupId>com.example</groupId>
    <artifactId>demo-app</artifactId>
    <version>2.1.0</version>
    <name>Demo &amp; Co</name>

    <modules>
        <module>common</module>
        <module>application/application-user</module>
    </modules>

    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>com.example</groupId>
                <artifactId>application-user</artifactId>
                <version>${project.version}</version>
            </dependency>
            <dependency>
                <groupId>com.baomidou</groupId>
                <artifactId>mybatis-plus</artifactId>
            </dependency>
        </dependencies>
    </dependencyManagement>
</project>
"#;

    fn path() -> &'static Path {
        Path::new("/p/pom.xml")
    }

    fn applied(outcome: PatchOutcome) -> String {
        match outcome {
            PatchOutcome::Applied(text) => text,
            PatchOutcome::AlreadyPresent => panic!("expected a patch"),
        }
    }

    #[test]
    fn extracts_project_coordinates_not_parent_ones() {
        let info = PomEditor.extract(path(), POM).unwrap();
        assert_eq!(info.group_id, "com.example");
        assert_eq!(info.artifact_id.as_deref(), Some("demo-app"));
        assert_eq!(info.version.as_deref(), Some("2.1.0"));
        assert_eq!(info.name.as_deref(), Some("Demo & Co"));
        assert_eq!(info.description, None);
    }

    #[test]
    fn group_and_version_fall_back_to_parent() {
        let pom = r#"<project>
  <parent><groupId>com.corp</groupId><artifactId>base</artifactId><version>7</version></parent>
  <artifactId>child</artifactId>
</project>"#;
        let info = PomEditor.extract(path(), pom).unwrap();
        assert_eq!(info.group_id, "com.corp");
        assert_eq!(info.version.as_deref(), Some("7"));
        assert_eq!(info.artifact_id.as_deref(), Some("child"));
    }

    #[test]
    fn package_property_is_read_when_present() {
        assert_eq!(PomEditor.extract(path(), POM).unwrap().package, None);

        let pom = POM.replace(
            "<modules>",
            "<properties>\n        <jvgen.package>com.example.shop</jvgen.package>\n    \
             </properties>\n\n    <modules>",
        );
        let info = PomEditor.extract(path(), &pom).unwrap();
        assert_eq!(info.package.as_deref(), Some("com.example.shop"));
    }

    #[test]
    fn bare_ampersand_does_not_spoil_the_document() {
        let pom = POM.replace(
            "<name>Demo &amp; Co</name>",
            "<name>R&D Shop</name>\n    <description>Fish & Chips</description>",
        );
        let info = PomEditor.extract(path(), &pom).unwrap();
        assert_eq!(info.group_id, "com.example");
        assert_eq!(info.name.as_deref(), Some("R&D Shop"));
        assert_eq!(info.description.as_deref(), Some("Fish & Chips"));
        assert!(
            PomEditor
                .declare_module(path(), &pom, "application/application-payment")
                .unwrap()
                .is_applied()
        );
    }

    #[test]
    fn missing_group_id_is_reported() {
        let err = PomEditor
            .extract(path(), "<project><artifactId>x</artifactId></project>")
            .unwrap_err();
        assert!(matches!(
            err,
            JvgenError::Application(ApplicationError::MissingDescriptorField {
                field: "groupId",
                ..
            })
        ));
    }

    #[test]
    fn malformed_documents_are_invalid() {
        for bad in [
            "<project><groupId>a</project>",
            "<project>",
            "",
            "<settings/>",
        ] {
            let err = PomEditor.extract(path(), bad).unwrap_err();
            assert!(
                matches!(
                    err,
                    JvgenError::Application(ApplicationError::InvalidDescriptor { .. })
                ),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn module_is_inserted_before_closing_tag_with_sibling_indent() {
        let patched = applied(
            PomEditor
                .declare_module(path(), POM, "application/application-payment")
                .unwrap(),
        );
        let line = "        <module>application/application-payment</module>\n";
        assert!(patched.contains(&format!(
            "        <module>application/application-user</module>\n{line}    </modules>"
        )));
        assert_eq!(patched.len(), POM.len() + line.len());
    }

    #[test]
    fn declared_module_is_left_alone() {
        let outcome = PomEditor
            .declare_module(path(), POM, "application/application-user")
            .unwrap();
        assert_eq!(outcome, PatchOutcome::AlreadyPresent);
    }

    #[test]
    fn module_declaration_is_idempotent() {
        let once = applied(
            PomEditor
                .declare_module(path(), POM, "application/application-payment")
                .unwrap(),
        );
        let again = PomEditor
            .declare_module(path(), &once, "application/application-payment")
            .unwrap();
        assert_eq!(again, PatchOutcome::AlreadyPresent);
        assert_eq!(once.matches("application-payment").count(), 1);
    }

    #[test]
    fn module_name_inside_a_comment_does_not_count() {
        let pom = POM.replace(
            "<modules>",
            "<modules>\n        <!-- <module>application/application-payment</module> -->",
        );
        let outcome = PomEditor
            .declare_module(path(), &pom, "application/application-payment")
            .unwrap();
        assert!(outcome.is_applied());
    }

    #[test]
    fn missing_modules_list_is_an_anchor_error() {
        let err = PomEditor
            .declare_module(path(), "<project><groupId>a.b</groupId></project>", "x")
            .unwrap_err();
        assert!(matches!(
            err,
            JvgenError::Application(ApplicationError::AnchorNotFound { .. })
        ));
    }

    #[test]
    fn dependency_goes_right_after_the_anchor() {
        let dep = ManagedDependency::internal("com.example", "application-payment");
        let patched = applied(
            PomEditor
                .add_managed_dependency(path(), POM, &dep, "application-user")
                .unwrap(),
        );

        let expected = "<artifactId>application-user</artifactId>
                <version>${project.version}</version>
            </dependency>
            <dependency>
                <groupId>com.example</groupId>
                <artifactId>application-payment</artifactId>
                <version>${project.version}</version>
            </dependency>
            <dependency>
                <groupId>com.baomidou</groupId>";
        assert!(patched.contains(expected), "{patched}");

        // Everything outside the splice is untouched.
        let at = patched
            .find(
                "\n            <dependency>\
                 \n                <groupId>com.example</groupId>\
                 \n                <artifactId>application-payment",
            )
            .unwrap();
        let inserted = patched.len() - POM.len();
        assert_eq!(format!("{}{}", &patched[..at], &patched[at + inserted..]), POM);
    }

    #[test]
    fn inserted_lines_follow_crlf_documents() {
        let pom = POM.replace('\n', "\r\n");
        let dep = ManagedDependency::internal("com.example", "application-payment");

        let declared = applied(
            PomEditor
                .declare_module(path(), &pom, "application/application-payment")
                .unwrap(),
        );
        let patched = applied(
            PomEditor
                .add_managed_dependency(path(), &declared, &dep, "application-user")
                .unwrap(),
        );

        assert!(patched.contains(
            "<module>application/application-payment</module>\r\n    </modules>"
        ));
        assert!(patched.contains(
            "</dependency>\r\n            <dependency>\r\n                \
             <groupId>com.example</groupId>\r\n"
        ));
        assert_eq!(patched.matches('\n').count(), patched.matches("\r\n").count());
    }

    #[test]
    fn registered_dependency_is_left_alone() {
        let dep = ManagedDependency::internal("com.example", "application-payment");
        let once = applied(
            PomEditor
                .add_managed_dependency(path(), POM, &dep, "application-user")
                .unwrap(),
        );
        let again = PomEditor
            .add_managed_dependency(path(), &once, &dep, "application-user")
            .unwrap();
        assert_eq!(again, PatchOutcome::AlreadyPresent);
    }

    #[test]
    fn missing_anchor_fails_without_fallback() {
        let pom = POM.replace("application-user</artifactId>", "application-account</artifactId>");
        let dep = ManagedDependency::internal("com.example", "application-payment");
        let err = PomEditor
            .add_managed_dependency(path(), &pom, &dep, "application-user")
            .unwrap_err();
        assert!(matches!(
            err,
            JvgenError::Application(ApplicationError::AnchorNotFound { .. })
        ));
    }

    #[test]
    fn regular_dependencies_are_not_anchors() {
        let pom = r#"<project>
    <groupId>a.b</groupId>
    <dependencies>
        <dependency>
            <artifactId>application-user</artifactId>
        </dependency>
    </dependencies>
</project>"#;
        let dep = ManagedDependency::internal("a.b", "application-payment");
        assert!(
            PomEditor
                .add_managed_dependency(path(), pom, &dep, "application-user")
                .is_err()
        );
    }
}
