//! Locating an existing project and reading its configuration back.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DescriptorEditor, Filesystem},
    },
    domain::{
        ProjectConfig,
        descriptor::{DESCRIPTOR_FILE, ROOT_MARKER_DIRS},
    },
    error::JvgenResult,
};

/// Walk upward from `start` to the nearest project root.
///
/// A root holds the parent descriptor and at least one of the layer
/// directories next to it. The returned path is absolute.
#[instrument(skip_all, fields(start = %start.display()))]
pub fn find_project_root(filesystem: &dyn Filesystem, start: &Path) -> JvgenResult<PathBuf> {
    let start = filesystem.canonicalize(start)?;

    for dir in start.ancestors() {
        if is_project_root(filesystem, dir) {
            debug!(root = %dir.display(), "Project root found");
            return Ok(dir.to_path_buf());
        }
    }

    Err(ApplicationError::ProjectRootNotFound { start }.into())
}

fn is_project_root(filesystem: &dyn Filesystem, dir: &Path) -> bool {
    filesystem.is_file(&dir.join(DESCRIPTOR_FILE))
        && ROOT_MARKER_DIRS
            .iter()
            .any(|marker| filesystem.is_dir(&dir.join(marker)))
}

/// An existing project: where it lives, its descriptor text and the
/// configuration recovered from it.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub descriptor: String,
    pub config: ProjectConfig,
}

impl ProjectContext {
    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(DESCRIPTOR_FILE)
    }
}

/// Discover the project around `start` and extract its configuration.
pub fn load_project(
    filesystem: &dyn Filesystem,
    editor: &dyn DescriptorEditor,
    start: &Path,
) -> JvgenResult<ProjectContext> {
    let root = find_project_root(filesystem, start)?;
    let path = root.join(DESCRIPTOR_FILE);
    let descriptor = filesystem.read_file(&path)?;
    let config = editor.extract(&path, &descriptor)?.into_config(&root);

    debug!(
        group_id = config.group_id(),
        artifact_id = config.artifact_id(),
        "Configuration extracted"
    );

    Ok(ProjectContext {
        root,
        descriptor,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockDescriptorEditor, MockFilesystem};
    use crate::domain::DescriptorInfo;
    use crate::error::JvgenError;

    fn fs_with_root(root: &'static str, marker: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_canonicalize().returning(|p| Ok(p.to_path_buf()));
        fs.expect_is_file()
            .returning(move |p| p == Path::new(root).join("pom.xml"));
        fs.expect_is_dir()
            .returning(move |p| p == Path::new(root).join(marker));
        fs
    }

    #[test]
    fn finds_root_three_levels_up() {
        let fs = fs_with_root("/work/shop", "domain");
        let root = find_project_root(&fs, Path::new("/work/shop/domain/src/main")).unwrap();
        assert_eq!(root, PathBuf::from("/work/shop"));
    }

    #[test]
    fn start_directory_itself_can_be_the_root() {
        let fs = fs_with_root("/work/shop", "application");
        let root = find_project_root(&fs, Path::new("/work/shop")).unwrap();
        assert_eq!(root, PathBuf::from("/work/shop"));
    }

    #[test]
    fn descriptor_without_marker_is_not_a_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_canonicalize().returning(|p| Ok(p.to_path_buf()));
        fs.expect_is_file()
            .returning(|p| p == Path::new("/work/lib/pom.xml"));
        fs.expect_is_dir().returning(|_| false);

        let err = find_project_root(&fs, Path::new("/work/lib/src")).unwrap_err();
        assert_eq!(
            err,
            JvgenError::Application(ApplicationError::ProjectRootNotFound {
                start: PathBuf::from("/work/lib/src")
            })
        );
    }

    #[test]
    fn load_project_uses_the_discovered_root() {
        let mut fs = fs_with_root("/work/shop", "common");
        fs.expect_read_file()
            .returning(|_| Ok("<project/>".to_string()));

        let mut editor = MockDescriptorEditor::new();
        editor
            .expect_extract()
            .withf(|path, _| path == Path::new("/work/shop/pom.xml"))
            .returning(|_, _| {
                Ok(DescriptorInfo {
                    group_id: "com.shop".into(),
                    artifact_id: Some("shop".into()),
                    ..Default::default()
                })
            });

        let project = load_project(&fs, &editor, Path::new("/work/shop/common")).unwrap();
        assert_eq!(project.root, PathBuf::from("/work/shop"));
        assert_eq!(project.config.output_dir(), Path::new("/work/shop"));
        assert_eq!(project.config.package_path(), "com/shop");
    }
}
