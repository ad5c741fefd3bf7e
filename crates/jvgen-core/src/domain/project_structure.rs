//! The rendered tree a generation run writes: relative directories and
//! files under one root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Rendered project tree ready for materialization.
///
/// Entry paths are relative to `root` and are applied in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    root: PathBuf,
    entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    pub fn directory_count(&self) -> usize {
        self.directories().count()
    }

    /// The rendered content of the file at `path`, if the structure has one.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        let path = path.as_ref();
        self.files().find(|f| f.path == path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_in_order() {
        let structure = ProjectStructure::new("/tmp/test")
            .with_directory("src")
            .with_file("src/Main.java", "class Main {}".into());

        assert_eq!(structure.entries().len(), 2);
        assert_eq!(structure.file_count(), 1);
        assert_eq!(structure.directory_count(), 1);
        assert_eq!(structure.entries()[0].path(), Path::new("src"));
        assert!(structure.validate().is_ok());
    }

    #[test]
    fn rejects_duplicates() {
        let structure = ProjectStructure::new("/tmp/test")
            .with_file("pom.xml", String::new())
            .with_file("pom.xml", String::new());

        assert_eq!(
            structure.validate(),
            Err(DomainError::DuplicatePath {
                path: "pom.xml".into()
            })
        );
    }

    #[test]
    fn rejects_empty() {
        let structure = ProjectStructure::new("/tmp/test");
        assert_eq!(structure.validate(), Err(DomainError::EmptyStructure));
    }

    #[test]
    fn rejects_absolute_entries() {
        let structure = ProjectStructure::new("/tmp/test").with_directory("/etc");
        assert!(matches!(
            structure.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn looks_up_files_by_path() {
        let structure = ProjectStructure::new("/tmp/test").with_file("README.md", "# hi".into());
        assert_eq!(structure.file("README.md").map(|f| f.content.as_str()), Some("# hi"));
        assert!(structure.file("missing").is_none());
    }
}
