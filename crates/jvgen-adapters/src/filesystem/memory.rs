//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use jvgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{JvgenError, JvgenResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service. Paths are taken literally; relative paths resolve against `/`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn has_children(&self, dir: &Path) -> bool {
        self.files.keys().any(|p| p.parent() == Some(dir))
            || self.directories.iter().any(|p| p.parent() == Some(dir))
    }
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file and its parents directly, outside any journal.
    pub fn seed_file(&self, path: impl AsRef<Path>, content: &str) -> JvgenResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)
    }

    /// Make the next write to `path` fail partway, the way an interrupted
    /// `std::fs::write` does: the file is left holding a prefix of the new
    /// content.
    pub fn fail_next_write_to(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.into());
        }
    }

    /// A file's content (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> JvgenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_poisoned())
    }

    fn write(&self) -> JvgenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_poisoned())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> JvgenResult<()> {
        let mut inner = self.write()?;
        if inner.files.contains_key(path) {
            return Err(ApplicationError::filesystem(path, "A file exists at this path").into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> JvgenResult<()> {
        let mut inner = self.write()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(
                    ApplicationError::filesystem(path, "Parent directory does not exist").into(),
                );
            }
        }

        if inner.failing_writes.remove(path) {
            let partial: String = content.chars().take(content.chars().count() / 2).collect();
            inner.files.insert(path.to_path_buf(), partial);
            return Err(ApplicationError::filesystem(path, "Injected write failure").into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> JvgenResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::filesystem(path, "No such file").into())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }

    fn remove_file(&self, path: &Path) -> JvgenResult<()> {
        let mut inner = self.write()?;
        match inner.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::filesystem(path, "No such file").into()),
        }
    }

    fn remove_dir(&self, path: &Path) -> JvgenResult<()> {
        let mut inner = self.write()?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::filesystem(path, "No such directory").into());
        }
        if inner.has_children(path) {
            return Err(ApplicationError::filesystem(path, "Directory not empty").into());
        }
        inner.directories.remove(path);
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> JvgenResult<PathBuf> {
        let mut resolved = PathBuf::from("/");
        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(segment) => resolved.push(segment),
            }
        }

        if self.exists(&resolved) {
            Ok(resolved)
        } else {
            Err(ApplicationError::filesystem(path, "No such file or directory").into())
        }
    }
}

fn lock_poisoned() -> JvgenError {
    JvgenError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/a.txt"), "x").is_err());
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/a.txt"), "x").unwrap();
        assert_eq!(fs.contents("/p/a.txt").as_deref(), Some("x"));
    }

    #[test]
    fn remove_dir_only_removes_empty_directories() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/p/q/a.txt", "x").unwrap();

        assert!(fs.remove_dir(Path::new("/p/q")).is_err());
        fs.remove_file(Path::new("/p/q/a.txt")).unwrap();
        fs.remove_dir(Path::new("/p/q")).unwrap();
        assert!(!fs.exists(Path::new("/p/q")));
        assert!(fs.is_dir(Path::new("/p")));
    }

    #[test]
    fn injected_failure_truncates_once() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.fail_next_write_to("/p/bad.txt");

        assert!(fs.write_file(Path::new("/p/bad.txt"), "abcd").is_err());
        assert_eq!(fs.contents("/p/bad.txt").as_deref(), Some("ab"));
        assert!(fs.write_file(Path::new("/p/good.txt"), "x").is_ok());
        assert!(fs.write_file(Path::new("/p/bad.txt"), "abcd").is_ok());
    }

    #[test]
    fn canonicalize_resolves_dots() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/q")).unwrap();
        assert_eq!(
            fs.canonicalize(Path::new("/p/q/../q/.")).unwrap(),
            PathBuf::from("/p/q")
        );
        assert!(fs.canonicalize(Path::new("/missing")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.seed_file("/x/pom.xml", "<project/>").unwrap();
        assert!(handle.is_file(Path::new("/x/pom.xml")));
    }
}
