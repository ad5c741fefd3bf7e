//! All-or-nothing batch writes.
//!
//! Every mutation of a generation run goes through one [`WriteJournal`]. It
//! records what it changed so that, on the first failure, the batch can be
//! undone in reverse order: overwritten files get their previous content
//! back, created files and directories are removed.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{FsEntry, ProjectStructure},
    error::JvgenResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Change {
    CreatedDir(PathBuf),
    CreatedFile(PathBuf),
    Overwrote { path: PathBuf, previous: String },
}

/// Counts of what a committed batch changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    pub root: PathBuf,
    pub directories_created: usize,
    pub files_created: usize,
    pub files_overwritten: usize,
}

pub struct WriteJournal<'a> {
    filesystem: &'a dyn Filesystem,
    changes: Vec<Change>,
}

impl<'a> WriteJournal<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self {
            filesystem,
            changes: Vec::new(),
        }
    }

    /// Create `path` and any missing ancestors, recording each one created.
    pub fn create_dir_all(&mut self, path: &Path) -> JvgenResult<()> {
        let missing: Vec<PathBuf> = path
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .take_while(|p| !self.filesystem.exists(p))
            .map(Path::to_path_buf)
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        self.filesystem.create_dir_all(path)?;
        // Outermost first, so rollback removes innermost first.
        self.changes
            .extend(missing.into_iter().rev().map(Change::CreatedDir));
        Ok(())
    }

    /// Write `content` to `path`, creating parents and backing up any file
    /// already there.
    pub fn write_file(&mut self, path: &Path, content: &str) -> JvgenResult<()> {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }

        // Recorded before writing: a write that fails halfway may already
        // have truncated the file.
        let change = if self.filesystem.is_file(path) {
            Change::Overwrote {
                path: path.to_path_buf(),
                previous: self.filesystem.read_file(path)?,
            }
        } else {
            Change::CreatedFile(path.to_path_buf())
        };
        self.changes.push(change);
        self.filesystem.write_file(path, content)
    }

    /// Materialize every entry of `structure` under its root.
    pub fn apply(&mut self, structure: &ProjectStructure) -> JvgenResult<()> {
        let root = structure.root();
        self.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => self.create_dir_all(&root.join(&dir.path))?,
                FsEntry::File(file) => self.write_file(&root.join(&file.path), &file.content)?,
            }
        }
        debug!(changes = self.changes.len(), "Structure applied");
        Ok(())
    }

    /// Keep everything and report what changed.
    pub fn commit(self, root: impl Into<PathBuf>) -> WriteSummary {
        let mut summary = WriteSummary {
            root: root.into(),
            ..WriteSummary::default()
        };
        for change in &self.changes {
            match change {
                Change::CreatedDir(_) => summary.directories_created += 1,
                Change::CreatedFile(_) => summary.files_created += 1,
                Change::Overwrote { .. } => summary.files_overwritten += 1,
            }
        }
        summary
    }

    /// Undo every recorded change, newest first.
    ///
    /// Keeps going past individual failures; the first one is returned so
    /// the caller can log it next to the error that triggered the rollback.
    pub fn rollback(self) -> Result<(), ApplicationError> {
        let mut first_failure = None;
        let total = self.changes.len();

        for change in self.changes.into_iter().rev() {
            let (path, result) = match change {
                Change::Overwrote { path, previous } => {
                    let result = self.filesystem.write_file(&path, &previous);
                    (path, result)
                }
                Change::CreatedFile(path) if !self.filesystem.exists(&path) => continue,
                Change::CreatedFile(path) => {
                    let result = self.filesystem.remove_file(&path);
                    (path, result)
                }
                Change::CreatedDir(path) => {
                    let result = self.filesystem.remove_dir(&path);
                    (path, result)
                }
            };

            if let Err(e) = result {
                warn!(path = %path.display(), error = %e, "Could not undo change");
                first_failure.get_or_insert(ApplicationError::RollbackFailed {
                    path,
                    reason: e.to_string(),
                });
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => {
                info!(changes = total, "Rollback successful");
                Ok(())
            }
        }
    }
}

/// Apply `structure` through a fresh journal, rolling back on failure.
///
/// The original error is always the one returned; rollback problems are
/// only logged.
pub fn write_atomically(
    filesystem: &dyn Filesystem,
    structure: &ProjectStructure,
) -> JvgenResult<WriteSummary> {
    let mut journal = WriteJournal::new(filesystem);
    match journal.apply(structure) {
        Ok(()) => Ok(journal.commit(structure.root())),
        Err(e) => {
            warn!(error = %e, "Write failed, rolling back");
            if let Err(rollback) = journal.rollback() {
                warn!(error = %rollback, "Rollback incomplete");
            }
            Err(e)
        }
    }
}
