//! Sequential file emission.

use std::path::{Path, PathBuf};

use crudgen_core::{File, WriteResult};
use tracing::{debug, info};

use crate::{Error, GenerateError};

/// Writes rendered files under an output root, in the order they are given.
///
/// The emitter stops at the first failure and leaves whatever it already
/// wrote on disk; [`fail`](Self::fail) turns the failure into a
/// [`GenerateError`] that lists those files.
#[derive(Debug)]
pub struct FileEmitter {
    root: PathBuf,
    written: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl FileEmitter {
    /// Create an emitter rooted at `root`. Nothing is touched yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// The output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create `relative` (and its parents) under the root if absent.
    pub fn create_dir(&self, relative: impl AsRef<Path>) -> Result<(), Error> {
        let dir = self.root.join(relative);
        std::fs::create_dir_all(&dir).map_err(|source| Error::io(&dir, source))?;
        debug!(dir = %dir.display(), "created directory");
        Ok(())
    }

    /// Write one file according to its rules.
    pub fn emit(&mut self, file: &File) -> Result<WriteResult, Error> {
        let path = file.full_path(&self.root);
        let result = file
            .write_to(&self.root)
            .map_err(|source| Error::io(&path, source))?;

        match result {
            WriteResult::Written => {
                debug!(path = %path.display(), "wrote file");
                if !self.written.contains(&path) {
                    self.written.push(path);
                }
            }
            WriteResult::Skipped => {
                debug!(path = %path.display(), "skipped existing file");
                if !self.skipped.contains(&path) {
                    self.skipped.push(path);
                }
            }
        }
        Ok(result)
    }

    /// Write `files` in order, stopping at the first failure.
    pub fn emit_all<'a>(&mut self, files: impl IntoIterator<Item = &'a File>) -> Result<(), Error> {
        for file in files {
            self.emit(file)?;
        }
        Ok(())
    }

    /// Files written so far, each once, in first-write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Finish a successful run.
    pub fn finish(self) -> GenerateReport {
        info!(
            root = %self.root.display(),
            written = self.written.len(),
            skipped = self.skipped.len(),
            "generation finished"
        );
        GenerateReport {
            written: self.written,
            skipped: self.skipped,
        }
    }

    /// Abort the run with `source`, keeping the list of files written so far.
    pub fn fail(self, source: Error) -> GenerateError {
        GenerateError {
            written: self.written,
            source,
        }
    }
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Files written, each once, in first-write order.
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
}

impl GenerateReport {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}
