use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A crudgen.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct CrudgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl CrudgenToml {
    /// Open and parse a crudgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve the configured output directory against the manifest's
    /// directory.
    pub fn output_dir(&self) -> PathBuf {
        let output = &self.manifest.project.output;
        match self.path.parent() {
            Some(dir) if output.is_relative() => dir.join(output),
            _ => output.clone(),
        }
    }
}
