//! Manifest types and parsing for crudgen.toml files.

mod file;
mod parse;
mod starter;

use std::path::PathBuf;

use crudgen_core::RouterLayout;
use crudgen_ir::Schema;
pub use file::CrudgenToml;
use indexmap::IndexMap;
use serde::Deserialize;
pub use starter::STARTER_MANIFEST;

use crate::{ModelDescription, Result, extract_schemas};

/// Conventional manifest file name.
pub const MANIFEST_FILE: &str = "crudgen.toml";

/// Output directory used when `[project] output` is not set.
pub const DEFAULT_OUTPUT: &str = "api/rest";

/// Root manifest for crudgen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project options
    #[serde(default)]
    pub project: ProjectConfig,

    /// Irregular plurals, e.g. `Person = "People"`
    #[serde(default)]
    pub plurals: IndexMap<String, String>,

    /// Model descriptions in document order. Bodies are checked by the
    /// extractor, not by serde.
    #[serde(default)]
    pub models: IndexMap<String, toml::Value>,
}

/// The `[project]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory the generated files are written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// How route registrations are written.
    #[serde(default)]
    pub router: RouterLayout,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            router: RouterLayout::default(),
        }
    }
}

impl Manifest {
    /// The declared models as extractor input.
    pub fn model_descriptions(&self) -> Vec<ModelDescription> {
        self.models
            .iter()
            .map(|(name, body)| ModelDescription::new(name, body.clone()))
            .collect()
    }

    /// Extract a schema for every declared model, in document order.
    pub fn schemas(&self) -> Result<Vec<Schema>> {
        extract_schemas(&self.model_descriptions())
    }

    /// Check if a model is declared.
    pub fn has_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }
}
