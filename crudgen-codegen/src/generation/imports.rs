//! Import collection for generated source files.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks `use` items of a generated file and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted, so the
/// rendered import block is deterministic.
///
/// # Example
///
/// ```
/// use crudgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("axum::extract", "State");
/// imports.add("axum::extract", "Path");
/// imports.add_path("sqlx::PgPool");
///
/// let modules: Vec<_> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, ["axum::extract", "sqlx"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> symbols imported from it
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Import `symbol` from `module`.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Import a full path such as `axum::routing::get`.
    ///
    /// A path without `::` is recorded as a bare module import.
    pub fn add_path(&mut self, path: &str) {
        match path.rsplit_once("::") {
            Some((module, symbol)) => self.add(module, symbol),
            None => self.add_module(path),
        }
    }

    /// Import a module itself (`use serde_json;`).
    pub fn add_module(&mut self, module: &str) {
        self.imports.entry(module.to_string()).or_default();
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
