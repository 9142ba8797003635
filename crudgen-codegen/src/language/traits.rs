//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use crudgen_ir::FieldType;

use crate::{Error, GenerateError, GenerateReport};

/// Trait for language-specific code generators.
///
/// Implement this trait to emit CRUD handlers for a new target stack.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rs")
    fn file_extension(&self) -> &'static str;

    /// Render every output file without writing to disk.
    ///
    /// Fails if any model cannot be rendered.
    fn preview(&self) -> Result<Vec<PreviewFile>, Error>;

    /// Render and write all files into the specified output directory.
    fn generate(&self, output_dir: &Path) -> Result<GenerateReport, GenerateError>;
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// Trait for mapping field types to language-specific type strings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a field type to a language-specific type string
    fn map_field_type(&self, ty: FieldType) -> &'static str;
}
