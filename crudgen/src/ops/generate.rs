//! Generate operation - render and write the handlers for a manifest.

use std::path::PathBuf;

use crudgen_codegen::{Error, GenerateError, GenerateReport, IrregularPlurals, PreviewFile};
use crudgen_codegen_rust::{Generator, LanguageCodegen};
use crudgen_core::RouterLayout;
use crudgen_ir::Schema;
use crudgen_manifest::Manifest;
use tracing::info;

/// Where and how to write, after command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub output: PathBuf,
    pub layout: RouterLayout,
}

/// Naming policy with the manifest's `[plurals]` overrides.
pub fn plural_policy(manifest: &Manifest) -> IrregularPlurals {
    manifest.plurals.iter().collect()
}

fn generator<'a>(
    schemas: &'a [Schema],
    manifest: &Manifest,
    options: &GenerateOptions,
) -> Generator<'a, IrregularPlurals> {
    Generator::new(schemas)
        .with_policy(plural_policy(manifest))
        .with_layout(options.layout)
}

/// Render every file without writing.
pub fn preview(
    schemas: &[Schema],
    manifest: &Manifest,
    options: &GenerateOptions,
) -> Result<Vec<PreviewFile>, Error> {
    generator(schemas, manifest, options).preview()
}

/// Render every file, then write them under the output directory.
pub fn generate(
    schemas: &[Schema],
    manifest: &Manifest,
    options: &GenerateOptions,
) -> Result<GenerateReport, GenerateError> {
    info!(
        models = schemas.len(),
        output = %options.output.display(),
        layout = %options.layout,
        "generating"
    );
    generator(schemas, manifest, options).generate(&options.output)
}
