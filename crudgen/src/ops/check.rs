//! Check operation - render a manifest in memory.

use std::path::Path;

use crudgen_codegen::Error;
use crudgen_ir::Schema;
use crudgen_manifest::Manifest;

use super::{GenerateOptions, preview};
use crate::reports::CheckReport;

/// Render every model without writing, so template problems surface
/// before anything touches the output directory.
pub fn check(
    config_path: &Path,
    manifest: &Manifest,
    schemas: Vec<Schema>,
) -> Result<CheckReport, Error> {
    let options = GenerateOptions {
        output: manifest.project.output.clone(),
        layout: manifest.project.router,
    };
    let files = preview(&schemas, manifest, &options)?;

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        schemas,
        file_count: files.len(),
    })
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::TemplateError;
    use crudgen_manifest::STARTER_MANIFEST;

    use super::*;

    #[test]
    fn test_check_starter_manifest() {
        let manifest: Manifest = STARTER_MANIFEST.parse().unwrap();
        let schemas = manifest.schemas().unwrap();

        let report = check(Path::new("crudgen.toml"), &manifest, schemas).unwrap();
        assert_eq!(report.schemas.len(), 2);
        assert_eq!(report.file_count, 5);
    }

    #[test]
    fn test_check_reports_missing_identifier() {
        let manifest: Manifest = r#"
[models.Event]
fields = [{ name = "Message", type = "string" }]
"#
        .parse()
        .unwrap();
        let schemas = manifest.schemas().unwrap();

        let err = check(Path::new("crudgen.toml"), &manifest, schemas).unwrap_err();
        assert!(matches!(
            err,
            Error::Template {
                source: TemplateError::MissingIdentifier,
                ..
            }
        ));
    }
}
