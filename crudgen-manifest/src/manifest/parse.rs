//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use tracing::debug;

use super::{MANIFEST_FILE, Manifest};
use crate::{Error, Result, validate::ParseContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a crudgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a crudgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_manifest(&manifest, &ParseContext::new(content, filename))?;
    debug!(
        file = filename,
        models = manifest.models.len(),
        "parsed manifest"
    );
    Ok(manifest)
}

/// Checks that need the source text for spans. Model bodies are left to
/// the extractor.
fn validate_manifest(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    if manifest.project.output.as_os_str().is_empty() {
        return Err(ctx.validation_error("`output` cannot be empty", "output"));
    }

    ctx.validate_model_names(manifest.models.keys().map(String::as_str))?;

    for (singular, plural) in &manifest.plurals {
        ctx.validate_name(singular, "plural")?;
        ctx.validate_name(plural, "plural")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crudgen_core::RouterLayout;

    use super::*;
    use crate::DEFAULT_OUTPUT;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest.project.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(manifest.project.router, RouterLayout::Combined);
        assert!(manifest.models.is_empty());
        assert!(manifest.plurals.is_empty());
    }

    #[test]
    fn test_project_options() {
        let manifest: Manifest = r#"
[project]
output = "src/generated"
router = "per-model"
"#
        .parse()
        .unwrap();
        assert_eq!(manifest.project.output, PathBuf::from("src/generated"));
        assert_eq!(manifest.project.router, RouterLayout::PerModel);
    }

    #[test]
    fn test_unknown_router_layout() {
        let err = "[project]\nrouter = \"nested\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_top_level_table() {
        let err = "[cli]\nname = \"x\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_models_keep_document_order() {
        let manifest: Manifest = r#"
[models.Zebra]
fields = [{ name = "ID", type = "int" }]

[models.Apple]
fields = [{ name = "ID", type = "int" }]

[models.Mango]
fields = [{ name = "ID", type = "int" }]
"#
        .parse()
        .unwrap();
        let names: Vec<&String> = manifest.models.keys().collect();
        assert_eq!(names, ["Zebra", "Apple", "Mango"]);

        let schemas = manifest.schemas().unwrap();
        assert_eq!(schemas[2].name, "Mango");
        assert!(manifest.has_model("Apple"));
        assert!(!manifest.has_model("apple"));
    }

    #[test]
    fn test_non_table_model_parses_but_does_not_extract() {
        let manifest: Manifest = "[models]\nUser = 3\n".parse().unwrap();
        let err = manifest.schemas().unwrap_err();
        assert!(matches!(*err, Error::InvalidModelKind { .. }));
    }

    #[test]
    fn test_reserved_model_name() {
        let err = "[models.Self]\nfields = []".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_case_colliding_models() {
        let src = r#"
[models.User]
fields = [{ name = "ID", type = "int" }]

[models.USER]
fields = [{ name = "ID", type = "int" }]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "models 'User' and 'USER' both generate `handlers/user.rs`");
                assert_eq!(span.map(|s| s.offset()), src.find("USER"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_path_keyword_model_name() {
        let err = "[models.Super]\nfields = []".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert!(err.to_string().contains("`super`"));
    }

    #[test]
    fn test_invalid_model_name() {
        let err = "[models.user-profile]\nfields = []"
            .parse::<Manifest>()
            .unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, context, span, .. } => {
                assert_eq!(name, "user-profile");
                assert_eq!(context, "model");
                assert_eq!(span.map(|s| s.offset()), Some(8));
            }
            other => panic!("expected InvalidIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_plurals() {
        let manifest: Manifest = "[plurals]\nPerson = \"People\"\nChild = \"Children\"\n"
            .parse()
            .unwrap();
        assert_eq!(manifest.plurals.get("Person").map(String::as_str), Some("People"));
        assert_eq!(manifest.plurals.len(), 2);

        let err = "[plurals]\nPerson = \"the people\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_empty_output() {
        let err = "[project]\noutput = \"\"".parse::<Manifest>().unwrap_err();
        assert_eq!(err.to_string(), "`output` cannot be empty");
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Manifest::from_str_with_filename("[models.User\n", "api.toml").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/nonexistent/crudgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
