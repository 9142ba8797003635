//! Rust-specific naming conventions.

use crudgen_codegen::{ModelData, NamingConvention, TemplateError};
use crudgen_core::to_snake_case;

fn escape_rust_reserved(name: &str) -> String {
    format!("r#{}", name)
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    field_to_name: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe",
        "use", "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro",
        "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    // Path keywords are rejected as raw identifiers.
    forbidden_words: &["crate", "self", "Self", "super", "_"],
    escape_reserved: escape_rust_reserved,
};

/// Types the generated files import or take from the prelude. A model with
/// one of these names would shadow it.
const GENERATED_TYPES: &[&str] = &[
    "Deserialize",
    "IntoResponse",
    "Json",
    "JsonRejection",
    "Path",
    "PgPool",
    "Response",
    "Result",
    "Serialize",
    "State",
    "StatusCode",
    "String",
];

/// Names bound inside every handler besides the record itself.
const HANDLER_LOCALS: &[&str] = &["error_response", "id", "pool"];

/// Reject models whose names would collide with names the generated
/// handlers and models already use.
pub(crate) fn check_generated_names(model: &ModelData) -> Result<(), TemplateError> {
    if GENERATED_TYPES.contains(&model.name.as_str()) {
        return Err(TemplateError::ReservedName {
            slot: "name",
            value: model.name.clone(),
        });
    }
    if HANDLER_LOCALS.contains(&model.var_name.as_str()) {
        return Err(TemplateError::ReservedName {
            slot: "var_name",
            value: model.var_name.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_naming_field() {
        assert_eq!(RUST_NAMING.field_name("CreatedAt"), "created_at");
        assert_eq!(RUST_NAMING.field_name("AuthorId"), "author_id");
        assert_eq!(RUST_NAMING.field_name("ID"), "id");
    }

    #[test]
    fn test_rust_escape_reserved() {
        assert_eq!(RUST_NAMING.field_name("Type"), "r#type");
        assert_eq!(RUST_NAMING.raw_field_name("Type"), "type");
        assert_eq!(RUST_NAMING.safe_name("post"), "post");
    }

    #[test]
    fn test_path_keywords_are_forbidden() {
        for word in ["crate", "self", "super", "Self"] {
            assert!(RUST_NAMING.is_forbidden(word));
            assert!(!RUST_NAMING.is_reserved(word));
        }
        assert!(RUST_NAMING.is_forbidden(&RUST_NAMING.raw_field_name("Super")));
    }
}
