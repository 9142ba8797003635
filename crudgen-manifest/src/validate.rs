//! Validation utilities for names declared in crudgen.toml

use std::collections::HashMap;

use miette::SourceSpan;

use crate::{Error, Result};

/// Source and filename carried through manifest validation, so errors can
/// point back into the file.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "crudgen.toml");
/// ctx.validate_name("User", "model")?;
/// ```
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src, name)
    }

    /// Create a validation error pointing at `name`, if it can be found.
    pub fn validation_error(&self, message: impl Into<String>, name: &str) -> Box<Error> {
        Error::validation(message, self.src, self.filename, self.find_span(name))
    }

    /// Validate that a name can be used as a Rust identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_rust_keyword(name) {
            return Err(Error::reserved_keyword(
                name,
                kind,
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(Error::invalid_identifier(
                name,
                kind,
                reason,
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate model names as a set.
    ///
    /// Each model becomes a handler module named after its lowercased name,
    /// so that name must be usable and unique.
    pub fn validate_model_names<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
    ) -> Result<()> {
        let mut modules: HashMap<String, &str> = HashMap::new();
        for name in names {
            self.validate_name(name, "model")?;

            let module = name.to_lowercase();
            if PATH_KEYWORDS.contains(&module.as_str()) {
                return Err(self.validation_error(
                    format!(
                        "model '{}' would generate the module `{}`, which is a path keyword",
                        name, module
                    ),
                    name,
                ));
            }
            if let Some(first) = modules.get(&module) {
                return Err(self.validation_error(
                    format!(
                        "models '{}' and '{}' both generate `handlers/{}.rs`",
                        first, name, module
                    ),
                    name,
                ));
            }
            modules.insert(module, name);
        }
        Ok(())
    }
}

/// Keywords that stay invalid even as raw identifiers.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super"];

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub(crate) const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords (2021 edition)
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords (may be used in future)
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

pub(crate) fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
///
/// Looks for `[models.Name]`, `[models.Name.x]` and `Name = ...` forms
/// before falling back to the first occurrence anywhere.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let dotted = [format!(".{}]", name), format!(".{}.", name)];
    for pattern in &dotted {
        if let Some(pos) = src.find(pattern.as_str()) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    let keyed = [format!("\n{} ", name), format!("\n{}=", name)];
    for pattern in &keyed {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    src.find(name).map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a valid Rust identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if name == "_" {
        return Some("name cannot be a lone underscore");
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
