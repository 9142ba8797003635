//! Rust-specific rendering of collected imports.

use crudgen_codegen::{CodeFragment, generation::ImportCollector};

/// Format one module's imports as a `use` statement.
fn use_statement<'a>(module: &str, symbols: impl ExactSizeIterator<Item = &'a String>) -> String {
    let symbols: Vec<&str> = symbols.map(String::as_str).collect();
    match symbols.as_slice() {
        [] => format!("use {};", module),
        [symbol] => format!("use {}::{};", module, symbol),
        _ => format!("use {}::{{{}}};", module, symbols.join(", ")),
    }
}

/// Render imports as Rust `use` statements, one per module.
///
/// # Example
///
/// ```
/// use crudgen_codegen::generation::ImportCollector;
/// use crudgen_codegen_rust::render_imports;
///
/// let mut imports = ImportCollector::new();
/// imports.add("axum::extract", "State");
/// imports.add("axum::extract", "Path");
/// imports.add("sqlx", "PgPool");
///
/// let rendered = render_imports(&imports);
/// assert_eq!(rendered, "use axum::extract::{Path, State};\nuse sqlx::PgPool;");
/// ```
pub fn render_imports(imports: &ImportCollector) -> String {
    imports
        .iter()
        .map(|(module, symbols)| use_statement(module, symbols.iter()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Imports as code fragments, for emission through a `CodeBuilder`.
pub(crate) fn import_fragments(imports: &ImportCollector) -> Vec<CodeFragment> {
    imports
        .iter()
        .map(|(module, symbols)| CodeFragment::Line(use_statement(module, symbols.iter())))
        .collect()
}
