//! RustFile abstraction for structured Rust file generation.
//!
//! Provides a high-level API for generating Rust files with module
//! declarations, organized imports and body content.

use crudgen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable, generation::ImportCollector};

use crate::render::import_fragments;

/// A structured representation of a Rust file.
///
/// Sections render in order (`mod` declarations, `use` statements, body
/// items) with a blank line between sections and between body items.
///
/// # Example
///
/// ```
/// use crudgen_codegen_rust::{RawCode, RustFile};
///
/// let code = RustFile::new()
///     .module("handlers")
///     .import("sqlx::PgPool")
///     .add(RawCode::new("fn main() {}"))
///     .render();
///
/// assert_eq!(code, "mod handlers;\n\nuse sqlx::PgPool;\n\nfn main() {}\n");
/// ```
#[derive(Debug, Default)]
pub struct RustFile {
    mods: Vec<String>,
    imports: ImportCollector,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    /// Create a new empty RustFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a private child module.
    pub fn module(mut self, name: impl Into<String>) -> Self {
        self.mods.push(format!("mod {};", name.into()));
        self
    }

    /// Declare a public child module.
    pub fn pub_module(mut self, name: impl Into<String>) -> Self {
        self.mods.push(format!("pub mod {};", name.into()));
        self
    }

    /// Import a full path such as `axum::routing::get`.
    pub fn import(mut self, path: &str) -> Self {
        self.imports.add_path(path);
        self
    }

    /// Import several symbols from one module.
    pub fn imports(mut self, module: &str, symbols: &[&str]) -> Self {
        for symbol in symbols {
            self.imports.add(module, symbol);
        }
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::RUST)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();

        if !self.mods.is_empty() {
            sections.push(self.mods.iter().cloned().map(CodeFragment::Line).collect());
        }
        if !self.imports.is_empty() {
            sections.push(import_fragments(&self.imports));
        }
        sections.extend(self.body.iter().cloned());

        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in section {
                builder.apply_fragment(fragment);
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.mods.is_empty() && self.imports.is_empty() && self.body.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Each line of the input becomes one line of output.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a raw code fragment from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = RustFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_imports_only() {
        let code = RustFile::new()
            .imports("axum::extract", &["State", "Path"])
            .render();
        assert_eq!(code, "use axum::extract::{Path, State};\n");
    }

    #[test]
    fn test_pub_modules() {
        let code = RustFile::new().pub_module("user").pub_module("post").render();
        assert_eq!(code, "pub mod user;\npub mod post;\n");
    }

    #[test]
    fn test_blank_lines_between_body() {
        let code = RustFile::new()
            .add(RawCode::new("struct Foo;"))
            .add(RawCode::lines(["struct Bar;", "struct Baz;"]))
            .render();
        assert_eq!(code, "struct Foo;\n\nstruct Bar;\nstruct Baz;\n");
    }
}
