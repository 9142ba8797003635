//! Flattens code fragments into indented source text.

use super::{CodeFragment, Indent, Renderable};

/// Writes [`CodeFragment`]s into a string buffer, tracking indentation.
///
/// # Example
///
/// ```
/// use crudgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::rust();
/// builder.emit(&vec![CodeFragment::block(
///     "fn main() {",
///     vec![CodeFragment::line("println!(\"Hello, world!\");")],
///     Some("}".to_string()),
/// )]);
///
/// assert_eq!(builder.build(), "fn main() {\n    println!(\"Hello, world!\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder using four-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Append an empty line. Blank lines are never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Append a single fragment, recursing into nested ones.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => self.write_line(&text),
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.write_line(&header);
                self.nested(body);
                if let Some(close) = close {
                    self.write_line(&close);
                }
            }
            CodeFragment::Indent(body) => self.nested(body),
            CodeFragment::Doc(text) => self.write_comment("///", &text),
            CodeFragment::Comment(text) => self.write_comment("//", &text),
        }
    }

    /// Consume the builder and return the source text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn nested(&mut self, body: Vec<CodeFragment>) {
        self.depth += 1;
        for fragment in body {
            self.apply_fragment(fragment);
        }
        self.depth -= 1;
    }

    fn write_line(&mut self, text: &str) {
        self.write_indent();
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn write_comment(&mut self, marker: &str, text: &str) {
        if text.is_empty() {
            self.write_line(marker);
        } else {
            self.write_line(&format!("{} {}", marker, text));
        }
    }

    fn write_indent(&mut self) {
        let unit = self.indent.as_str();
        for _ in 0..self.depth {
            self.buffer.push_str(unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}
