//! Rust function and match builders.

use crudgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Signatures longer than this put one parameter per line.
const MAX_SIGNATURE_WIDTH: usize = 100;

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn format(&self) -> String {
        format!("{}: {}", self.name, self.ty)
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a blank line to the function body.
    pub fn body_blank(mut self) -> Self {
        self.body.push(CodeFragment::Blank);
        self
    }

    /// Add a rendered node to the function body.
    pub fn body(mut self, node: impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    fn header(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        format!("{}{}fn {}", vis, async_kw, self.name)
    }

    fn ret(&self) -> String {
        match &self.return_type {
            Some(ret) => format!(" -> {}", ret),
            None => String::new(),
        }
    }

    fn signature_fragments(&self) -> Vec<CodeFragment> {
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");
        let inline = format!("{}({}){} {{", self.header(), params, self.ret());

        if inline.len() <= MAX_SIGNATURE_WIDTH {
            return vec![CodeFragment::Line(inline)];
        }

        vec![
            CodeFragment::Line(format!("{}(", self.header())),
            CodeFragment::indent(
                self.params
                    .iter()
                    .map(|p| CodeFragment::Line(format!("{},", p.format())))
                    .collect(),
            ),
            CodeFragment::Line(format!("){} {{", self.ret())),
        ]
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        fragments.extend(self.signature_fragments());
        fragments.push(CodeFragment::indent(self.body.clone()));
        fragments.push(CodeFragment::line("}"));
        fragments
    }
}

/// One arm of a [`Match`].
#[derive(Debug, Clone)]
pub struct Arm {
    pattern: String,
    expr: String,
}

impl Arm {
    pub fn new(pattern: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            expr: expr.into(),
        }
    }
}

/// Builder for a `match` expression whose arms are single expressions.
#[derive(Debug, Clone)]
pub struct Match {
    prefix: Option<String>,
    scrutinee: String,
    arms: Vec<Arm>,
    terminator: &'static str,
}

impl Match {
    pub fn new(scrutinee: impl Into<String>) -> Self {
        Self {
            prefix: None,
            scrutinee: scrutinee.into(),
            arms: Vec::new(),
            terminator: "",
        }
    }

    /// Bind the match's value, e.g. `let Json(user) =`. Ends it with `;`.
    pub fn assign(mut self, binding: impl Into<String>) -> Self {
        self.prefix = Some(binding.into());
        self.terminator = ";";
        self
    }

    pub fn arm(mut self, arm: Arm) -> Self {
        self.arms.push(arm);
        self
    }
}

impl Renderable for Match {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = match &self.prefix {
            Some(prefix) => format!("{} match {} {{", prefix, self.scrutinee),
            None => format!("match {} {{", self.scrutinee),
        };
        let arms = self
            .arms
            .iter()
            .map(|arm| CodeFragment::Line(format!("{} => {},", arm.pattern, arm.expr)))
            .collect();

        vec![CodeFragment::block(
            header,
            arms,
            Some(format!("}}{}", self.terminator)),
        )]
    }
}
