//! Builder for Rust method chains (fluent API patterns).

use crudgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A method call in a chain.
#[derive(Debug, Clone)]
struct MethodCall {
    name: String,
    args: Vec<String>,
}

impl MethodCall {
    fn format(&self) -> String {
        format!(".{}({})", self.name, self.args.join(", "))
    }
}

/// Builder for fluent method chains like `sqlx::query(..).bind(x).execute(&pool).await`.
///
/// Rendered as fragments, the base expression stays on its own line and each
/// call goes on an indented continuation line.
#[derive(Debug, Clone)]
pub struct MethodChain {
    prefix: Option<String>,
    base: String,
    calls: Vec<MethodCall>,
    is_await: bool,
    is_try: bool,
    terminator: Option<String>,
}

impl MethodChain {
    /// Create a new method chain starting from a base expression.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            prefix: None,
            base: base.into(),
            calls: Vec::new(),
            is_await: false,
            is_try: false,
            terminator: None,
        }
    }

    /// Bind the chain's value, e.g. `let result =`.
    pub fn assign(mut self, binding: impl Into<String>) -> Self {
        self.prefix = Some(binding.into());
        self
    }

    /// Add a method call with no arguments.
    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.calls.push(MethodCall {
            name: name.into(),
            args: Vec::new(),
        });
        self
    }

    /// Add a method call with a single argument.
    pub fn method_arg(mut self, name: impl Into<String>, arg: impl Into<String>) -> Self {
        self.calls.push(MethodCall {
            name: name.into(),
            args: vec![arg.into()],
        });
        self
    }

    /// Add a method call with multiple arguments.
    pub fn method_args(
        mut self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.calls.push(MethodCall {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Add one call per argument, e.g. a `.bind(..)` per value.
    pub fn method_each(
        self,
        name: &str,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        args.into_iter()
            .fold(self, |chain, arg| chain.method_arg(name, arg))
    }

    /// Add `.await` to the chain.
    pub fn await_(mut self) -> Self {
        self.is_await = true;
        self
    }

    /// Add `?` to the chain.
    pub fn try_(mut self) -> Self {
        self.is_try = true;
        self
    }

    /// End the chain as a statement.
    pub fn statement(mut self) -> Self {
        self.terminator = Some(";".to_string());
        self
    }

    /// End the chain with `,`, as inside an argument list.
    pub fn argument(mut self) -> Self {
        self.terminator = Some(",".to_string());
        self
    }

    fn head(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{} {}", prefix, self.base),
            None => self.base.clone(),
        }
    }

    fn tail(&self) -> String {
        let mut tail = String::new();
        if self.is_await {
            tail.push_str(".await");
        }
        if self.is_try {
            tail.push('?');
        }
        if let Some(terminator) = &self.terminator {
            tail.push_str(terminator);
        }
        tail
    }

    /// Build the method chain as a single-line string.
    pub fn build_inline(&self) -> String {
        let mut result = self.head();
        for call in &self.calls {
            result.push_str(&call.format());
        }
        result.push_str(&self.tail());
        result
    }

    /// Build the method chain with each call on a new line.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for MethodChain {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.calls.is_empty() {
            return vec![CodeFragment::line(self.build_inline())];
        }

        let mut lines: Vec<String> = self.calls.iter().map(MethodCall::format).collect();
        if self.is_await {
            lines.push(".await".to_string());
        }
        if let Some(last) = lines.last_mut() {
            if self.is_try {
                last.push('?');
            }
            if let Some(terminator) = &self.terminator {
                last.push_str(terminator);
            }
        }
        let calls = lines.into_iter().map(CodeFragment::Line).collect();

        vec![CodeFragment::line(self.head()), CodeFragment::indent(calls)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_chain() {
        let chain = MethodChain::new("Router::new()")
            .method_arg("with_state", "pool")
            .build_inline();
        assert_eq!(chain, "Router::new().with_state(pool)");
    }

    #[test]
    fn test_chain_with_await_try() {
        let chain = MethodChain::new("TcpListener::bind(\"0.0.0.0:8080\")")
            .await_()
            .try_()
            .assign("let listener =")
            .statement()
            .build();
        assert_eq!(
            chain,
            "let listener = TcpListener::bind(\"0.0.0.0:8080\").await?;\n"
        );
    }

    #[test]
    fn test_multiline_chain() {
        let chain = MethodChain::new("sqlx::query(\"DELETE FROM users WHERE id = $1\")")
            .assign("let result =")
            .method_arg("bind", "id")
            .method_arg("execute", "&pool")
            .await_()
            .statement()
            .build();
        assert_eq!(
            chain,
            "let result = sqlx::query(\"DELETE FROM users WHERE id = $1\")\n    .bind(id)\n    .execute(&pool)\n    .await;\n"
        );
    }

    #[test]
    fn test_method_each() {
        let chain = MethodChain::new("q")
            .method_each("bind", ["&a.x", "&a.y"])
            .method("build")
            .build_inline();
        assert_eq!(chain, "q.bind(&a.x).bind(&a.y).build()");
    }
}
