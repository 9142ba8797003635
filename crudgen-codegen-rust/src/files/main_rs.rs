use std::path::{Path, PathBuf};

use crudgen_codegen::ModelData;
use crudgen_core::{FileRules, GeneratedFile};

use crate::{Fn, MethodChain, Param, RustFile};

/// Address the generated service listens on.
const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// `main.rs`: the router and the service entry point.
///
/// Holds one route group per model it is given; the `PgPool` reaches the
/// handlers through `with_state`.
pub struct MainRs<'a> {
    models: &'a [ModelData],
}

impl<'a> MainRs<'a> {
    pub fn new(models: &'a [ModelData]) -> Self {
        Self { models }
    }

    fn main_fn() -> Fn {
        Fn::new("main")
            .private()
            .attr("tokio::main")
            .async_()
            .returns("Result<(), Box<dyn std::error::Error>>")
            .body_line("let database_url = std::env::var(\"DATABASE_URL\")?;")
            .body_line("let pool = PgPool::connect(&database_url).await?;")
            .body_blank()
            .body_line(format!(
                "let listener = TcpListener::bind(\"{}\").await?;",
                LISTEN_ADDR
            ))
            .body_line("axum::serve(listener, router(pool)).await?;")
            .body_blank()
            .body_line("Ok(())")
    }

    fn router_fn(&self) -> Fn {
        let chain = self
            .models
            .iter()
            .fold(MethodChain::new("Router::new()"), |chain, model| {
                chain.method_args(
                    "nest",
                    [
                        format!("\"/{}\"", model.path_plural),
                        format!("{}()", routes_fn_name(model)),
                    ],
                )
            })
            .method_arg("with_state", "pool");

        Fn::new("router")
            .private()
            .param(Param::new("pool", "PgPool"))
            .returns("Router")
            .body(chain)
    }

    fn routes_fn(model: &ModelData) -> Fn {
        let handler = |op: &str| format!("handlers::{}::{}", model.var_ident, op);
        let collection = MethodChain::new(format!(
            "get({})",
            handler(&format!("list_{}", model.var_name_plural))
        ))
        .method_arg("post", handler(&format!("create_{}", model.var_name)));
        let member = MethodChain::new(format!(
            "get({})",
            handler(&format!("get_{}", model.var_name))
        ))
        .method_arg("put", handler(&format!("update_{}", model.var_name)))
        .method_arg("delete", handler(&format!("delete_{}", model.var_name)));

        let chain = MethodChain::new("Router::new()")
            .method_args("route", ["\"/\"".to_string(), collection.build_inline()])
            .method_args("route", ["\"/{id}\"".to_string(), member.build_inline()]);

        Fn::new(routes_fn_name(model))
            .private()
            .doc(format!("Routes for `{}`, nested at `/{}`.", model.name, model.path_plural))
            .returns("Router<PgPool>")
            .body(chain)
    }
}

fn routes_fn_name(model: &ModelData) -> String {
    format!("{}_routes", model.var_name)
}

impl GeneratedFile for MainRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("main.rs")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        RustFile::new()
            .module("handlers")
            .module("models")
            .import("axum::Router")
            .import("axum::routing::get")
            .import("sqlx::PgPool")
            .import("tokio::net::TcpListener")
            .add(Self::main_fn())
            .add(self.router_fn())
            .add_all(self.models.iter().map(Self::routes_fn))
            .render()
    }
}
