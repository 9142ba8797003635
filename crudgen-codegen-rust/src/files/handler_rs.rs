use std::path::{Path, PathBuf};

use crudgen_codegen::{Binding, ModelData, TypeMapper};
use crudgen_core::{FileRules, GeneratedFile};

use crate::{Arm, Fn, Match, MethodChain, Param, RustFile, RustTypeMapper};

const INTERNAL_ERROR: &str = "error_response(StatusCode::INTERNAL_SERVER_ERROR, err)";

/// `handlers/<var_name>.rs`: the five CRUD handlers of one model.
pub struct HandlerRs<'a> {
    model: &'a ModelData,
    types: RustTypeMapper,
}

impl<'a> HandlerRs<'a> {
    pub fn new(model: &'a ModelData) -> Self {
        Self {
            model,
            types: RustTypeMapper,
        }
    }

    fn id_type(&self) -> &'static str {
        self.types.map_field_type(self.model.identifier.ty)
    }

    fn state_param() -> Param {
        Param::new("State(pool)", "State<PgPool>")
    }

    fn path_param(&self) -> Param {
        Param::new("Path(id)", format!("Path<{}>", self.id_type()))
    }

    fn payload_param(&self) -> Param {
        Param::new(
            "payload",
            format!("Result<Json<{}>, JsonRejection>", self.model.name),
        )
    }

    fn bind_arg(&self, binding: &Binding) -> String {
        match binding {
            Binding::Field(field) => format!("&{}.{}", self.model.var_ident, field),
            Binding::Identifier => "&id".to_string(),
        }
    }

    fn extract_payload(&self, binding: &str) -> Match {
        Match::new("payload")
            .assign(format!("let Json({}) =", binding))
            .arm(Arm::new("Ok(payload)", "payload"))
            .arm(Arm::new(
                "Err(rejection)",
                "return error_response(StatusCode::BAD_REQUEST, rejection.body_text())",
            ))
    }

    fn error_response() -> Fn {
        Fn::new("error_response")
            .private()
            .param(Param::new("status", "StatusCode"))
            .param(Param::new("message", "impl std::fmt::Display"))
            .returns("Response")
            .body_line("(status, Json(json!({ \"error\": message.to_string() }))).into_response()")
    }

    fn get_fn(&self) -> Fn {
        let m = self.model;
        let query = MethodChain::new(format!(
            "sqlx::query_as::<_, {}>(\"SELECT * FROM {} WHERE {} = $1\")",
            m.name, m.table_name, m.identifier.column
        ))
        .assign("let result =")
        .method_arg("bind", "id")
        .method_arg("fetch_one", "&pool")
        .await_()
        .statement();

        Fn::new(format!("get_{}", m.var_name))
            .doc(format!("GET /{}/{{id}}", m.path_plural))
            .async_()
            .param(Self::state_param())
            .param(self.path_param())
            .returns("Response")
            .body(query)
            .body_blank()
            .body(
                Match::new("result")
                    .arm(Arm::new(
                        format!("Ok({})", m.var_ident),
                        format!("(StatusCode::OK, Json({})).into_response()", m.var_ident),
                    ))
                    .arm(Arm::new(
                        "Err(sqlx::Error::RowNotFound)",
                        format!(
                            "error_response(StatusCode::NOT_FOUND, \"{} not found\")",
                            m.name
                        ),
                    ))
                    .arm(Arm::new("Err(err)", INTERNAL_ERROR)),
            )
    }

    fn list_fn(&self) -> Fn {
        let m = self.model;
        let query = MethodChain::new(format!(
            "sqlx::query_as::<_, {}>(\"SELECT * FROM {}\")",
            m.name, m.table_name
        ))
        .assign("let result =")
        .method_arg("fetch_all", "&pool")
        .await_()
        .statement();

        Fn::new(format!("list_{}", m.var_name_plural))
            .doc(format!("GET /{}", m.path_plural))
            .async_()
            .param(Self::state_param())
            .returns("Response")
            .body(query)
            .body_blank()
            .body(
                Match::new("result")
                    .arm(Arm::new(
                        format!("Ok({})", m.var_ident_plural),
                        format!(
                            "(StatusCode::OK, Json({})).into_response()",
                            m.var_ident_plural
                        ),
                    ))
                    .arm(Arm::new("Err(err)", INTERNAL_ERROR)),
            )
    }

    fn create_fn(&self) -> Fn {
        let m = self.model;
        let query = MethodChain::new(format!(
            "sqlx::query_as::<_, {}>(\"INSERT INTO {} ({}) VALUES ({}) RETURNING *\")",
            m.name,
            m.table_name,
            m.columns_list(),
            m.placeholders_list()
        ))
        .assign("let result =")
        .method_each("bind", m.placeholder_values.iter().map(|b| self.bind_arg(b)))
        .method_arg("fetch_one", "&pool")
        .await_()
        .statement();

        Fn::new(format!("create_{}", m.var_name))
            .doc(format!("POST /{}", m.path_plural))
            .async_()
            .param(Self::state_param())
            .param(self.payload_param())
            .returns("Response")
            .body(self.extract_payload(&m.var_ident))
            .body_blank()
            .body(query)
            .body_blank()
            .body(
                Match::new("result")
                    .arm(Arm::new(
                        format!("Ok({})", m.var_ident),
                        format!(
                            "(StatusCode::CREATED, Json({})).into_response()",
                            m.var_ident
                        ),
                    ))
                    .arm(Arm::new("Err(err)", INTERNAL_ERROR)),
            )
    }

    fn update_fn(&self) -> Fn {
        let m = self.model;
        let id_value = if self.types.is_copy(m.identifier.ty) {
            "id"
        } else {
            "id.clone()"
        };
        let query = MethodChain::new(format!(
            "sqlx::query(\"UPDATE {} SET {} WHERE {} = {}\")",
            m.table_name,
            m.update_set_list(),
            m.identifier.column,
            m.update_where_placeholder()
        ))
        .assign("let result =")
        .method_each("bind", m.update_values.iter().map(|b| self.bind_arg(b)))
        .method_arg("execute", "&pool")
        .await_()
        .statement();

        Fn::new(format!("update_{}", m.var_name))
            .doc(format!("PUT /{}/{{id}}", m.path_plural))
            .async_()
            .param(Self::state_param())
            .param(self.path_param())
            .param(self.payload_param())
            .returns("Response")
            .body(self.extract_payload(&format!("mut {}", m.var_ident)))
            .body_line(format!("{}.{} = {};", m.var_ident, m.identifier.field, id_value))
            .body_blank()
            .body(query)
            .body_blank()
            .body(
                Match::new("result")
                    .arm(Arm::new(
                        "Ok(_)",
                        format!("(StatusCode::OK, Json({})).into_response()", m.var_ident),
                    ))
                    .arm(Arm::new("Err(err)", INTERNAL_ERROR)),
            )
    }

    fn delete_fn(&self) -> Fn {
        let m = self.model;
        let query = MethodChain::new(format!(
            "sqlx::query(\"DELETE FROM {} WHERE {} = $1\")",
            m.table_name, m.identifier.column
        ))
        .assign("let result =")
        .method_arg("bind", "id")
        .method_arg("execute", "&pool")
        .await_()
        .statement();

        Fn::new(format!("delete_{}", m.var_name))
            .doc(format!("DELETE /{}/{{id}}", m.path_plural))
            .async_()
            .param(Self::state_param())
            .param(self.path_param())
            .returns("Response")
            .body(query)
            .body_blank()
            .body(
                Match::new("result")
                    .arm(Arm::new(
                        "Ok(_)",
                        format!(
                            "(StatusCode::OK, Json(json!({{ \"message\": \"{} deleted successfully\" }}))).into_response()",
                            m.name
                        ),
                    ))
                    .arm(Arm::new("Err(err)", INTERNAL_ERROR)),
            )
    }
}

impl GeneratedFile for HandlerRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("handlers")
            .join(format!("{}.rs", self.model.var_name))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        RustFile::new()
            .import("axum::Json")
            .import("axum::extract::rejection::JsonRejection")
            .imports("axum::extract", &["Path", "State"])
            .import("axum::http::StatusCode")
            .imports("axum::response", &["IntoResponse", "Response"])
            .import("serde_json::json")
            .import("sqlx::PgPool")
            .import(&format!("crate::models::{}", self.model.name))
            .add(Self::error_response())
            .add(self.get_fn())
            .add(self.list_fn())
            .add(self.create_fn())
            .add(self.update_fn())
            .add(self.delete_fn())
            .render()
    }
}
