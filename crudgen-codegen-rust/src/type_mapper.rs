//! Rust type mapper implementation.

use crudgen_codegen::TypeMapper;
use crudgen_ir::FieldType;

/// Maps field types to the Rust types stored through sqlx on Postgres.
///
/// Postgres has no unsigned integers and sqlx cannot encode `u64`, so
/// [`FieldType::UInt`] is stored as `i64` (`BIGINT`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl RustTypeMapper {
    /// Whether values of `ty` are `Copy` in the generated code.
    pub fn is_copy(&self, ty: FieldType) -> bool {
        !matches!(ty, FieldType::String | FieldType::Json)
    }
}

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn map_field_type(&self, ty: FieldType) -> &'static str {
        match ty {
            FieldType::String => "String",
            FieldType::Int | FieldType::UInt => "i64",
            FieldType::Float => "f64",
            FieldType::Bool => "bool",
            FieldType::Timestamp => "chrono::DateTime<chrono::Utc>",
            FieldType::Uuid => "uuid::Uuid",
            FieldType::Json => "serde_json::Value",
        }
    }
}
