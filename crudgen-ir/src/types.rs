//! Semantic field types.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Semantic type of a model field.
///
/// This is the set of flat scalar types the generator knows how to store and
/// serialize. Each target language maps it to a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Int,
    UInt,
    Float,
    Bool,
    Timestamp,
    Uuid,
    Json,
}

impl FieldType {
    /// All supported types, in display order.
    pub const ALL: [FieldType; 8] = [
        FieldType::String,
        FieldType::Int,
        FieldType::UInt,
        FieldType::Float,
        FieldType::Bool,
        FieldType::Timestamp,
        FieldType::Uuid,
        FieldType::Json,
    ];

    /// Canonical lowercase name, as written in a manifest.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::UInt => "uint",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Timestamp => "timestamp",
            FieldType::Uuid => "uuid",
            FieldType::Json => "json",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field type '{0}'")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s.trim().to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => FieldType::String,
            "int" | "integer" | "i32" | "i64" | "bigint" => FieldType::Int,
            "uint" | "unsigned" | "u32" | "u64" | "uint64" => FieldType::UInt,
            "float" | "double" | "f32" | "f64" | "float64" => FieldType::Float,
            "bool" | "boolean" => FieldType::Bool,
            "timestamp" | "datetime" | "time.time" | "timestamptz" => FieldType::Timestamp,
            "uuid" => FieldType::Uuid,
            "json" | "jsonb" => FieldType::Json,
            _ => return Err(UnknownFieldType(s.to_string())),
        };
        Ok(ty)
    }
}
