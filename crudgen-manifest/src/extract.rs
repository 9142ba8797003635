//! Schema extraction from loosely typed model descriptions.

use std::collections::HashSet;

use crudgen_core::to_snake_case;
use crudgen_ir::{Field, FieldType, Schema};
use toml::Value;
use tracing::debug;

use crate::{Error, Result};

const MODEL_KEYS: &[&str] = &["table", "fields"];
const FIELD_KEYS: &[&str] = &["name", "type", "tag"];

/// A model name and its undecoded description.
///
/// The body is whatever the manifest holds under `[models.<name>]`; only a
/// table is a valid model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescription {
    pub name: String,
    pub body: Value,
}

impl ModelDescription {
    pub fn new(name: impl Into<String>, body: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Extract a schema for every model, preserving order.
///
/// The first invalid description aborts the batch; no partial list is
/// returned.
pub fn extract_schemas(models: &[ModelDescription]) -> Result<Vec<Schema>> {
    models.iter().map(extract_schema).collect()
}

/// Extract the schema of a single model.
pub fn extract_schema(model: &ModelDescription) -> Result<Schema> {
    let name = model.name.as_str();
    let table = match &model.body {
        Value::Table(table) => table,
        other => return Err(Error::invalid_model_kind(name, other.type_str())),
    };

    if let Some(key) = table.keys().find(|k| !MODEL_KEYS.contains(&k.as_str())) {
        return Err(Error::invalid_model(name, format!("unknown key '{}'", key)));
    }

    let mut schema = Schema::new(name);

    if let Some(value) = table.get("table") {
        let table_name = value
            .as_str()
            .ok_or_else(|| Error::invalid_model(name, "`table` must be a string"))?;
        schema = schema.with_table(table_name);
    }

    let entries = table
        .get("fields")
        .ok_or_else(|| Error::invalid_model(name, "missing `fields` array"))?
        .as_array()
        .ok_or_else(|| Error::invalid_model(name, "`fields` must be an array"))?;

    let mut columns = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let field = extract_field(name, index, entry)?;
        if !columns.insert(to_snake_case(&field.name)) {
            return Err(Error::invalid_model(
                name,
                format!("duplicate field '{}'", field.name),
            ));
        }
        schema = schema.with_field(field);
    }

    debug!(model = %schema.name, fields = schema.fields.len(), "extracted schema");
    Ok(schema)
}

fn extract_field(model: &str, index: usize, entry: &Value) -> Result<Field> {
    let Value::Table(entry) = entry else {
        return Err(Error::invalid_model(
            model,
            format!("field #{} must be a table, found {}", index + 1, entry.type_str()),
        ));
    };

    if let Some(key) = entry.keys().find(|k| !FIELD_KEYS.contains(&k.as_str())) {
        return Err(Error::invalid_model(
            model,
            format!("field #{} has unknown key '{}'", index + 1, key),
        ));
    }

    let name = string_key(model, index, entry, "name")?
        .ok_or_else(|| Error::invalid_model(model, format!("field #{} has no `name`", index + 1)))?;
    let type_name = string_key(model, index, entry, "type")?
        .ok_or_else(|| Error::invalid_model(model, format!("field '{}' has no `type`", name)))?;
    let ty: FieldType = type_name.parse().map_err(|e| {
        Error::invalid_model(model, format!("field '{}' has {}", name, e))
    })?;
    let tag = string_key(model, index, entry, "tag")?;

    Ok(Field::tagged(name, ty, tag))
}

fn string_key<'a>(
    model: &str,
    index: usize,
    entry: &'a toml::Table,
    key: &str,
) -> Result<Option<&'a str>> {
    match entry.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(Error::invalid_model(
            model,
            format!(
                "`{}` of field #{} must be a string, found {}",
                key,
                index + 1,
                other.type_str()
            ),
        )),
    }
}
