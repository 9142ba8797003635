//! Per-model template context.

use crudgen_core::is_identifier;
use crudgen_ir::{FieldType, Schema};

use crate::{NamingConvention, NamingPolicy, TemplateError};

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// A field of the record in the request body, by target field name.
    Field(String),
    /// The identifier taken from the request path.
    Identifier,
}

/// The identifier field of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierData {
    /// Target-language field name.
    pub field: String,
    /// Storage column.
    pub column: String,
    pub ty: FieldType,
}

/// One field as seen by the templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldData {
    /// Name as declared on the model.
    pub name: String,
    /// Target-language field name, escaped if reserved.
    pub ident: String,
    /// Storage column.
    pub column: String,
    pub ty: FieldType,
    /// Serialization key.
    pub tag: String,
}

impl FieldData {
    /// Whether the serialization key differs from the field name.
    pub fn needs_rename(&self) -> bool {
        self.tag != self.column
    }
}

/// Everything a template needs to render one model.
///
/// Composition validates every slot, so renderers can splice these strings
/// into source text as-is. `columns`, `placeholders` and `placeholder_values`
/// are index-aligned with `fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelData {
    pub name: String,
    pub var_name: String,
    pub var_name_plural: String,
    /// `var_name`, escaped for use as a local or module name.
    pub var_ident: String,
    /// `var_name_plural`, escaped for use as a local name.
    pub var_ident_plural: String,
    pub path_plural: String,
    pub table_name: String,
    pub fields: Vec<FieldData>,
    pub columns: Vec<String>,
    pub placeholders: Vec<String>,
    pub placeholder_values: Vec<Binding>,
    pub update_set: Vec<String>,
    pub update_values: Vec<Binding>,
    pub identifier: IdentifierData,
}

impl ModelData {
    /// Compose the template context for `schema`.
    pub fn new(
        schema: &Schema,
        policy: &dyn NamingPolicy,
        naming: &NamingConvention,
    ) -> Result<Self, TemplateError> {
        let name = identifier_slot("name", &schema.name)?.to_string();

        let table_name = match &schema.table_name {
            Some(table) => table_slot(table)?.to_string(),
            None => policy.table_name(&name),
        };

        if schema.fields.is_empty() {
            return Err(TemplateError::NoFields);
        }

        let mut fields = Vec::with_capacity(schema.fields.len());
        for field in &schema.fields {
            identifier_slot("field", &field.name)?;
            let column = identifier_slot("field", &naming.raw_field_name(&field.name))?.to_string();
            usable_slot(naming, "field", &column)?;
            fields.push(FieldData {
                name: field.name.clone(),
                ident: naming.field_name(&field.name),
                column,
                ty: field.ty,
                tag: literal_slot("tag", &field.tag)?.to_string(),
            });
        }

        let identifier = schema
            .fields
            .iter()
            .position(|f| f.is_identifier())
            .map(|i| IdentifierData {
                field: fields[i].ident.clone(),
                column: fields[i].column.clone(),
                ty: fields[i].ty,
            })
            .ok_or(TemplateError::MissingIdentifier)?;

        let columns: Vec<String> = fields.iter().map(|f| f.column.clone()).collect();
        let placeholders: Vec<String> = (1..=fields.len()).map(|n| format!("${}", n)).collect();
        let placeholder_values: Vec<Binding> = fields
            .iter()
            .map(|f| Binding::Field(f.ident.clone()))
            .collect();
        let update_set = columns
            .iter()
            .zip(&placeholders)
            .map(|(column, placeholder)| format!("{} = {}", column, placeholder))
            .collect();
        let mut update_values = placeholder_values.clone();
        update_values.push(Binding::Identifier);

        let var_name = policy.var_name(&name);
        let var_name_plural = policy.var_name_plural(&name);
        usable_slot(naming, "var_name", &var_name)?;
        usable_slot(naming, "var_name_plural", &var_name_plural)?;

        Ok(Self {
            var_ident: naming.safe_name(&var_name),
            var_ident_plural: naming.safe_name(&var_name_plural),
            path_plural: policy.path_segment(&name),
            var_name,
            var_name_plural,
            name,
            table_name,
            fields,
            columns,
            placeholders,
            placeholder_values,
            update_set,
            update_values,
            identifier,
        })
    }

    /// Columns joined for an `INSERT` column list.
    pub fn columns_list(&self) -> String {
        self.columns.join(", ")
    }

    /// Placeholders joined for a `VALUES` list.
    pub fn placeholders_list(&self) -> String {
        self.placeholders.join(", ")
    }

    /// `column = $n` pairs joined for an `UPDATE ... SET` clause.
    pub fn update_set_list(&self) -> String {
        self.update_set.join(", ")
    }

    /// Placeholder of the `WHERE` clause in the update statement.
    pub fn update_where_placeholder(&self) -> String {
        format!("${}", self.update_values.len())
    }
}

fn identifier_slot<'a>(slot: &'static str, value: &'a str) -> Result<&'a str, TemplateError> {
    if value.is_empty() {
        Err(TemplateError::EmptySlot { slot })
    } else if !is_identifier(value) {
        Err(TemplateError::InvalidIdentifier {
            slot,
            value: value.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Names the target language cannot use even when escaped.
fn usable_slot(
    naming: &NamingConvention,
    slot: &'static str,
    value: &str,
) -> Result<(), TemplateError> {
    if naming.is_forbidden(value) {
        Err(TemplateError::InvalidIdentifier {
            slot,
            value: value.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Table names may be schema-qualified (`audit.users`).
fn table_slot(value: &str) -> Result<&str, TemplateError> {
    if value.is_empty() {
        return Err(TemplateError::EmptySlot { slot: "table_name" });
    }
    if value.split('.').all(is_identifier) {
        Ok(value)
    } else {
        Err(TemplateError::InvalidIdentifier {
            slot: "table_name",
            value: value.to_string(),
        })
    }
}

/// Tags end up inside Rust string literals and JSON keys.
fn literal_slot<'a>(slot: &'static str, value: &'a str) -> Result<&'a str, TemplateError> {
    if value.is_empty() {
        Err(TemplateError::EmptySlot { slot })
    } else if value.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
        Err(TemplateError::InvalidLiteral {
            slot,
            value: value.to_string(),
        })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crudgen_core::to_snake_case;
    use crudgen_ir::Field;

    use super::*;
    use crate::{IrregularPlurals, NaivePlural};

    fn escape(name: &str) -> String {
        format!("r#{}", name)
    }

    const NAMING: NamingConvention = NamingConvention {
        field_to_name: to_snake_case,
        reserved_words: &["type", "match"],
        forbidden_words: &["crate", "self", "super"],
        escape_reserved: escape,
    };

    fn user() -> Schema {
        Schema::new("User")
            .with_table("users")
            .with_field(Field::new("ID", FieldType::UInt).with_tag("id"))
            .with_field(Field::new("Name", FieldType::String).with_tag("name"))
            .with_field(Field::new("Email", FieldType::String).with_tag("email"))
            .with_field(Field::new("CreatedAt", FieldType::Timestamp))
    }

    #[test]
    fn test_lists_are_aligned() {
        let data = ModelData::new(&user(), &NaivePlural, &NAMING).unwrap();

        assert_eq!(data.columns.len(), 4);
        assert_eq!(data.placeholders.len(), 4);
        assert_eq!(data.placeholder_values.len(), 4);
        assert_eq!(data.columns, ["id", "name", "email", "created_at"]);
        assert_eq!(data.placeholders, ["$1", "$2", "$3", "$4"]);
        assert_eq!(
            data.placeholder_values[3],
            Binding::Field("created_at".to_string())
        );
    }

    #[test]
    fn test_joined_lists() {
        let data = ModelData::new(&user(), &NaivePlural, &NAMING).unwrap();

        assert_eq!(data.columns_list(), "id, name, email, created_at");
        assert_eq!(data.placeholders_list(), "$1, $2, $3, $4");
        assert_eq!(
            data.update_set_list(),
            "id = $1, name = $2, email = $3, created_at = $4"
        );
    }

    #[test]
    fn test_update_where_binds_after_fields() {
        let data = ModelData::new(&user(), &NaivePlural, &NAMING).unwrap();

        assert_eq!(data.update_values.len(), 5);
        assert_eq!(data.update_values.last(), Some(&Binding::Identifier));
        assert_eq!(data.update_where_placeholder(), "$5");
    }

    #[test]
    fn test_derived_names() {
        let data = ModelData::new(&user(), &NaivePlural, &NAMING).unwrap();

        assert_eq!(data.var_name, "user");
        assert_eq!(data.var_name_plural, "users");
        assert_eq!(data.path_plural, "users");
        assert_eq!(data.table_name, "users");
        assert_eq!(
            data.identifier,
            IdentifierData {
                field: "id".to_string(),
                column: "id".to_string(),
                ty: FieldType::UInt,
            }
        );
    }

    #[test]
    fn test_table_derived_when_absent() {
        let schema = Schema::new("Person").with_field(Field::new("Id", FieldType::Int));
        let policy = IrregularPlurals::new().with("Person", "People");
        let data = ModelData::new(&schema, &policy, &NAMING).unwrap();

        assert_eq!(data.table_name, "people");
        assert_eq!(data.var_name_plural, "people");
        assert_eq!(data.path_plural, "people");
    }

    #[test]
    fn test_reserved_names_are_escaped() {
        let schema = Schema::new("Match")
            .with_field(Field::new("ID", FieldType::Int))
            .with_field(Field::new("Type", FieldType::String));
        let data = ModelData::new(&schema, &NaivePlural, &NAMING).unwrap();

        assert_eq!(data.var_ident, "r#match");
        assert_eq!(data.fields[1].ident, "r#type");
        assert_eq!(data.fields[1].column, "type");
        assert!(!data.fields[1].needs_rename());
    }

    #[test]
    fn test_needs_rename() {
        let data = ModelData::new(&user(), &NaivePlural, &NAMING).unwrap();

        assert!(!data.fields[0].needs_rename());
        // `createdat` vs `created_at`
        assert!(data.fields[3].needs_rename());
    }

    #[test]
    fn test_no_fields() {
        let schema = Schema::new("Empty");
        assert_eq!(
            ModelData::new(&schema, &NaivePlural, &NAMING),
            Err(TemplateError::NoFields)
        );
    }

    #[test]
    fn test_missing_identifier() {
        let schema = Schema::new("Log").with_field(Field::new("Message", FieldType::String));
        assert_eq!(
            ModelData::new(&schema, &NaivePlural, &NAMING),
            Err(TemplateError::MissingIdentifier)
        );
    }

    #[test]
    fn test_invalid_slots() {
        let schema = Schema::new("").with_field(Field::new("ID", FieldType::Int));
        assert_eq!(
            ModelData::new(&schema, &NaivePlural, &NAMING),
            Err(TemplateError::EmptySlot { slot: "name" })
        );

        let schema = Schema::new("User Profile").with_field(Field::new("ID", FieldType::Int));
        assert_eq!(
            ModelData::new(&schema, &NaivePlural, &NAMING),
            Err(TemplateError::InvalidIdentifier {
                slot: "name",
                value: "User Profile".to_string(),
            })
        );

        let schema = user().with_table("");
        assert_eq!(
            ModelData::new(&schema, &NaivePlural, &NAMING),
            Err(TemplateError::EmptySlot { slot: "table_name" })
        );

        let schema = Schema::new("User")
            .with_field(Field::new("ID", FieldType::Int).with_tag("i\"d"));
        assert_eq!(
            ModelData::new(&schema, &NaivePlural, &NAMING),
            Err(TemplateError::InvalidLiteral {
                slot: "tag",
                value: "i\"d".to_string(),
            })
        );
    }

    #[test]
    fn test_unescapable_model_name() {
        let schema = Schema::new("Crate").with_field(Field::new("ID", FieldType::Int));
        assert_eq!(
            ModelData::new(&schema, &NaivePlural, &NAMING),
            Err(TemplateError::InvalidIdentifier {
                slot: "var_name",
                value: "crate".to_string(),
            })
        );
    }

    #[test]
    fn test_unescapable_field_name() {
        let schema = Schema::new("Node")
            .with_field(Field::new("ID", FieldType::Int))
            .with_field(Field::new("Super", FieldType::String));
        assert_eq!(
            ModelData::new(&schema, &NaivePlural, &NAMING),
            Err(TemplateError::InvalidIdentifier {
                slot: "field",
                value: "super".to_string(),
            })
        );
    }

    #[test]
    fn test_qualified_table() {
        let data = ModelData::new(&user().with_table("audit.users"), &NaivePlural, &NAMING).unwrap();
        assert_eq!(data.table_name, "audit.users");
    }
}
