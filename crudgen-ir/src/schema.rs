//! Schema and field descriptors.

use crate::FieldType;

/// Generation-ready description of one model.
///
/// Built once per model by the extractor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Model identifier, e.g. `User`.
    pub name: String,
    /// Storage table. `None` means the table name is derived from the model
    /// name by the naming policy at render time.
    pub table_name: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a schema with no fields and a derived table name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            fields: Vec::new(),
        }
    }

    /// Set an explicit table name.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table_name = Some(table.into());
        self
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// The identifier field: the first field named `id`, ignoring case.
    pub fn identifier(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_identifier())
    }

    /// Look up a field by its declared name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One attribute of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Name as declared on the model, e.g. `CreatedAt`.
    pub name: String,
    /// Semantic type.
    pub ty: FieldType,
    /// External serialization key.
    pub tag: String,
}

impl Field {
    /// Create a field whose tag is the lowercased field name.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        let name = name.into();
        let tag = name.to_lowercase();
        Self { name, ty, tag }
    }

    /// Create a field with an explicit tag, falling back to the lowercased
    /// name when the tag is absent or empty.
    pub fn tagged(name: impl Into<String>, ty: FieldType, tag: Option<&str>) -> Self {
        let field = Self::new(name, ty);
        match tag {
            Some(tag) if !tag.is_empty() => field.with_tag(tag),
            _ => field,
        }
    }

    /// Override the serialization tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Whether this field identifies a record.
    pub fn is_identifier(&self) -> bool {
        self.name.eq_ignore_ascii_case("id")
    }
}
