//! Per-model summary shared by `generate` and `check`.

use crudgen_ir::Schema;

use super::output::{Output, Report};

/// Each schema and its fields, in declaration order.
#[derive(Debug)]
pub struct SchemaSummary<'a> {
    pub schemas: &'a [Schema],
}

impl Report for SchemaSummary<'_> {
    fn render(&self, out: &mut dyn Output) {
        for schema in self.schemas {
            out.key_value("Schema", &schema.name);
            for field in &schema.fields {
                out.key_value_indented(
                    "Field",
                    &format!("{} ({}) `{}`", field.name, field.ty, field.tag),
                );
            }
        }
    }
}
