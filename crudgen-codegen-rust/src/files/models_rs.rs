use std::path::{Path, PathBuf};

use crudgen_codegen::{ModelData, TypeMapper};
use crudgen_core::{FileRules, GeneratedFile};

use crate::{Field, RustFile, RustTypeMapper, Struct};

/// `models.rs`: one record struct per model.
pub struct ModelsRs<'a> {
    models: &'a [ModelData],
}

impl<'a> ModelsRs<'a> {
    pub fn new(models: &'a [ModelData]) -> Self {
        Self { models }
    }

    fn model_struct(model: &ModelData) -> Struct {
        let types = RustTypeMapper;
        model.fields.iter().fold(
            Struct::new(&model.name).derives([
                "Debug",
                "Clone",
                "Serialize",
                "Deserialize",
                "sqlx::FromRow",
            ]),
            |s, field| {
                s.field(
                    Field::new(&field.ident, types.map_field_type(field.ty))
                        .attr_if(field.needs_rename(), format!("serde(rename = \"{}\")", field.tag)),
                )
            },
        )
    }
}

impl GeneratedFile for ModelsRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("models.rs")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        RustFile::new()
            .imports("serde", &["Deserialize", "Serialize"])
            .add_all(self.models.iter().map(Self::model_struct))
            .render()
    }
}
