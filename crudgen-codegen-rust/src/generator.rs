use std::path::Path;

use crudgen_codegen::{
    Error, FileEmitter, GenerateError, GenerateReport, LanguageCodegen, ModelData, NaivePlural,
    NamingPolicy, PreviewFile, TemplateError,
};
use crudgen_core::{File, RouterLayout};
use crudgen_ir::Schema;
use tracing::debug;

use crate::{
    RUST_NAMING,
    files::{HandlerRs, HandlersMod, MainRs, ModelsRs},
    naming::check_generated_names,
};

/// Rust code generator that produces axum handlers backed by sqlx.
pub struct Generator<'a, P = NaivePlural> {
    schemas: &'a [Schema],
    policy: P,
    layout: RouterLayout,
}

impl<P: NamingPolicy> LanguageCodegen for Generator<'_, P> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>, Error> {
        Ok(self
            .render()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path().to_path_buf(),
                content: file.content().to_string(),
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a, NaivePlural> {
    pub fn new(schemas: &'a [Schema]) -> Self {
        Self {
            schemas,
            policy: NaivePlural,
            layout: RouterLayout::default(),
        }
    }
}

impl<'a, P: NamingPolicy> Generator<'a, P> {
    /// Use a different naming policy, e.g. one with irregular plurals.
    pub fn with_policy<Q: NamingPolicy>(self, policy: Q) -> Generator<'a, Q> {
        Generator {
            schemas: self.schemas,
            policy,
            layout: self.layout,
        }
    }

    /// Choose how route registrations are written.
    pub fn with_layout(mut self, layout: RouterLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Compose the template context of every schema.
    ///
    /// Fails on the first schema that cannot be rendered, including one whose
    /// handler file or route group another model already claims.
    pub fn model_data(&self) -> Result<Vec<ModelData>, Error> {
        let mut models: Vec<ModelData> = Vec::with_capacity(self.schemas.len());
        for schema in self.schemas {
            let data = ModelData::new(schema, &self.policy, &RUST_NAMING)
                .and_then(|data| check_generated_names(&data).map(|()| data))
                .and_then(|data| check_unique(&models, data))
                .map_err(|source| Error::template(&schema.name, source))?;
            debug!(
                model = %data.name,
                table = %data.table_name,
                path = %data.path_plural,
                fields = data.fields.len(),
                "composed model"
            );
            models.push(data);
        }
        Ok(models)
    }

    /// Render every file of the run, in write order.
    ///
    /// With [`RouterLayout::PerModel`] `main.rs` appears once per model, each
    /// copy holding only that model's routes.
    pub fn render(&self) -> Result<Vec<File>, Error> {
        let models = self.model_data()?;

        let mut files = vec![
            File::from_generated(&ModelsRs::new(&models)),
            File::from_generated(&HandlersMod::new(&models)),
        ];

        for model in &models {
            files.push(File::from_generated(&HandlerRs::new(model)));
            if self.layout == RouterLayout::PerModel {
                files.push(File::from_generated(&MainRs::new(std::slice::from_ref(
                    model,
                ))));
            }
        }

        if self.layout == RouterLayout::Combined {
            files.push(File::from_generated(&MainRs::new(&models)));
        }

        Ok(files)
    }

    /// Render everything first, then write it under `output_dir`.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
        let files = self.render()?;
        debug!(
            output = %output_dir.display(),
            layout = %self.layout,
            files = files.len(),
            "rendered"
        );

        let mut emitter = FileEmitter::new(output_dir);
        match Self::write_files(&mut emitter, &files) {
            Ok(()) => Ok(emitter.finish()),
            Err(err) => Err(emitter.fail(err)),
        }
    }

    fn write_files(emitter: &mut FileEmitter, files: &[File]) -> Result<(), Error> {
        emitter.create_dir("handlers")?;
        emitter.create_dir("")?;
        emitter.emit_all(files)
    }
}

/// `var_name` names the handler file and module; `path_plural` the route group.
fn check_unique(models: &[ModelData], data: ModelData) -> Result<ModelData, TemplateError> {
    for other in models {
        let clash = if other.var_name == data.var_name {
            Some(("var_name", &data.var_name))
        } else if other.path_plural == data.path_plural {
            Some(("path_plural", &data.path_plural))
        } else {
            None
        };
        if let Some((slot, value)) = clash {
            return Err(TemplateError::DuplicateName {
                slot,
                value: value.clone(),
                other: other.name.clone(),
            });
        }
    }
    Ok(data)
}

/// Generate handlers, models and a combined router for `schemas` into
/// `output_dir` using the default naming policy.
pub fn generate(schemas: &[Schema], output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    Generator::new(schemas).generate(output_dir)
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::IrregularPlurals;
    use crudgen_ir::{Field, FieldType};

    use super::*;

    fn schemas() -> Vec<Schema> {
        vec![
            Schema::new("User")
                .with_table("users")
                .with_field(Field::new("ID", FieldType::UInt).with_tag("id"))
                .with_field(Field::new("Name", FieldType::String).with_tag("name")),
            Schema::new("Post")
                .with_table("posts")
                .with_field(Field::new("ID", FieldType::UInt).with_tag("id"))
                .with_field(Field::new("Content", FieldType::String).with_tag("content")),
        ]
    }

    fn paths(files: &[File]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.path().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_combined_write_order() {
        let schemas = schemas();
        let files = Generator::new(&schemas).render().unwrap();

        assert_eq!(
            paths(&files),
            [
                "models.rs",
                "handlers/mod.rs",
                "handlers/user.rs",
                "handlers/post.rs",
                "main.rs"
            ]
        );
    }

    #[test]
    fn test_per_model_write_order() {
        let schemas = schemas();
        let files = Generator::new(&schemas)
            .with_layout(RouterLayout::PerModel)
            .render()
            .unwrap();

        assert_eq!(
            paths(&files),
            [
                "models.rs",
                "handlers/mod.rs",
                "handlers/user.rs",
                "main.rs",
                "handlers/post.rs",
                "main.rs"
            ]
        );
    }

    #[test]
    fn test_template_error_names_model() {
        let schemas = vec![
            schemas().remove(0),
            Schema::new("Log").with_field(Field::new("Message", FieldType::String)),
        ];
        let err = Generator::new(&schemas).render().unwrap_err();

        assert!(matches!(
            err,
            Error::Template { ref model, source: TemplateError::MissingIdentifier } if model == "Log"
        ));
    }

    fn with_id(name: &str) -> Schema {
        Schema::new(name).with_field(Field::new("ID", FieldType::Int))
    }

    #[test]
    fn test_case_variants_cannot_share_a_handler_file() {
        let schemas = vec![with_id("User"), with_id("USER")];
        let err = Generator::new(&schemas).preview().unwrap_err();

        match err {
            Error::Template { model, source } => {
                assert_eq!(model, "USER");
                assert_eq!(
                    source,
                    TemplateError::DuplicateName {
                        slot: "var_name",
                        value: "user".to_string(),
                        other: "User".to_string(),
                    }
                );
            }
            other => panic!("expected Template, got {:?}", other),
        }
    }

    #[test]
    fn test_override_cannot_share_a_route_group() {
        let schemas = vec![with_id("People"), with_id("Person")];
        let err = Generator::new(&schemas)
            .with_policy(IrregularPlurals::new().with("Person", "Peoples"))
            .render()
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Template {
                source: TemplateError::DuplicateName { slot: "path_plural", .. },
                ..
            }
        ));
    }

    #[test]
    fn test_path_keyword_model_is_rejected() {
        let schemas = vec![
            Schema::new("Crate")
                .with_field(Field::new("ID", FieldType::Int))
                .with_field(Field::new("Label", FieldType::String)),
        ];
        let err = Generator::new(&schemas).render().unwrap_err();

        assert!(matches!(
            err,
            Error::Template { source: TemplateError::InvalidIdentifier { slot: "var_name", .. }, .. }
        ));
    }

    #[test]
    fn test_path_keyword_field_is_rejected() {
        let schemas = vec![
            Schema::new("Node")
                .with_field(Field::new("ID", FieldType::Int))
                .with_field(Field::new("Super", FieldType::String)),
        ];
        let err = Generator::new(&schemas).render().unwrap_err();

        assert!(matches!(
            err,
            Error::Template {
                source: TemplateError::InvalidIdentifier { slot: "field", ref value },
                ..
            } if value == "super"
        ));
    }

    #[test]
    fn test_names_shadowing_generated_items_are_rejected() {
        let cases = [
            ("Json", "name"),
            ("StatusCode", "name"),
            ("Pool", "var_name"),
            ("Id", "var_name"),
        ];
        for (name, slot) in cases {
            let schemas = vec![with_id(name)];
            let err = Generator::new(&schemas).render().unwrap_err();
            match err {
                Error::Template {
                    source: TemplateError::ReservedName { slot: found, .. },
                    ..
                } => assert_eq!(found, slot, "model {}", name),
                other => panic!("expected ReservedName for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_policy_reaches_handlers() {
        let schemas = vec![Schema::new("Person").with_field(Field::new("ID", FieldType::Int))];
        let preview = Generator::new(&schemas)
            .with_policy(IrregularPlurals::new().with("Person", "People"))
            .preview()
            .unwrap();

        let handler = preview
            .iter()
            .find(|f| f.path.ends_with("person.rs"))
            .unwrap();
        assert!(handler.content.contains("pub async fn list_people("));
        assert!(handler.content.contains("SELECT * FROM people"));
    }
}
