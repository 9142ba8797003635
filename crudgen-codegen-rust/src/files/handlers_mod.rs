use std::path::{Path, PathBuf};

use crudgen_codegen::ModelData;
use crudgen_core::{FileRules, GeneratedFile};

use crate::RustFile;

/// `handlers/mod.rs`: declares one module per model.
pub struct HandlersMod<'a> {
    models: &'a [ModelData],
}

impl<'a> HandlersMod<'a> {
    pub fn new(models: &'a [ModelData]) -> Self {
        Self { models }
    }
}

impl GeneratedFile for HandlersMod<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("handlers").join("mod.rs")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        self.models
            .iter()
            .fold(RustFile::new(), |file, model| file.pub_module(&model.var_ident))
            .render()
    }
}
