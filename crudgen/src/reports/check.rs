//! Check command report.

use std::path::PathBuf;

use crudgen_ir::Schema;

use super::{
    SchemaSummary,
    output::{Output, Report},
};

/// Outcome of validating and rendering a manifest in memory.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub schemas: Vec<Schema>,
    /// Files a `generate` run would write.
    pub file_count: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if self.schemas.is_empty() {
            out.warning("no models defined");
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        SchemaSummary {
            schemas: &self.schemas,
        }
        .render(out);
        out.newline();
        out.preformatted(&format!("{} files would be generated", self.file_count));
    }
}
