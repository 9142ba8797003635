//! Generate command reports.

use std::path::{Path, PathBuf};

use crudgen_codegen::{GenerateReport, PreviewFile};
use crudgen_ir::Schema;

use super::{
    SchemaSummary,
    output::{Output, Report},
};
use crate::ops::GenerateOptions;

/// Summary of a successful run.
#[derive(Debug)]
pub struct GenerateSummary<'a> {
    schemas: &'a [Schema],
    options: &'a GenerateOptions,
    report: GenerateReport,
}

impl<'a> GenerateSummary<'a> {
    pub fn new(
        schemas: &'a [Schema],
        options: &'a GenerateOptions,
        report: GenerateReport,
    ) -> Self {
        Self {
            schemas,
            options,
            report,
        }
    }
}

impl Report for GenerateSummary<'_> {
    fn render(&self, out: &mut dyn Output) {
        SchemaSummary {
            schemas: self.schemas,
        }
        .render(out);
        out.newline();

        out.key_value(
            "Generated",
            &format!(
                "{} ({} router)",
                self.options.output.display(),
                self.options.layout
            ),
        );
        for path in &self.report.written {
            out.added_item(&relative(path, &self.options.output));
        }
        for path in &self.report.skipped {
            out.list_item(&format!("{} (kept)", relative(path, &self.options.output)));
        }
    }
}

/// Rendered files of a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    files: Vec<PreviewFile>,
}

impl PreviewReport {
    pub fn new(files: Vec<PreviewFile>) -> Self {
        Self { files }
    }
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", self.files.len()));
    }
}

/// Files that reached the disk before a run failed.
#[derive(Debug)]
pub struct FailureReport<'a> {
    written: &'a [PathBuf],
}

impl<'a> FailureReport<'a> {
    pub fn new(written: &'a [PathBuf]) -> Self {
        Self { written }
    }
}

impl Report for FailureReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        if self.written.is_empty() {
            return;
        }
        out.warning("generation stopped part way; these files were already written:");
        for path in self.written {
            out.added_item(&path.display().to_string());
        }
    }
}

fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use crudgen_core::RouterLayout;

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_summary_lists_written_files_relative_to_output() {
        let options = GenerateOptions {
            output: PathBuf::from("api/rest"),
            layout: RouterLayout::Combined,
        };
        let report = GenerateReport {
            written: vec![
                PathBuf::from("api/rest/models.rs"),
                PathBuf::from("api/rest/main.rs"),
            ],
            skipped: Vec::new(),
        };

        let mut out = BufferOutput::default();
        GenerateSummary::new(&[], &options, report).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "",
                "Generated: api/rest (combined router)",
                "  + models.rs",
                "  + main.rs",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let files = vec![PreviewFile {
            path: PathBuf::from("models.rs"),
            content: "// models".to_string(),
        }];

        let mut out = BufferOutput::default();
        PreviewReport::new(files).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── models.rs ──",
                "// models",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }

    #[test]
    fn test_failure_report() {
        let written = [PathBuf::from("out/models.rs")];

        let mut out = BufferOutput::default();
        FailureReport::new(&written).render(&mut out);
        assert_eq!(out.lines.len(), 2);
        assert_eq!(out.lines[1], "  + out/models.rs");

        let mut out = BufferOutput::default();
        FailureReport::new(&[]).render(&mut out);
        assert!(out.lines.is_empty());
    }
}
