use std::path::PathBuf;

use clap::Args;
use crudgen_core::RouterLayout;
use crudgen_manifest::{CrudgenToml, MANIFEST_FILE};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{FailureReport, GenerateSummary, PreviewReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to crudgen.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides `[project] output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Router layout: combined or per-model (overrides `[project] router`)
    #[arg(long)]
    pub router: Option<RouterLayout>,

    /// Print the files that would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = CrudgenToml::open(&self.config).unwrap_or_exit();
        let manifest = file.manifest();
        let schemas = manifest.schemas().unwrap_or_exit();

        let options = GenerateOptions {
            output: self.output.clone().unwrap_or_else(|| file.output_dir()),
            layout: self.router.unwrap_or(manifest.project.router),
        };

        let mut out = TerminalOutput::new();

        if self.dry_run {
            let files = ops::preview(&schemas, manifest, &options)
                .wrap_err("Failed to render code")?;
            PreviewReport::new(files).render(&mut out);
            return Ok(());
        }

        match ops::generate(&schemas, manifest, &options) {
            Ok(report) => {
                GenerateSummary::new(&schemas, &options, report).render(&mut out);
                Ok(())
            }
            Err(err) => {
                FailureReport::new(&err.written).render(&mut out);
                Err(err).wrap_err("Failed to generate code")
            }
        }
    }
}
