use std::path::PathBuf;

use clap::Args;
use crudgen_manifest::{CrudgenToml, MANIFEST_FILE};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to crudgen.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = CrudgenToml::open(&self.config).unwrap_or_exit();
        let schemas = file.manifest().schemas().unwrap_or_exit();

        let report = ops::check(file.path(), file.manifest(), schemas)
            .wrap_err("Models cannot be rendered")?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
