use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write crudgen.toml into
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing crudgen.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(&self.dir, self.force)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
