//! Init command report.

use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InitReport {
    pub path: PathBuf,
    /// False when an existing manifest was left in place.
    pub created: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if self.created {
            out.preformatted(&format!("Created {}", self.path.display()));
            out.newline();
            out.preformatted("Next: edit the models, then run `crudgen generate`.");
        } else {
            out.warning(&format!(
                "{} already exists, left untouched (use --force to overwrite)",
                self.path.display()
            ));
        }
    }
}
