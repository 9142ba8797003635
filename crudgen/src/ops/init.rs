//! Init operation - starter manifest.

use std::path::Path;

use crudgen_core::{File, FileRules, WriteResult};
use crudgen_manifest::{MANIFEST_FILE, STARTER_MANIFEST};
use eyre::{Context, Result};
use tracing::debug;

use crate::reports::InitReport;

/// Write a starter crudgen.toml into `dir`.
///
/// An existing manifest is left alone unless `force` is set.
pub fn init(dir: &Path, force: bool) -> Result<InitReport> {
    let rules = if force {
        FileRules::default()
    } else {
        FileRules::create_once()
    };
    let file = File::new(MANIFEST_FILE, STARTER_MANIFEST).with_rules(rules);
    let path = file.full_path(dir);

    let result = file
        .write_to(dir)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), ?result, "init");

    Ok(InitReport {
        path,
        created: result == WriteResult::Written,
    })
}
