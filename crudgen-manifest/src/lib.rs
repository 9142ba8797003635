//! `crudgen.toml` parsing and schema extraction.
//!
//! A manifest describes models as loosely typed TOML tables. The extractor
//! checks each description and turns it into a [`crudgen_ir::Schema`]:
//!
//! ```
//! use crudgen_manifest::Manifest;
//!
//! let manifest: Manifest = r#"
//! [models.User]
//! fields = [
//!     { name = "ID", type = "uint", tag = "id" },
//!     { name = "Name", type = "string" },
//! ]
//! "#
//! .parse()
//! .unwrap();
//!
//! let schemas = manifest.schemas().unwrap();
//! assert_eq!(schemas[0].name, "User");
//! assert_eq!(schemas[0].fields[1].tag, "name");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod extract;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use extract::{ModelDescription, extract_schema, extract_schemas};
pub use manifest::{
    CrudgenToml, DEFAULT_OUTPUT, MANIFEST_FILE, Manifest, ProjectConfig, STARTER_MANIFEST,
};
