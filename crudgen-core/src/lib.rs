//! Core utilities and types for the crudgen CRUD generator.
//!
//! This crate provides the file primitives and string helpers shared by the
//! manifest parser and the code generators.

mod file;
mod types;
mod utils;

// File operations
pub use file::{File, FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// Fundamental types
pub use types::RouterLayout;
// String utilities
pub use utils::{is_identifier, to_snake_case};
