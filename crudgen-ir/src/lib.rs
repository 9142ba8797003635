//! Intermediate representation types for the crudgen CRUD generator.
//!
//! A [`Schema`] is the extracted, generation-ready description of one model:
//! its name, the table it is stored in and its ordered [`Field`]s.
//!
//! ```text
//! crudgen.toml → crudgen-manifest (extraction) → crudgen-ir (Schema) → codegen
//! ```
//!
//! The IR is language-agnostic: nothing in here knows about Rust, axum or
//! sqlx. Field order is significant and is preserved by every consumer.

mod schema;
mod types;

pub use schema::{Field, Schema};
pub use types::{FieldType, UnknownFieldType};
