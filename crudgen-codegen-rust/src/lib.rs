//! Rust backend for crudgen: renders axum handlers, sqlx-backed models and
//! the router for a batch of schemas.

mod generator;
mod naming;
mod render;
mod rust_file;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Arm, Field, Fn, Match, MethodChain, Param, Struct};
pub use crudgen_codegen::{GenerateReport, LanguageCodegen, PreviewFile};
pub use generator::{Generator, generate};
pub use naming::RUST_NAMING;
pub use render::render_imports;
pub use rust_file::{RawCode, RustFile};
pub use type_mapper::RustTypeMapper;
