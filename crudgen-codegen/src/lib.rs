//! Shared code generation utilities for the crudgen CRUD generator.
//!
//! This crate provides the language-agnostic half of generation: it turns a
//! [`Schema`](crudgen_ir::Schema) into validated [`ModelData`], offers the
//! code building primitives language generators render with, and writes the
//! results to disk through the [`FileEmitter`].
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`naming`] - Pluggable pluralization and derived identifiers (NamingPolicy)
//! - [`generation`] - Output management (FileEmitter, ImportCollector, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)

pub mod builder;
mod error;
pub mod generation;
pub mod language;
mod model_data;
pub mod naming;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use error::{Error, GenerateError, TemplateError};
pub use generation::{FileEmitter, GenerateReport, ImportCollector};
pub use language::{LanguageCodegen, NamingConvention, PreviewFile, TypeMapper};
pub use model_data::{Binding, FieldData, IdentifierData, ModelData};
pub use naming::{IrregularPlurals, NaivePlural, NamingPolicy};
