//! Error types for rendering and emission.

use std::{io, path::PathBuf};

use thiserror::Error;

/// A model's data could not be composed into a valid template context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("model has no fields")]
    NoFields,

    #[error("model has no identifier field (a field named `id`)")]
    MissingIdentifier,

    #[error("template slot `{slot}` is empty")]
    EmptySlot { slot: &'static str },

    #[error("template slot `{slot}` is not a valid identifier: '{value}'")]
    InvalidIdentifier { slot: &'static str, value: String },

    #[error("template slot `{slot}` is not a valid literal: '{value}'")]
    InvalidLiteral { slot: &'static str, value: String },

    #[error("template slot `{slot}` clashes with a name the generated code uses: '{value}'")]
    ReservedName { slot: &'static str, value: String },

    #[error("template slot `{slot}` is already taken by model '{other}': '{value}'")]
    DuplicateName {
        slot: &'static str,
        value: String,
        other: String,
    },
}

/// Errors produced while generating output for a batch of models.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to render model '{model}': {source}")]
    Template {
        model: String,
        #[source]
        source: TemplateError,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap a template error with the model it came from.
    pub fn template(model: impl Into<String>, source: TemplateError) -> Self {
        Self::Template {
            model: model.into(),
            source,
        }
    }

    /// Wrap an IO error with the path being written.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A failed generation run.
///
/// Emission does not roll back, so this records every file that reached the
/// disk before the failure.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct GenerateError {
    pub written: Vec<PathBuf>,
    #[source]
    pub source: Error,
}

impl From<Error> for GenerateError {
    fn from(source: Error) -> Self {
        Self {
            written: Vec::new(),
            source,
        }
    }
}
