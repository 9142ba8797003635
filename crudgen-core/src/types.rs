//! Core type definitions.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// How route registrations are written to the router file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouterLayout {
    /// Accumulate every model's routes and write the router file once.
    #[default]
    Combined,
    /// Rewrite the router file after each model; the last model wins.
    PerModel,
}

impl RouterLayout {
    /// Get the kebab-case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterLayout::Combined => "combined",
            RouterLayout::PerModel => "per-model",
        }
    }
}

impl fmt::Display for RouterLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouterLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "combined" => Ok(RouterLayout::Combined),
            "per-model" => Ok(RouterLayout::PerModel),
            other => Err(format!(
                "unknown router layout '{}', expected 'combined' or 'per-model'",
                other
            )),
        }
    }
}
