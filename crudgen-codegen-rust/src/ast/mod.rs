//! Rust AST builders for generating structs, functions, matches and
//! method chains.
//!
//! These provide a high-level API for constructing Rust syntax,
//! which can then be rendered via CodeBuilder.

mod chains;
mod fns;
mod structs;

pub use chains::MethodChain;
pub use fns::{Arm, Fn, Match, Param};
pub use structs::{Field, Struct};
