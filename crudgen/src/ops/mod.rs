//! Command operations.
//!
//! Each operation does the work of one command and returns a report; the
//! commands decide how to print it.

mod check;
mod generate;
mod init;

pub use check::check;
pub use generate::{GenerateOptions, generate, preview};
pub use init::init;
