//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod init;
mod output;
mod schemas;

pub use check::CheckReport;
pub use generate::{FailureReport, GenerateSummary, PreviewReport};
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
pub use schemas::SchemaSummary;
