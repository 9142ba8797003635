//! Code generation outputs and file management.
//!
//! - [`FileEmitter`] - Ordered, fail-fast writing of rendered files
//! - [`GenerateReport`] - What a successful run wrote
//! - [`ImportCollector`] - Import tracking and deduplication

mod emitter;
mod imports;

pub use emitter::{FileEmitter, GenerateReport};
pub use imports::ImportCollector;
