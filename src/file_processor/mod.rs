//! File discovery and per-file processing.

mod discovery;
mod processing;

pub use discovery::*;
pub use processing::*;
