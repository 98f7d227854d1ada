//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod explain;
mod output;

pub use bake::{BakeReport, GenerationResult, PreviewFile, WrittenFile, WrittenResult};
pub use check::CheckReport;
pub use explain::{ClassSummary, ExplainReport, NamedItem};
pub use output::{Report, TerminalOutput};
