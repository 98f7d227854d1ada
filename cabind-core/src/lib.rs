//! Core utilities and types for the cabind binding compiler.
//!
//! This crate provides the file-writing primitives and string helpers
//! shared by the manifest loader, the pipeline and every generator.

mod file;
mod utils;

// File operations
pub use file::{File, GENERATED_BANNER, Staging, WriteResult};
// Identifier utilities
pub use utils::{CPP_KEYWORDS, identifier_error, is_cpp_keyword};
