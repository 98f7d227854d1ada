//! Compilation pipeline for binding generation.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the compilation
//! phases from the parsed schema to an emission-ready [`BindingIR`]. The pipeline provides:
//!
//! - Explicit phase boundaries (normalize → expand → validate)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use cabind_codegen::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let mut ctx = pipeline.run(manifest)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//!
//! let ir = ctx.take_ir()?;
//! ```
//!
//! [`BindingIR`]: cabind_ir::BindingIR

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity, ValidationFailed};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
