//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`NormalizePhase`] - lowers declared classes into the binding IR
//! - [`ExpandPhase`] - materializes container instantiations as classes
//! - [`ValidatePhase`] - runs lints over the whole IR

mod expand;
mod normalize;
mod validate;

pub use expand::{ExpandPhase, container_descriptor};
pub use normalize::{NormalizePhase, generate_dtor, normalize, normalize_class};
pub use validate::{
    ConstStaticLint, Lint, LintInfo, NonTrivialReturnLint, ReservedParamLint, ValidatePhase,
};
