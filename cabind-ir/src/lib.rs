//! Intermediate representation for the cabind binding compiler.
//!
//! # Architecture
//!
//! ```text
//! cabind.toml → cabind-manifest (parsing) → cabind-ir (normalized model) → codegen
//! ```
//!
//! A [`BindingIR`] is the single source of truth for every emitted artifact.
//! The C-ABI surface of each class is derived from it exactly once, by
//! [`ClassIR::abi`], so the header, the implementation and the foreign glue
//! can never disagree about which functions exist or how they are spelled.

mod abi;
mod binding;

pub use abi::{AbiFunction, AbiOp, AbiParam};
pub use binding::{BindingIR, BindingMeta, ClassIR, ClassOrigin, MethodIR, ParamIR};
pub use cabind_manifest::Lifecycle;
