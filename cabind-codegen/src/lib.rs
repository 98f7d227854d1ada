//! Binding compilation for cabind.
//!
//! This crate turns a parsed schema into validated, rendered artifacts. The
//! language renderers (`cabind-codegen-cpp`, `cabind-codegen-rust`) plug
//! into it through [`Artifact`] and [`Translator`].
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`pipeline`] - Phases, lints, plugins and diagnostics
//! - [`artifact`] - The rendering boundary ([`Artifact`], [`Emitter`])
//! - [`translate`] - The raw binding boundary ([`Translator`])
//! - [`generator`] - Staged, all-or-nothing generation
//! - [`testing`] - Test utilities (feature-gated)

pub mod artifact;
pub mod builder;
pub mod generator;
pub mod pipeline;
pub mod translate;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use artifact::{Artifact, ArtifactKind, Emitter, RenderedArtifact};
pub use builder::{CodeBuilder, Indent};
pub use generator::{GenerateResult, Generator, Preview};
pub use translate::{TranslateError, Translator, TranslatorFlags};
