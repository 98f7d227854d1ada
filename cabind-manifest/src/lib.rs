//! Schema types and parsing for cabind.toml binding descriptors.
//!
//! A manifest declares the native classes to bridge (lifecycle, layout and
//! methods) and the container instantiations to materialize. Parsing checks
//! only what the schema itself can tell: syntax, required fields, unknown
//! keys and identifier spelling. Cross-class rules are the pipeline's job.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod class;
mod container;
mod error;
mod manifest;

pub use class::{ClassDescriptor, Lifecycle, MethodDescriptor};
pub use container::ContainerInstantiation;
pub use error::{Error, Result};
pub use manifest::{ContainerConfig, Manifest, ManifestFile, OutputConfig, ParseContext, RawConfig};
