//! Rust artifacts for cabind.
//!
//! - [`ForeignGlue`] implements `Default`, `Drop`, `Clone`, `PartialEq` and
//!   `Ord` for the raw binding types by calling the C-ABI surface.
//! - [`ContainerWrapper`] gives every container a slice-like API.
//! - [`BindgenTranslator`] produces the raw bindings themselves.

mod bindgen;
mod files;

pub use bindgen::BindgenTranslator;
pub use files::{ContainerWrapper, ForeignGlue};
