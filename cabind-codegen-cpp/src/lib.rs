//! Native (C++) artifacts for cabind.
//!
//! - [`NativeHeader`] declares the flat C-ABI surface and, for the
//!   translator, layout-compatible stand-ins of every class.
//! - [`NativeSource`] defines that surface on top of the real native types.
//!
//! Both render from [`ClassIR::abi`](cabind_ir::ClassIR::abi), so a function
//! is declared exactly when it is defined.

mod files;

pub use files::{NativeHeader, NativeSource};
