//! Core operations.
//!
//! This module contains the business logic for cabind commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod explain;

pub use bake::{BakeOptions, bake};
use cabind_codegen::{Emitter, pipeline::Diagnostic};
use cabind_codegen_cpp::{NativeHeader, NativeSource};
use cabind_codegen_rust::{ContainerWrapper, ForeignGlue};
pub use check::check;
pub use explain::explain;

/// Every artifact a bake produces, in emission order.
pub fn emitter() -> Emitter {
    Emitter::new()
        .artifact(NativeHeader)
        .artifact(NativeSource)
        .artifact(ForeignGlue)
        .artifact(ContainerWrapper)
}

/// `[lint] message` followed by the schema location, if any.
fn describe(diag: &Diagnostic) -> String {
    let mut msg = match &diag.lint {
        Some(lint) => format!("[{lint}] {}", diag.message),
        None => diag.message.clone(),
    };
    if let Some(loc) = &diag.location {
        msg.push_str(&format!("\n  --> {loc}"));
    }
    msg
}
