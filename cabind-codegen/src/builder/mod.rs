//! Text building for the artifact renderers.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
