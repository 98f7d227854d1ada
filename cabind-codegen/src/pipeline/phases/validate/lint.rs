//! Lint trait for binding validation.

use cabind_ir::BindingIR;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    /// The lint name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A whole-model check run by the validate phase.
///
/// Lints see the fully expanded IR, so they can resolve any class a method
/// refers to by name. A lint only appends diagnostics; it never stops the
/// others from running.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the IR and add any diagnostics.
    fn check(&self, ir: &BindingIR, diagnostics: &mut Vec<Diagnostic>);

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
