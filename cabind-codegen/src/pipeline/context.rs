//! State threaded through the pipeline phases.

use cabind_ir::BindingIR;
use cabind_manifest::Manifest;
use eyre::{Report, Result, eyre};

use super::diagnostic::Diagnostic;

/// The schema under compilation, the IR built from it so far and every
/// diagnostic reported along the way.
#[derive(Debug)]
pub struct CompilationContext {
    pub manifest: Manifest,
    /// Set by the normalize phase; the expand phase appends containers.
    pub ir: Option<BindingIR>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    pub fn ir(&self) -> Result<&BindingIR> {
        self.ir.as_ref().ok_or_else(missing_ir)
    }

    pub fn ir_mut(&mut self) -> Result<&mut BindingIR> {
        self.ir.as_mut().ok_or_else(missing_ir)
    }

    /// Move the IR out, leaving the context without one.
    pub fn take_ir(&mut self) -> Result<BindingIR> {
        self.ir.take().ok_or_else(missing_ir)
    }
}

fn missing_ir() -> Report {
    eyre!("no binding IR yet; the normalize phase must run first")
}
