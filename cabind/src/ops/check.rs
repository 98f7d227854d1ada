//! Check operation - schema validation.

use std::path::Path;

use cabind_codegen::pipeline::{Diagnostic, Pipeline, Severity, ValidationFailed};
use cabind_manifest::Manifest;
use eyre::Result;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline and sorts every diagnostic by severity. Validation
/// failures become report errors; anything else is returned as is.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let diagnostics: Vec<Diagnostic> = match Pipeline::new().run(manifest.clone()) {
        Ok(ctx) => ctx.diagnostics,
        Err(err) => match err.downcast_ref::<ValidationFailed>() {
            Some(failed) => failed.errors.clone(),
            None => return Err(err),
        },
    };

    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        class_count: manifest.classes.len(),
        container_count: manifest.containers.len(),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
    };

    for diag in &diagnostics {
        let msg = super::describe(diag);
        match diag.severity {
            Severity::Error => report.errors.push(msg),
            Severity::Warning => report.warnings.push(msg),
            Severity::Info => report.infos.push(msg),
        }
    }

    Ok(report)
}
