//! Explain operation - pipeline and ABI explanation.

use std::path::Path;

use cabind_codegen::pipeline::Pipeline;
use cabind_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::{ClassSummary, ExplainReport, NamedItem};

/// Execute the explain operation.
///
/// Runs the pipeline and returns what it does and which C functions every
/// class ends up exporting.
pub fn explain(manifest: &Manifest, config_path: &Path) -> Result<ExplainReport> {
    let pipeline = Pipeline::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| NamedItem {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = pipeline
        .validate_phase()
        .lint_info()
        .into_iter()
        .map(|l| NamedItem {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let mut ctx = pipeline.run(manifest.clone()).wrap_err("Pipeline failed")?;
    let ir = ctx.take_ir()?;

    let classes = ir
        .classes
        .iter()
        .map(|class| ClassSummary {
            name: class.c_name.clone(),
            native_name: class.native_name.clone(),
            functions: class
                .abi(&ir.meta.prefix)
                .iter()
                .map(|f| f.prototype())
                .collect(),
        })
        .collect();

    let output = &manifest.output;
    let mut files = vec![
        output.header.clone(),
        output.source.clone(),
        output.glue.clone(),
        output.containers.clone(),
    ];
    if manifest.raw.enabled {
        files.push(format!("{} (via {})", output.raw, manifest.raw.tool));
    }

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        prefix: ir.meta.prefix.clone(),
        phases,
        lints,
        classes,
        files,
    })
}
