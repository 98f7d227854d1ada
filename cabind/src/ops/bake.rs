//! Bake operation - binding generation from a schema.

use std::path::Path;

use cabind_codegen::{
    Generator,
    pipeline::{Pipeline, SnapshotPlugin},
};
use cabind_codegen_rust::BindgenTranslator;
use cabind_core::WriteResult;
use cabind_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::{BakeReport, GenerationResult, PreviewFile, WrittenFile, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to run the raw binding translator.
    pub raw: bool,
    /// Directory receiving per-phase model snapshots.
    pub dump_model: Option<&'a Path>,
}

/// Execute the bake operation.
pub fn bake(manifest: &Manifest, opts: BakeOptions) -> Result<BakeReport> {
    tracing::debug!(
        output = %opts.output_dir.display(),
        dry_run = opts.dry_run,
        raw = opts.raw,
        "baking"
    );

    let mut manifest = manifest.clone();
    if !opts.raw {
        manifest.raw.enabled = false;
    }

    let mut pipeline = Pipeline::new();
    if let Some(dir) = opts.dump_model {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }

    let class_count = manifest.classes.len();
    let container_count = manifest.containers.len();
    let translator = BindgenTranslator::new(manifest.raw.tool.as_str());
    let generator = Generator::new(manifest, super::emitter())
        .pipeline(pipeline)
        .translator(translator);

    let (warnings, result) = if opts.dry_run {
        let preview = generator.preview().wrap_err("Failed to compile bindings")?;
        let files = preview
            .files
            .iter()
            .map(|f| PreviewFile {
                path: f.path().display().to_string(),
                content: f.content().to_string(),
            })
            .collect();
        (preview.warnings, GenerationResult::Preview(files))
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate bindings")?;
        let files = generated
            .files
            .into_iter()
            .map(|(path, write)| WrittenFile {
                path,
                changed: write == WriteResult::Written,
            })
            .collect();
        (
            generated.warnings,
            GenerationResult::Written(WrittenResult {
                output_dir: opts.output_dir.to_path_buf(),
                files,
            }),
        )
    };

    Ok(BakeReport {
        class_count,
        container_count,
        warnings: warnings.iter().map(super::describe).collect(),
        dump_dir: opts.dump_model.map(Path::to_path_buf),
        result,
    })
}
