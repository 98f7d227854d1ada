//! Ties the pipeline, the emitter and the translator together.

use std::path::{Path, PathBuf};

use cabind_core::{File, Staging, WriteResult};
use cabind_ir::BindingIR;
use cabind_manifest::Manifest;
use eyre::{Result, WrapErr, eyre};

use crate::{
    artifact::{ArtifactKind, Emitter},
    pipeline::{Diagnostic, Pipeline},
    translate::{Translator, TranslatorFlags},
};

/// Result of [`Generator::generate`].
#[derive(Debug)]
pub struct GenerateResult {
    /// Every file moved into (or left unchanged in) the output directory.
    pub files: Vec<(PathBuf, WriteResult)>,
    /// Non-fatal diagnostics from the pipeline.
    pub warnings: Vec<Diagnostic>,
}

/// Result of [`Generator::preview`].
#[derive(Debug)]
pub struct Preview {
    /// Rendered artifacts, in emission order.
    pub files: Vec<File>,
    /// Non-fatal diagnostics from the pipeline.
    pub warnings: Vec<Diagnostic>,
}

/// Compiles a schema into its artifacts.
///
/// Nothing reaches the output directory unless every step succeeds: the
/// pipeline validates first, artifacts are rendered in memory, staged next
/// to the output, translated, and only then moved into place.
pub struct Generator {
    manifest: Manifest,
    pipeline: Pipeline,
    emitter: Emitter,
    translator: Option<Box<dyn Translator>>,
}

impl Generator {
    pub fn new(manifest: Manifest, emitter: Emitter) -> Self {
        Self {
            manifest,
            pipeline: Pipeline::new(),
            emitter,
            translator: None,
        }
    }

    /// Use a custom pipeline (extra lints, plugins or phases).
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Produce raw bindings with this translator.
    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Run the pipeline and return the validated IR with any warnings.
    pub fn compile(&self) -> Result<(BindingIR, Vec<Diagnostic>)> {
        let mut ctx = self.pipeline.run(self.manifest.clone())?;
        let warnings = ctx.warnings().cloned().collect();
        Ok((ctx.take_ir()?, warnings))
    }

    /// Render every artifact without touching the filesystem.
    ///
    /// Raw bindings are not included since they need the header on disk.
    pub fn preview(&self) -> Result<Preview> {
        let (ir, warnings) = self.compile()?;
        let files = self
            .emitter
            .render(&ir, &self.manifest.output)
            .into_iter()
            .map(|rendered| rendered.file)
            .collect();
        Ok(Preview { files, warnings })
    }

    /// Generate every artifact into `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (ir, warnings) = self.compile()?;
        let rendered = self.emitter.render(&ir, &self.manifest.output);

        let mut staging = Staging::new_in(output_dir)?;
        let mut staged_header = None;
        for artifact in &rendered {
            let path = staging.stage(&artifact.file)?;
            if artifact.kind == ArtifactKind::NativeHeader {
                staged_header = Some(path);
            }
        }

        if let Some(translator) = self.raw_translator() {
            let header = staged_header
                .ok_or_else(|| eyre!("raw bindings need a native header artifact"))?;
            let flags = TranslatorFlags::from(&self.manifest.raw);
            let _span = tracing::info_span!("translate", tool = translator.name()).entered();
            let raw = translator
                .translate(&header, &flags)
                .wrap_err("failed to generate raw bindings")?;
            staging.stage(&File::new(&self.manifest.output.raw, raw))?;
        }

        let files = staging.commit(output_dir)?;
        tracing::info!(
            files = files.len(),
            output = %output_dir.display(),
            "generated bindings"
        );

        Ok(GenerateResult { files, warnings })
    }

    fn raw_translator(&self) -> Option<&dyn Translator> {
        if !self.manifest.raw.enabled {
            return None;
        }
        self.translator.as_deref()
    }
}
