//! Test utilities for artifact renderers and generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::{Arc, Mutex},
};

use cabind_ir::BindingIR;
use cabind_manifest::Manifest;

use crate::{
    artifact::{Artifact, ArtifactKind},
    pipeline::Pipeline,
    translate::{TranslateError, Translator, TranslatorFlags},
};

/// Parse a schema and run the full pipeline, panicking on failure.
pub fn compile(schema: &str) -> BindingIR {
    let manifest = Manifest::from_str(schema).expect("Failed to parse schema");
    let mut ctx = Pipeline::new().run(manifest).expect("pipeline failed");
    ctx.take_ir().expect("pipeline produced no IR")
}

/// A translator that never spawns a process.
pub struct StubTranslator {
    result: Result<String, String>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl StubTranslator {
    /// Succeed with the given output.
    pub fn output(output: impl Into<String>) -> Self {
        Self {
            result: Ok(output.into()),
            calls: Arc::default(),
        }
    }

    /// Fail as if the tool exited with status 1 and this stderr.
    pub fn failing(stderr: impl Into<String>) -> Self {
        Self {
            result: Err(stderr.into()),
            calls: Arc::default(),
        }
    }

    /// Headers this translator was asked to translate.
    pub fn calls(&self) -> Arc<Mutex<Vec<PathBuf>>> {
        Arc::clone(&self.calls)
    }
}

impl Translator for StubTranslator {
    fn name(&self) -> &str {
        "stub"
    }

    fn translate(&self, header: &Path, _flags: &TranslatorFlags) -> Result<String, TranslateError> {
        self.calls
            .lock()
            .expect("poisoned")
            .push(header.to_path_buf());
        self.result.clone().map_err(|stderr| TranslateError::Failed {
            tool: self.name().to_string(),
            header: header.to_path_buf(),
            code: Some(1),
            stderr,
        })
    }
}

/// An artifact listing class names, for generator tests that don't care about content.
pub struct ClassListArtifact(pub ArtifactKind);

impl Artifact for ClassListArtifact {
    fn kind(&self) -> ArtifactKind {
        self.0
    }

    fn render(&self, ir: &BindingIR) -> String {
        let names: Vec<_> = ir.classes.iter().map(|c| c.c_name.as_str()).collect();
        format!("{}: {}\n", self.0, names.join(", "))
    }
}
