//! Pipeline snapshot plugin for debugging.
//!
//! Captures the pipeline state after each phase so the intermediate binding
//! model can be inspected (`cabind bake --dump-model <dir>`).

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use cabind_ir::BindingIR;
use eyre::Result;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// The binding IR (available after the "normalize" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<BindingIR>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".cabind/debug"));
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct SnapshotPlugin {
    snapshots: Mutex<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    /// Create a new snapshot plugin that keeps snapshots in memory.
    pub fn new() -> Self {
        Self {
            snapshots: Mutex::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a new snapshot plugin that also writes each snapshot to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: Mutex::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.lock().clone()
    }

    /// Write all snapshots to a directory as `<phase>.json`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        for snapshot in self.lock().iter() {
            write_snapshot(dir.as_ref(), snapshot)?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PhaseSnapshot>> {
        self.snapshots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    fs::write(&path, serde_json::to_string_pretty(snapshot)?)?;
    tracing::debug!(path = %path.display(), "wrote pipeline snapshot");
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            ir: ctx.ir.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.lock().push(snapshot);
        Ok(())
    }
}
