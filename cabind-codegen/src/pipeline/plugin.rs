//! Hooks around pipeline phases.

use eyre::Result;

use super::CompilationContext;

/// Observes (or adjusts) the context around every phase.
///
/// Returning `Err` from a hook aborts the pipeline.
///
/// ```ignore
/// struct ClassCount;
///
/// impl Plugin for ClassCount {
///     fn name(&self) -> &'static str { "class-count" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         if let Some(ir) = &ctx.ir {
///             tracing::info!(phase, classes = ir.classes.len());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Only called when the phase succeeded.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
