//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Name and description of a phase, for `cabind explain`.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// One step of the compilation pipeline.
///
/// The built-in order is normalize, expand, validate; extra phases run
/// after validation. A phase returns `Err` only when compilation cannot
/// continue. Anything else goes into `ctx.diagnostics`.
pub trait Phase: Send + Sync {
    /// Short name, also passed to plugin hooks and used for snapshot files.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
