//! Pipeline orchestrator.

use cabind_manifest::Manifest;
use eyre::Result;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{ExpandPhase, NormalizePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline manages the execution of compilation phases and plugin hooks.
/// It runs the built-in phases (normalize, expand, validate) followed by any
/// user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::new())
///     .validate(ValidatePhase::new().with_lint(MyLint));
///
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases and lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to register extra lints.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The validate phase this pipeline runs.
    pub fn validate_phase(&self) -> &ValidatePhase {
        &self.validate
    }

    /// Describe every phase in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        self.phases().into_iter().map(|p| p.info()).collect()
    }

    /// Built-in phases followed by user phases.
    fn phases(&self) -> Vec<&dyn Phase> {
        let mut phases: Vec<&dyn Phase> = vec![&NormalizePhase, &ExpandPhase, &self.validate];
        for phase in &self.phases {
            phases.push(phase.as_ref());
        }
        phases
    }

    /// Run the pipeline on a manifest.
    ///
    /// Executes all phases in order:
    /// 1. NormalizePhase - lowers declared classes to IR
    /// 2. ExpandPhase - appends container classes to the IR
    /// 3. ValidatePhase - runs lints, fails on any error
    /// 4. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase, including a
    /// phase that fails.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. A failed validation carries
    /// a [`ValidationFailed`](super::ValidationFailed) with every error.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);

        for phase in self.phases() {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        let span = tracing::info_span!("pipeline", phase = phase_name);
        let _enter = span.enter();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        // After-hooks also see a failed phase; its error wins over theirs.
        let outcome = phase.run(ctx);
        let hooks = self
            .plugins
            .iter()
            .try_for_each(|plugin| plugin.on_after_phase(phase_name, ctx));
        outcome?;
        hooks?;

        tracing::debug!(diagnostics = ctx.diagnostics.len(), "phase complete");
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        str::FromStr,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use super::*;
    use crate::pipeline::ValidationFailed;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct OrderPlugin(Arc<Mutex<Vec<String>>>);

    impl Plugin for OrderPlugin {
        fn name(&self) -> &'static str {
            "order"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.0.lock().unwrap().push(phase.to_string());
            Ok(())
        }
    }

    fn manifest(src: &str) -> Manifest {
        Manifest::from_str(src).expect("Failed to parse test manifest")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(manifest(
                r#"
                [classes.QUrl]
                eq = true

                [containers.IntList]
                native = "int32_t"
                foreign = "i32"
                "#,
            ))
            .expect("pipeline should succeed");

        let ir = ctx.ir().unwrap();
        assert_eq!(ir.classes.len(), 2);
        assert_eq!(ir.classes[0].c_name, "QUrl");
        assert_eq!(ir.classes[1].c_name, "IntList");
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        pipeline.run(Manifest::default()).expect("pipeline should succeed");

        // 3 built-in phases = 3 before + 3 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 3);
        assert_eq!(after_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_pipeline_phase_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        Pipeline::new()
            .plugin(OrderPlugin(order.clone()))
            .run(Manifest::default())
            .unwrap();

        assert_eq!(*order.lock().unwrap(), ["normalize", "expand", "validate"]);
    }

    #[test]
    fn test_pipeline_phase_info() {
        let names: Vec<_> = Pipeline::new().phase_info().iter().map(|p| p.name).collect();
        assert_eq!(names, ["normalize", "expand", "validate"]);
    }

    #[test]
    fn test_pipeline_fails_on_violation() {
        let err = Pipeline::new()
            .run(manifest(
                r#"
                [classes.Widget]

                [classes.Factory.methods.makeHandle]
                static = true
                return = "Widget"
                body = "return Widget();"
                "#,
            ))
            .unwrap_err();

        let failed = err.downcast_ref::<ValidationFailed>().unwrap();
        assert_eq!(failed.errors.len(), 1);
        assert_eq!(failed.errors[0].location.as_deref(), Some("Factory.makeHandle"));
    }

    #[test]
    fn test_after_hooks_run_for_failed_phase() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let err = Pipeline::new()
            .plugin(plugin)
            .run(manifest(
                r#"
                [classes.QObject.methods.make]
                const = true
                static = true
                body = ""
                "#,
            ))
            .unwrap_err();

        assert!(err.downcast_ref::<ValidationFailed>().is_some());
        assert_eq!(before_count.load(Ordering::SeqCst), 3);
        assert_eq!(after_count.load(Ordering::SeqCst), 3);
    }
}
