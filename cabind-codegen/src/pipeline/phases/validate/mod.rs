//! Validate phase - runs lints on the binding IR.

mod lint;
pub mod lints;

use eyre::Result;
pub use lint::{Lint, LintInfo};
pub use lints::{ConstStaticLint, NonTrivialReturnLint, ReservedParamLint};

use crate::pipeline::{CompilationContext, Phase, ValidationFailed};

/// Phase that validates the binding IR using configurable lints.
///
/// Every lint runs before the phase decides; all errors are reported together.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(NonTrivialReturnLint),
                Box::new(ConstStaticLint),
                Box::new(ReservedParamLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Run lints over the expanded model and fail on any error"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx.ir()?;
        let mut found = Vec::new();
        for lint in &self.lints {
            let before = found.len();
            lint.check(ir, &mut found);
            tracing::debug!(lint = lint.name(), reported = found.len() - before, "ran lint");
        }
        ctx.diagnostics.extend(found);

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            return Err(ValidationFailed {
                errors: ctx.errors().cloned().collect(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use cabind_ir::BindingIR;
    use cabind_manifest::Manifest;

    use super::*;
    use crate::pipeline::{Diagnostic, Pipeline};

    struct AlwaysErrorLint;

    impl Lint for AlwaysErrorLint {
        fn name(&self) -> &'static str {
            "always-error"
        }

        fn description(&self) -> &'static str {
            "Report one error per method"
        }

        fn check(&self, ir: &BindingIR, diagnostics: &mut Vec<Diagnostic>) {
            for class in &ir.classes {
                for method in &class.methods {
                    diagnostics.push(
                        Diagnostic::error("validate", "forced error")
                            .with_lint(self.name())
                            .at_method(&class.c_name, &method.name),
                    );
                }
            }
        }
    }

    struct WarnLint;

    impl Lint for WarnLint {
        fn name(&self) -> &'static str {
            "warn"
        }

        fn description(&self) -> &'static str {
            "Always warn"
        }

        fn check(&self, _ir: &BindingIR, diagnostics: &mut Vec<Diagnostic>) {
            diagnostics.push(Diagnostic::warning("validate", "just a warning"));
        }
    }

    fn context(src: &str) -> CompilationContext {
        let mut ctx = CompilationContext::new(Manifest::from_str(src).unwrap());
        ctx.ir = Some(crate::pipeline::phases::normalize(&ctx.manifest));
        ctx
    }

    #[test]
    fn test_builtin_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            ["non-trivial-return", "const-static", "reserved-param"]
        );
    }

    #[test]
    fn test_two_lints_aggregate_on_same_method() {
        let mut ctx = context(
            r#"
            [classes.Widget]

            [classes.Factory.methods.makeHandle]
            const = true
            static = true
            return = "Widget"
            body = "return Widget();"
            "#,
        );

        let err = ValidatePhase::new().run(&mut ctx).unwrap_err();
        let failed = err.downcast_ref::<ValidationFailed>().unwrap();

        assert_eq!(failed.errors.len(), 2);
        let lints: Vec<_> = failed.errors.iter().filter_map(|d| d.lint.as_deref()).collect();
        assert_eq!(lints, ["non-trivial-return", "const-static"]);
        for error in &failed.errors {
            assert_eq!(error.location.as_deref(), Some("Factory.makeHandle"));
        }
    }

    #[test]
    fn test_validate_phase_with_custom_lint() {
        let mut ctx = context(
            r#"
            [classes.A.methods.f]
            body = ""
            [classes.A.methods.g]
            body = ""
            "#,
        );

        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let err = phase.run(&mut ctx).unwrap_err();

        assert_eq!(ctx.error_count(), 2);
        assert!(err.to_string().starts_with("validation failed with 2 error(s)"));
    }

    #[test]
    fn test_validate_phase_warnings_allowed() {
        let mut ctx = context("[classes.A]\n");

        let phase = ValidatePhase::new().with_lint(WarnLint);
        assert!(phase.run(&mut ctx).is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_pipeline_accepts_extra_lint() {
        let manifest = Manifest::from_str("[classes.A.methods.f]\nbody = \"\"\n").unwrap();
        let result = Pipeline::new()
            .validate(ValidatePhase::new().with_lint(AlwaysErrorLint))
            .run(manifest);

        assert!(result.is_err());
    }
}
