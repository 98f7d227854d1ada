//! Lint for methods declared both `const` and `static`.

use cabind_ir::BindingIR;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that rejects `const` on a method without a receiver.
pub struct ConstStaticLint;

impl Lint for ConstStaticLint {
    fn name(&self) -> &'static str {
        "const-static"
    }

    fn description(&self) -> &'static str {
        "Reject methods declared both const and static"
    }

    fn check(&self, ir: &BindingIR, diagnostics: &mut Vec<Diagnostic>) {
        for class in &ir.classes {
            for method in class.methods.iter().filter(|m| m.is_const && m.is_static) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        "a static method has no receiver and cannot be const",
                    )
                    .with_lint(self.name())
                    .at_method(&class.c_name, &method.name),
                );
            }
        }
    }
}
