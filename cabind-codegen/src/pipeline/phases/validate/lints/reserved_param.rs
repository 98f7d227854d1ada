//! Lint for parameter names that collide with the generated receiver.

use cabind_ir::BindingIR;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Name of the receiver prepended to every non-static method function.
pub const RECEIVER_NAME: &str = "self";

/// Lint that rejects parameters shadowing the method receiver.
pub struct ReservedParamLint;

impl Lint for ReservedParamLint {
    fn name(&self) -> &'static str {
        "reserved-param"
    }

    fn description(&self) -> &'static str {
        "Reject parameters named like the method receiver"
    }

    fn check(&self, ir: &BindingIR, diagnostics: &mut Vec<Diagnostic>) {
        for class in &ir.classes {
            for method in class.methods.iter().filter(|m| !m.is_static) {
                for param in &method.params {
                    if param.name == RECEIVER_NAME {
                        diagnostics.push(
                            Diagnostic::error(
                                "validate",
                                format!(
                                    "parameter '{}' collides with the method receiver",
                                    param.name
                                ),
                            )
                            .with_lint(self.name())
                            .at_method(&class.c_name, &method.name),
                        );
                    }
                }
            }
        }
    }
}
