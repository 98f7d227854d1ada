//! Lint for classes returned by value across the C ABI.

use cabind_ir::BindingIR;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that rejects methods returning, by value, a class whose destructor is not trivial.
///
/// The caller of a C function receives the bits of the return value and has
/// no way to run a native destructor on them, so only trivially destructible
/// classes may cross the boundary by value. Return a pointer or write into an
/// out-parameter instead.
pub struct NonTrivialReturnLint;

impl Lint for NonTrivialReturnLint {
    fn name(&self) -> &'static str {
        "non-trivial-return"
    }

    fn description(&self) -> &'static str {
        "Reject returning a class with a non-trivial destructor by value"
    }

    fn check(&self, ir: &BindingIR, diagnostics: &mut Vec<Diagnostic>) {
        for class in &ir.classes {
            for method in &class.methods {
                let Some(ret) = method.return_type.as_deref() else {
                    continue;
                };
                let Some(returned) = ir.class(ret.trim()) else {
                    continue;
                };
                if returned.dtor.is_trivial() {
                    continue;
                }

                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("C API does not allow to return non-trivially C++ type {ret}"),
                    )
                    .with_lint(self.name())
                    .at_method(&class.c_name, &method.name),
                );
            }
        }
    }
}
