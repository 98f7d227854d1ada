//! The native implementation defining the C-ABI surface.

use cabind_codegen::{Artifact, ArtifactKind, CodeBuilder};
use cabind_ir::{AbiFunction, AbiOp, BindingIR, ClassIR};

use super::{banner, layout_name};

/// Renders the native implementation.
///
/// Lifecycle functions are placement-new / explicit destructor calls on the
/// class; method functions paste the schema body verbatim with `self` bound
/// to the receiver.
pub struct NativeSource;

impl Artifact for NativeSource {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::NativeSource
    }

    fn render(&self, ir: &BindingIR) -> String {
        let mut b = CodeBuilder::cpp();
        b.push_line(&banner())
            .push_line(&format!("#include \"{}\"", ir.meta.header))
            .push_blank()
            .push_line("#include <new>")
            .push_line("#include <utility>")
            .push_blank()
            .push_line("extern \"C\" {")
            .push_blank();

        for class in &ir.classes {
            b.push_comment(&class.c_name);
            if class.has_layout() {
                render_layout_checks(&mut b, class);
            }
            b.push_blank();

            for func in class.abi(&ir.meta.prefix) {
                render_function(&mut b, class, &func);
                b.push_blank();
            }
        }

        b.push_line("}");
        b.build()
    }
}

fn render_layout_checks(b: &mut CodeBuilder, class: &ClassIR) {
    let name = &class.c_name;
    let layout = layout_name(class);
    b.push_line(&format!(
        "static_assert(alignof({name}) == alignof({layout}), \"Alignment of {name} incompatible\");"
    ));
    b.push_line(&format!(
        "static_assert(sizeof({name}) == sizeof({layout}), \"Size of {name} incompatible\");"
    ));
}

fn render_function(b: &mut CodeBuilder, class: &ClassIR, func: &AbiFunction) {
    let name = &class.c_name;
    b.push_line(&format!("{} {{", func.prototype())).push_indent();

    match &func.op {
        AbiOp::Init => {
            b.push_line(&format!("new (self) {name}();"));
        }
        AbiOp::New => {
            b.push_line(&format!("return new {name}();"));
        }
        AbiOp::Destroy => {
            b.push_line(&format!("self->~{name}();"));
        }
        AbiOp::Clone => {
            b.push_line(&format!("new (new_) {name}(*self);"));
        }
        AbiOp::Assign => {
            b.push_line("*self = *other;");
        }
        AbiOp::Move => {
            b.push_line(&format!("new (dest) {name}(std::move(*self));"));
        }
        AbiOp::Equals => {
            b.push_line("return *self == *other;");
        }
        AbiOp::Cmp => {
            b.push_line("if (*self < *other) {")
                .push_indent()
                .push_line("return -1;")
                .push_dedent()
                .push_line("}")
                .push_line("return *other < *self ? 1 : 0;");
        }
        AbiOp::Method(method) => {
            if let Some(method) = class.method(method) {
                b.push_lines(&method.body);
            }
        }
    }

    b.push_dedent().push_line("}");
}

#[cfg(test)]
mod tests {
    use cabind_codegen::testing::compile;

    use super::*;

    fn render_all(class: &ClassIR, prefix: &str) -> String {
        let mut b = CodeBuilder::cpp();
        for func in class.abi(prefix) {
            render_function(&mut b, class, &func);
        }
        b.build()
    }

    #[test]
    fn test_lifecycle_bodies() {
        let ir = compile(
            r#"
            [classes.QUrl]
            default-ctor = true
            copy-ctor = true
            copy-assign = true
            movable = true
            "#,
        );
        let out = render_all(&ir.classes[0], "qffi");

        assert!(out.contains("void qffi_QUrl_init(QUrl* self) {\n    new (self) QUrl();\n}\n"));
        assert!(out.contains("void qffi_QUrl_destroy(QUrl* self) {\n    self->~QUrl();\n}\n"));
        assert!(out.contains(
            "void qffi_QUrl_clone(QUrl const* self, QUrl* new_) {\n    new (new_) QUrl(*self);\n}\n"
        ));
        assert!(out.contains("    *self = *other;\n"));
        assert!(out.contains("    new (dest) QUrl(std::move(*self));\n"));
    }

    #[test]
    fn test_managed_object_new_without_destroy() {
        let ir = compile(
            r#"
            [classes.QTimer]
            managed-object = true
            managed-object-default-ctor = true
            "#,
        );
        let out = render_all(&ir.classes[0], "qffi");

        assert_eq!(out, "QTimer* qffi_QTimer_new() {\n    return new QTimer();\n}\n");
    }

    #[test]
    fn test_method_body_is_pasted() {
        let ir = compile(
            r#"
            [classes.QString.methods.toUtf8]
            const = true
            params = { out = "QByteArray*" }
            body = "new (out) QByteArray(self->toUtf8());"
            "#,
        );
        let out = render_all(&ir.classes[0], "qffi");

        assert!(out.contains(
            "void qffi_QString_toUtf8(QString const* self, QByteArray* out) {\n    new (out) QByteArray(self->toUtf8());\n}\n"
        ));
    }
}
