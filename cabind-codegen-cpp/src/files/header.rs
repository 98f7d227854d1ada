//! The native header declaring the C-ABI surface.

use cabind_codegen::{Artifact, ArtifactKind, CodeBuilder};
use cabind_ir::{BindingIR, ClassIR};

use super::{banner, layout_name};

/// Renders the native header.
///
/// The header has two faces selected by `BINDGEN`: the translator sees the
/// layout stand-ins (`struct _C`) typedef'd to the class names, while the
/// native build sees the real includes. Both faces share the `extern "C"`
/// declarations.
pub struct NativeHeader;

impl Artifact for NativeHeader {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::NativeHeader
    }

    fn render(&self, ir: &BindingIR) -> String {
        let mut b = CodeBuilder::cpp();
        b.push_line(&banner()).push_line("#pragma once").push_blank();

        if let Some(prelude) = &ir.meta.prelude {
            b.push_lines(prelude).push_blank();
        }

        for class in ir.classes.iter().filter(|c| c.has_layout()) {
            render_layout(&mut b, class);
            b.push_blank();
        }

        b.push_line("#ifdef BINDGEN");
        for class in &ir.classes {
            if class.has_layout() {
                b.push_line(&format!("typedef {} {};", layout_name(class), class.c_name));
            } else {
                b.push_line(&format!("class {};", class.c_name));
            }
        }
        b.push_line("#else");
        for include in includes(ir) {
            b.push_line(&format!("#include <{}>", include));
        }
        for class in ir.classes.iter().filter(|c| c.is_renamed()) {
            b.push_line(&format!("typedef {} {};", class.native_name, class.c_name));
        }
        b.push_line("#endif").push_blank();

        b.push_line("extern \"C\" {").push_blank();
        for class in &ir.classes {
            b.push_comment(&class.c_name);
            for func in class.abi(&ir.meta.prefix) {
                b.push_line(&format!("{};", func.prototype()));
            }
            b.push_blank();
        }
        b.push_line("}");

        b.build()
    }
}

fn render_layout(b: &mut CodeBuilder, class: &ClassIR) {
    b.push_line(&format!("struct {} {{", layout_name(class)))
        .push_indent();
    for (field, ty) in &class.layout {
        b.push_line(&format!("{} {};", ty, field));
    }
    b.push_dedent().push_line("};");
}

/// Per-class includes followed by the extra ones, first occurrence wins.
fn includes(ir: &BindingIR) -> Vec<&str> {
    let mut seen = Vec::new();
    let all = ir
        .classes
        .iter()
        .map(|c| c.include.as_str())
        .chain(ir.meta.includes.iter().map(String::as_str));
    for include in all {
        if !seen.contains(&include) {
            seen.push(include);
        }
    }
    seen
}
