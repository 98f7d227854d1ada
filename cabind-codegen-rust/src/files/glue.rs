//! Safe trait impls over the raw bindings.

use cabind_codegen::{Artifact, ArtifactKind, CodeBuilder};
use cabind_ir::{AbiFunction, AbiOp, BindingIR, ClassIR};

use super::{banner, symbol, use_raw};

/// Renders the foreign glue.
///
/// Generated lifecycle operations call their C function; operations marked
/// trivial are done bitwise without crossing the boundary.
pub struct ForeignGlue;

impl Artifact for ForeignGlue {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ForeignGlue
    }

    fn render(&self, ir: &BindingIR) -> String {
        let classes: Vec<(&ClassIR, Vec<AbiFunction>)> = ir
            .classes
            .iter()
            .map(|c| (c, c.abi(&ir.meta.prefix)))
            .collect();

        let needs_ordering = classes.iter().any(|(c, _)| c.ord);
        let needs_uninit = classes.iter().any(|(c, abi)| {
            symbol(abi, &AbiOp::Init).is_some() || symbol(abi, &AbiOp::Clone).is_some()
        });

        let mut b = CodeBuilder::rust()
            .line(&banner())
            .when(needs_ordering, |b| b.line("use std::cmp::Ordering;"))
            .when(needs_uninit, |b| b.line("use std::mem::MaybeUninit;"))
            .blank()
            .line(&use_raw(ir));

        for (class, abi) in &classes {
            b = render_class(b, class, abi);
        }

        b.build()
    }
}

fn render_class(b: CodeBuilder, class: &ClassIR, abi: &[AbiFunction]) -> CodeBuilder {
    let b = render_ctor(b, class, abi);
    let b = render_clone(b, class, abi);
    let b = render_eq(b, class, abi);
    let b = render_ord(b, class, abi);
    render_drop(b, class, abi)
}

fn render_ctor(b: CodeBuilder, class: &ClassIR, abi: &[AbiFunction]) -> CodeBuilder {
    let name = &class.c_name;

    if let Some(new) = symbol(abi, &AbiOp::New) {
        return b.blank().block_with_close(&format!("impl {name} {{"), "}", |b| {
            b.line("#[inline]")
                .block_with_close("pub fn new() -> *mut Self {", "}", |b| {
                    b.line(&format!("unsafe {{ {new}() }}"))
                })
        });
    }

    let body: Vec<String> = if let Some(init) = symbol(abi, &AbiOp::Init) {
        vec![
            "unsafe {".to_string(),
            "    let mut ret = MaybeUninit::uninit();".to_string(),
            format!("    {init}(ret.as_mut_ptr());"),
            "    ret.assume_init()".to_string(),
            "}".to_string(),
        ]
    } else if class.default_ctor.is_trivial() && !class.managed_object {
        vec!["unsafe { std::mem::zeroed() }".to_string()]
    } else {
        return b;
    };

    b.blank()
        .block_with_close(&format!("impl {name} {{"), "}", |b| {
            b.line("#[inline]")
                .block_with_close("pub fn new() -> Self {", "}", |b| {
                    b.each(&body, |b, line| b.line(line))
                })
        })
        .blank()
        .block_with_close(&format!("impl Default for {name} {{"), "}", |b| {
            b.line("#[inline]")
                .block_with_close("fn default() -> Self {", "}", |b| {
                    b.line(&format!("{name}::new()"))
                })
        })
}

fn render_clone(b: CodeBuilder, class: &ClassIR, abi: &[AbiFunction]) -> CodeBuilder {
    let clone = symbol(abi, &AbiOp::Clone);
    if clone.is_none() && !class.copy_ctor.is_trivial() {
        return b;
    }
    let assign = symbol(abi, &AbiOp::Assign);

    b.blank().block_with_close(
        &format!("impl Clone for {} {{", class.c_name),
        "}",
        |b| {
            b.line("#[inline]")
                .block_with_close("fn clone(&self) -> Self {", "}", |b| match clone {
                    Some(clone) => b.block_with_close("unsafe {", "}", |b| {
                        b.line("let mut ret = MaybeUninit::uninit();")
                            .line(&format!("{clone}(self, ret.as_mut_ptr());"))
                            .line("ret.assume_init()")
                    }),
                    None => b.line("unsafe { std::ptr::read(self) }"),
                })
                .each(assign, |b, assign| {
                    b.blank().line("#[inline]").block_with_close(
                        "fn clone_from(&mut self, source: &Self) {",
                        "}",
                        |b| b.line(&format!("unsafe {{ {assign}(self, source) }}")),
                    )
                })
        },
    )
}

fn render_eq(b: CodeBuilder, class: &ClassIR, abi: &[AbiFunction]) -> CodeBuilder {
    let Some(equals) = symbol(abi, &AbiOp::Equals) else {
        return b;
    };
    let name = &class.c_name;

    b.blank()
        .block_with_close(&format!("impl PartialEq for {name} {{"), "}", |b| {
            b.line("#[inline]")
                .block_with_close("fn eq(&self, other: &Self) -> bool {", "}", |b| {
                    b.line(&format!("unsafe {{ {equals}(self, other) }}"))
                })
        })
        .blank()
        .line(&format!("impl Eq for {name} {{}}"))
}

fn render_ord(b: CodeBuilder, class: &ClassIR, abi: &[AbiFunction]) -> CodeBuilder {
    let Some(cmp) = symbol(abi, &AbiOp::Cmp) else {
        return b;
    };
    let name = &class.c_name;

    b.blank()
        .block_with_close(&format!("impl PartialOrd for {name} {{"), "}", |b| {
            b.line("#[inline]").block_with_close(
                "fn partial_cmp(&self, other: &Self) -> Option<Ordering> {",
                "}",
                |b| b.line("Some(Ord::cmp(self, other))"),
            )
        })
        .blank()
        .block_with_close(&format!("impl Ord for {name} {{"), "}", |b| {
            b.line("#[inline]")
                .block_with_close("fn cmp(&self, other: &Self) -> Ordering {", "}", |b| {
                    b.block_with_close(
                        &format!("match unsafe {{ {cmp}(self, other) }} {{"),
                        "}",
                        |b| {
                            b.line("-1 => Ordering::Less,")
                                .line("0 => Ordering::Equal,")
                                .line("1 => Ordering::Greater,")
                                .line(&format!(
                                    "other => unreachable!(\"{cmp} returned {{other}}\"),"
                                ))
                        },
                    )
                })
        })
}

fn render_drop(b: CodeBuilder, class: &ClassIR, abi: &[AbiFunction]) -> CodeBuilder {
    let Some(destroy) = symbol(abi, &AbiOp::Destroy) else {
        return b;
    };

    b.blank()
        .block_with_close(&format!("impl Drop for {} {{", class.c_name), "}", |b| {
            b.line("#[inline]")
                .block_with_close("fn drop(&mut self) {", "}", |b| {
                    b.line(&format!("unsafe {{ {destroy}(self) }}"))
                })
        })
}

#[cfg(test)]
mod tests {
    use cabind_codegen::testing::compile;

    use super::*;

    #[test]
    fn test_imports_only_when_needed() {
        let out = ForeignGlue.render(&compile("[classes.QObject]\nmanaged-object = true\n"));
        assert!(!out.contains("Ordering"));
        assert!(!out.contains("MaybeUninit"));
        assert!(out.contains("use super::ffi::*;"));
    }

    #[test]
    fn test_trivial_lifecycle_is_bitwise() {
        let out = ForeignGlue.render(&compile(
            r#"
            [classes.Point]
            dtor = "trivial"
            default-ctor = "trivial"
            copy-ctor = "trivial"
            layout = { x = "int", y = "int" }
            "#,
        ));

        assert!(out.contains("unsafe { std::mem::zeroed() }"));
        assert!(out.contains("unsafe { std::ptr::read(self) }"));
        assert!(!out.contains("impl Drop"));
        assert!(!out.contains("ffi_Point_"));
    }

    #[test]
    fn test_clone_from_uses_assign() {
        let out = ForeignGlue.render(&compile(
            "[classes.QUrl]\ncopy-ctor = true\ncopy-assign = true\n",
        ));

        assert!(out.contains("ffi_QUrl_clone(self, ret.as_mut_ptr());"));
        assert!(out.contains("fn clone_from(&mut self, source: &Self) {\n        unsafe { ffi_QUrl_assign(self, source) }\n    }"));
    }

    #[test]
    fn test_managed_object_has_no_drop() {
        let out = ForeignGlue.render(&compile(
            "[classes.QTimer]\nmanaged-object = true\nmanaged-object-default-ctor = true\n",
        ));

        assert!(out.contains("pub fn new() -> *mut Self {\n        unsafe { ffi_QTimer_new() }\n    }"));
        assert!(!out.contains("impl Drop"));
        assert!(!out.contains("impl Default"));
    }
}
