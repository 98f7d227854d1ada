//! Slice-like wrappers over container instantiations.

use cabind_codegen::{Artifact, ArtifactKind, CodeBuilder};
use cabind_ir::{AbiFunction, AbiOp, BindingIR, ClassIR, ClassOrigin};

use super::{banner, symbol, use_raw};

/// Renders `len`, `as_slice`, `push` and friends for every container.
pub struct ContainerWrapper;

impl Artifact for ContainerWrapper {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ContainerWrapper
    }

    fn render(&self, ir: &BindingIR) -> String {
        let mut b = CodeBuilder::rust()
            .line(&banner())
            .line("use std::ops::Deref;")
            .blank()
            .line(&use_raw(ir));

        for class in ir.containers() {
            if let ClassOrigin::Container {
                element_foreign, ..
            } = &class.origin
            {
                let abi = class.abi(&ir.meta.prefix);
                b = render_container(b, class, element_foreign, &Methods::new(&abi));
            }
        }

        b.build()
    }
}

/// The container's six method symbols.
struct Methods<'a> {
    size: &'a str,
    as_slice: &'a str,
    append: &'a str,
    append_list: &'a str,
    append_slice: &'a str,
    reserve: &'a str,
}

impl<'a> Methods<'a> {
    fn new(abi: &'a [AbiFunction]) -> Self {
        let find = |name: &str| symbol(abi, &AbiOp::Method(name.to_string())).unwrap_or_default();
        Self {
            size: find("size"),
            as_slice: find("asSlice"),
            append: find("append"),
            append_list: find("appendList"),
            append_slice: find("appendSlice"),
            reserve: find("reserveAdditional"),
        }
    }
}

fn render_container(b: CodeBuilder, class: &ClassIR, elem: &str, m: &Methods<'_>) -> CodeBuilder {
    let name = &class.c_name;

    b.blank()
        .block_with_close(&format!("impl {name} {{"), "}", |b| {
            b.line("#[inline]")
                .block_with_close("pub fn len(&self) -> usize {", "}", |b| {
                    b.line(&format!("unsafe {{ {}(self) as usize }}", m.size))
                })
                .blank()
                .line("#[inline]")
                .block_with_close("pub fn is_empty(&self) -> bool {", "}", |b| {
                    b.line("self.len() == 0")
                })
                .blank()
                .block_with_close(&format!("pub fn as_slice(&self) -> &[{elem}] {{"), "}", |b| {
                    b.block_with_close("unsafe {", "}", |b| {
                        b.line("let mut size = 0;")
                            .line(&format!("let ptr = {}(self, &mut size);", m.as_slice))
                            .block_with_close("if ptr.is_null() {", "} else {", |b| b.line("&[]"))
                            .indent()
                            .line(&format!(
                                "std::slice::from_raw_parts(ptr as *const {elem}, size as usize)"
                            ))
                            .dedent()
                            .line("}")
                    })
                })
                .blank()
                .line("#[inline]")
                .block_with_close(&format!("pub fn push(&mut self, item: &{elem}) {{"), "}", |b| {
                    b.line(&format!(
                        "unsafe {{ {}(self, item as *const {elem} as *const _) }}",
                        m.append
                    ))
                })
                .blank()
                .block_with_close(
                    &format!("pub fn extend_from_slice(&mut self, items: &[{elem}]) {{"),
                    "}",
                    |b| {
                        b.line(&format!(
                            "unsafe {{ {}(self, items.as_ptr() as *const _, items.len() as _) }}",
                            m.append_slice
                        ))
                    },
                )
                .blank()
                .line("#[inline]")
                .block_with_close("pub fn append(&mut self, other: &Self) {", "}", |b| {
                    b.line(&format!("unsafe {{ {}(self, other) }}", m.append_list))
                })
                .blank()
                .line("#[inline]")
                .block_with_close("pub fn reserve(&mut self, additional: usize) {", "}", |b| {
                    b.line(&format!("unsafe {{ {}(self, additional as _) }}", m.reserve))
                })
        })
        .blank()
        .block_with_close(&format!("impl Deref for {name} {{"), "}", |b| {
            b.line(&format!("type Target = [{elem}];"))
                .blank()
                .line("#[inline]")
                .block_with_close("fn deref(&self) -> &Self::Target {", "}", |b| {
                    b.line("self.as_slice()")
                })
        })
        .blank()
        .block_with_close(&format!("impl From<&[{elem}]> for {name} {{"), "}", |b| {
            b.block_with_close(&format!("fn from(items: &[{elem}]) -> Self {{"), "}", |b| {
                b.line("let mut list = Self::new();")
                    .line("list.extend_from_slice(items);")
                    .line("list")
            })
        })
}

#[cfg(test)]
mod tests {
    use cabind_codegen::testing::compile;

    use super::*;

    #[test]
    fn test_declared_classes_are_skipped() {
        let out = ContainerWrapper.render(&compile("[classes.QUrl]\n"));
        assert!(!out.contains("QUrl"));
        assert!(out.starts_with("// GENERATED -- DO NOT EDIT!!\n"));
    }

    #[test]
    fn test_wrapper_uses_foreign_element() {
        let out = ContainerWrapper.render(&compile(
            r#"
            prefix = "qffi"

            [classes.QString]

            [containers.QStringList]
            native = "QString"
            foreign = "QString"
            "#,
        ));

        assert!(out.contains("impl QStringList {"));
        assert!(out.contains("pub fn as_slice(&self) -> &[QString] {"));
        assert!(out.contains("let ptr = qffi_QStringList_asSlice(self, &mut size);"));
        assert!(out.contains("impl From<&[QString]> for QStringList {"));
        assert!(!out.contains("impl QString {"));
    }

    #[test]
    fn test_every_container_method_is_called() {
        let ir = compile("[containers.IntList]\nnative = \"int\"\nforeign = \"i32\"\n");
        let out = ContainerWrapper.render(&ir);
        let class = ir.class("IntList").unwrap();

        for func in class.abi(&ir.meta.prefix) {
            if func.method_name().is_some() {
                assert!(out.contains(&func.symbol), "{} not called", func.symbol);
            }
        }
    }
}
