//! Expand phase - materializes container instantiations as classes.

use cabind_ir::ClassOrigin;
use cabind_manifest::{
    ClassDescriptor, ContainerConfig, ContainerInstantiation, Lifecycle, MethodDescriptor,
};
use eyre::Result;
use indexmap::IndexMap;

use super::normalize::normalize_class;
use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that turns every `[containers.<Name>]` entry into a normalized class
/// appended to the IR in declaration order.
pub struct ExpandPhase;

impl Phase for ExpandPhase {
    fn name(&self) -> &'static str {
        "expand"
    }

    fn description(&self) -> &'static str {
        "Materialize container instantiations as classes"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut expanded = Vec::with_capacity(ctx.manifest.containers.len());
        let mut collisions = Vec::new();

        for (name, instance) in &ctx.manifest.containers {
            if ctx.manifest.classes.contains_key(name) {
                collisions.push(
                    Diagnostic::error(
                        self.name(),
                        format!("container '{name}' collides with a declared class"),
                    )
                    .at(format!("containers.{name}")),
                );
                continue;
            }

            let descriptor = container_descriptor(name, instance, &ctx.manifest.container);
            let origin = ClassOrigin::Container {
                element_native: instance.element_native.clone(),
                element_foreign: instance.element_foreign.clone(),
            };
            tracing::debug!(container = %name, native = ?descriptor.overwrite_name, "expanded container");
            expanded.push(normalize_class(name, &descriptor, origin));
        }

        ctx.diagnostics.extend(collisions);
        ctx.ir_mut()?.classes.extend(expanded);
        Ok(())
    }
}

/// Build the class descriptor a container instantiation stands for.
///
/// Every instantiation gets the same lifecycle, an opaque single-pointer
/// layout and the same six methods; only the element spelling varies.
pub fn container_descriptor(
    name: &str,
    instance: &ContainerInstantiation,
    config: &ContainerConfig,
) -> ClassDescriptor {
    let elem = instance.element_native.as_str();
    let native = config.instantiate(elem);

    let mut layout = IndexMap::new();
    layout.insert("_d".to_string(), "void*".to_string());

    let mut methods = IndexMap::new();
    methods.insert(
        "size".to_string(),
        MethodDescriptor::new("return self->size();")
            .returns("int")
            .constant(),
    );
    methods.insert(
        "asSlice".to_string(),
        MethodDescriptor::new(
            "*size = self->size();\n\
             if (*size == 0) {\n    return nullptr;\n}\n\
             return &self->front();",
        )
        .param("size", "int*")
        .returns(format!("{elem} const*"))
        .constant(),
    );
    methods.insert(
        "append".to_string(),
        MethodDescriptor::new("self->push_back(*item);").param("item", format!("{elem} const*")),
    );
    methods.insert(
        "appendList".to_string(),
        MethodDescriptor::new(
            "auto const& items = *other;\n\
             self->reserve(self->size() + items.size());\n\
             for (auto const& item : items) {\n    self->push_back(item);\n}",
        )
        .param("other", format!("{name} const*")),
    );
    methods.insert(
        "appendSlice".to_string(),
        MethodDescriptor::new(
            "self->reserve(self->size() + size);\n\
             for (int i = 0; i < size; ++i) {\n    self->push_back(items[i]);\n}",
        )
        .param("items", format!("{elem} const*"))
        .param("size", "int"),
    );
    methods.insert(
        "reserveAdditional".to_string(),
        MethodDescriptor::new("self->reserve(self->size() + additional);")
            .param("additional", "int"),
    );

    ClassDescriptor {
        dtor: Lifecycle::Generated,
        default_ctor: Lifecycle::Generated,
        copy_ctor: Lifecycle::Generated,
        copy_assign: Lifecycle::Generated,
        movable: true,
        eq: true,
        layout,
        methods,
        overwrite_name: Some(native),
        overwrite_include: Some(config.include.clone()),
        ..ClassDescriptor::default()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use cabind_manifest::Manifest;

    use super::*;
    use crate::pipeline::{Pipeline, phases::NormalizePhase};

    fn expand(src: &str) -> CompilationContext {
        let mut ctx = CompilationContext::new(Manifest::from_str(src).unwrap());
        NormalizePhase.run(&mut ctx).unwrap();
        ExpandPhase.run(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_container_has_six_methods() {
        for elem in ["int32_t", "QString", "double"] {
            let descriptor = container_descriptor(
                "List",
                &ContainerInstantiation::new(elem, "X"),
                &ContainerConfig::default(),
            );
            let names: Vec<_> = descriptor.methods.keys().map(String::as_str).collect();
            assert_eq!(
                names,
                ["size", "asSlice", "append", "appendList", "appendSlice", "reserveAdditional"]
            );
        }
    }

    #[test]
    fn test_container_method_shapes() {
        let d = container_descriptor(
            "IntList",
            &ContainerInstantiation::new("int32_t", "i32"),
            &ContainerConfig::default(),
        );

        let size = &d.methods["size"];
        assert!(size.is_const && size.params.is_empty());
        assert_eq!(size.return_type.as_deref(), Some("int"));

        let as_slice = &d.methods["asSlice"];
        assert!(as_slice.is_const);
        assert_eq!(as_slice.params["size"], "int*");
        assert_eq!(as_slice.return_type.as_deref(), Some("int32_t const*"));

        assert_eq!(d.methods["append"].params["item"], "int32_t const*");
        assert_eq!(d.methods["appendList"].params["other"], "IntList const*");

        let append_slice: Vec<_> = d.methods["appendSlice"].params.iter().collect();
        assert_eq!(append_slice[0], (&"items".to_string(), &"int32_t const*".to_string()));
        assert_eq!(append_slice[1], (&"size".to_string(), &"int".to_string()));

        assert_eq!(d.methods["reserveAdditional"].params["additional"], "int");
    }

    #[test]
    fn test_as_slice_checks_computed_size() {
        let d = container_descriptor(
            "IntList",
            &ContainerInstantiation::new("int32_t", "i32"),
            &ContainerConfig::default(),
        );
        let body = &d.methods["asSlice"].body;

        assert!(body.starts_with("*size = self->size();"));
        assert!(body.contains("if (*size == 0)"));
        assert!(body.contains("return nullptr;"));
        assert!(!body.contains("if (size == 0)"));
    }

    #[test]
    fn test_append_slice_reserves_before_copying() {
        let d = container_descriptor(
            "IntList",
            &ContainerInstantiation::new("int32_t", "i32"),
            &ContainerConfig::default(),
        );
        let body = &d.methods["appendSlice"].body;
        let reserve = body.find("reserve").unwrap();
        let push = body.find("push_back").unwrap();
        assert!(reserve < push);
    }

    #[test]
    fn test_container_lifecycle() {
        let d = container_descriptor(
            "QStringList",
            &ContainerInstantiation::new("QString", "QString"),
            &ContainerConfig {
                template: "QList".into(),
                include: "QList".into(),
            },
        );

        assert_eq!(d.overwrite_name.as_deref(), Some("QList<QString>"));
        assert_eq!(d.overwrite_include.as_deref(), Some("QList"));
        assert!(d.default_ctor.is_generated());
        assert!(d.copy_ctor.is_generated());
        assert!(d.copy_assign.is_generated());
        assert!(d.dtor.is_generated());
        assert!(d.movable && d.eq && !d.ord);
        assert_eq!(d.layout.len(), 1);
        assert_eq!(d.layout["_d"], "void*");
    }

    #[test]
    fn test_expand_appends_after_declared_classes() {
        let ctx = expand(
            r#"
            [classes.QUrl]

            [containers.IntList]
            native = "int32_t"
            foreign = "i32"

            [containers.DoubleList]
            native = "double"
            foreign = "f64"
            "#,
        );
        let ir = ctx.ir().unwrap();

        let names: Vec<_> = ir.classes.iter().map(|c| c.c_name.as_str()).collect();
        assert_eq!(names, ["QUrl", "IntList", "DoubleList"]);

        let int_list = ir.class("IntList").unwrap();
        assert_eq!(int_list.native_name, "std::vector<int32_t>");
        assert_eq!(int_list.include, "vector");
        assert!(int_list.generate_dtor);
        assert_eq!(
            int_list.origin,
            ClassOrigin::Container {
                element_native: "int32_t".into(),
                element_foreign: "i32".into(),
            }
        );
        assert_eq!(ir.containers().count(), 2);
    }

    #[test]
    fn test_expand_reports_collision() {
        let ctx = expand(
            r#"
            [classes.IntList]
            eq = true

            [containers.IntList]
            native = "int32_t"
            foreign = "i32"
            "#,
        );

        assert_eq!(ctx.error_count(), 1);
        let ir = ctx.ir().unwrap();
        assert_eq!(ir.classes.len(), 1);
        assert_eq!(ir.classes[0].origin, ClassOrigin::Declared);
        assert_eq!(
            ctx.diagnostics[0].location.as_deref(),
            Some("containers.IntList")
        );
    }

    #[test]
    fn test_expanded_container_passes_validation() {
        let ctx = Pipeline::new()
            .run(
                Manifest::from_str(
                    r#"
                    [containers.IntList]
                    native = "int32_t"
                    foreign = "i32"
                    "#,
                )
                .unwrap(),
            )
            .unwrap();

        assert!(!ctx.has_errors());
        let int_list = ctx.ir().unwrap().class("IntList").unwrap();
        assert_eq!(int_list.method("appendList").unwrap().params[0].name, "other");
    }
}
