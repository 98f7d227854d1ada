//! Normalize phase - lowers the schema's classes into the binding IR.

use std::path::Path;

use cabind_ir::{BindingIR, BindingMeta, ClassIR, ClassOrigin, MethodIR, ParamIR};
use cabind_manifest::{ClassDescriptor, Manifest, MethodDescriptor};
use eyre::Result;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that resolves every declared class's defaults into [`ClassIR`].
///
/// Defaulting is total: this phase never records diagnostics.
pub struct NormalizePhase;

impl Phase for NormalizePhase {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn description(&self) -> &'static str {
        "Resolve class defaults into the binding IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = normalize(&ctx.manifest);
        tracing::debug!(classes = ir.classes.len(), "normalized declared classes");
        ctx.ir = Some(ir);
        Ok(())
    }
}

/// Lower the declared classes of a manifest. Containers are left to [`ExpandPhase`].
///
/// [`ExpandPhase`]: super::ExpandPhase
pub fn normalize(manifest: &Manifest) -> BindingIR {
    BindingIR {
        meta: BindingMeta {
            prefix: manifest.prefix.clone(),
            prelude: manifest.prelude.clone(),
            includes: manifest.includes.clone(),
            header: manifest.output.header.clone(),
            raw_module: module_name(&manifest.output.raw),
        },
        classes: manifest
            .classes
            .iter()
            .map(|(name, class)| normalize_class(name, class, ClassOrigin::Declared))
            .collect(),
    }
}

/// `ffi.rs` → `ffi`
fn module_name(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}

/// Whether a native destructor function is emitted for a class.
///
/// Managed objects are destroyed by their owner; trivial destructors need no call.
pub fn generate_dtor(class: &ClassDescriptor) -> bool {
    !class.managed_object && !class.dtor.is_trivial()
}

/// Lower one class descriptor.
pub fn normalize_class(name: &str, class: &ClassDescriptor, origin: ClassOrigin) -> ClassIR {
    ClassIR {
        c_name: name.to_string(),
        native_name: class.overwrite_name.clone().unwrap_or_else(|| name.to_string()),
        include: class
            .overwrite_include
            .clone()
            .unwrap_or_else(|| name.to_string()),
        origin,
        dtor: class.dtor,
        generate_dtor: generate_dtor(class),
        default_ctor: class.default_ctor,
        copy_ctor: class.copy_ctor,
        copy_assign: class.copy_assign,
        movable: class.movable,
        eq: class.eq,
        ord: class.ord,
        layout: class
            .layout
            .iter()
            .map(|(field, ty)| (field.clone(), ty.clone()))
            .collect(),
        methods: class
            .methods
            .iter()
            .map(|(name, method)| normalize_method(name, method))
            .collect(),
        managed_object: class.managed_object,
        managed_object_default_ctor: class.managed_object_default_ctor,
    }
}

fn normalize_method(name: &str, method: &MethodDescriptor) -> MethodIR {
    MethodIR {
        name: name.to_string(),
        params: method
            .params
            .iter()
            .map(|(name, ty)| ParamIR::new(name, ty))
            .collect(),
        return_type: method
            .return_type
            .clone()
            .filter(|ty| ty.trim() != "void"),
        body: method.body.clone(),
        is_const: method.is_const,
        is_static: method.is_static,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use cabind_manifest::Lifecycle;

    use super::*;

    fn manifest(src: &str) -> Manifest {
        Manifest::from_str(src).unwrap()
    }

    #[test]
    fn test_managed_object_never_generates_dtor() {
        for dtor in ["true", "false", "\"trivial\""] {
            let m = manifest(&format!(
                "[classes.QObject]\nmanaged-object = true\ndtor = {dtor}\n"
            ));
            let ir = normalize(&m);
            assert!(!ir.classes[0].generate_dtor, "dtor = {dtor}");
        }
    }

    #[test]
    fn test_generate_dtor_policy() {
        let m = manifest(
            r#"
            [classes.A]
            [classes.B]
            dtor = false
            [classes.C]
            dtor = "trivial"
            "#,
        );
        let ir = normalize(&m);

        assert!(ir.classes[0].generate_dtor);
        assert!(ir.classes[1].generate_dtor);
        assert!(!ir.classes[2].generate_dtor);
        assert_eq!(ir.classes[2].dtor, Lifecycle::Trivial);
    }

    #[test]
    fn test_overwrites_and_meta() {
        let m = manifest(
            r##"
            prefix = "qffi"
            prelude = "#include <cstdint>"
            includes = ["QtCore"]

            [output]
            header = "qffi.hpp"
            raw = "qffi.rs"

            [classes.QStringList]
            overwrite-name = "QList<QString>"
            overwrite-include = "QList"
            "##,
        );
        let ir = normalize(&m);

        assert_eq!(ir.meta.prefix, "qffi");
        assert_eq!(ir.meta.prelude.as_deref(), Some("#include <cstdint>"));
        assert_eq!(ir.meta.includes, ["QtCore"]);
        assert_eq!(ir.meta.header, "qffi.hpp");
        assert_eq!(ir.meta.raw_module, "qffi");

        let class = &ir.classes[0];
        assert_eq!(class.c_name, "QStringList");
        assert_eq!(class.native_name, "QList<QString>");
        assert_eq!(class.include, "QList");
        assert!(class.is_renamed());
        assert_eq!(class.origin, ClassOrigin::Declared);
    }

    #[test]
    fn test_methods_keep_order_and_void_is_none() {
        let m = manifest(
            r#"
            [classes.QString.methods.fromUtf8]
            static = true
            params = { data = "char const*", size = "int" }
            return = "void"
            body = "new (out) QString(QString::fromUtf8(data, size));"

            [classes.QString.methods.size]
            const = true
            return = "int"
            body = "return self->size();"
            "#,
        );
        let ir = normalize(&m);
        let class = &ir.classes[0];

        let from_utf8 = &class.methods[0];
        assert_eq!(from_utf8.name, "fromUtf8");
        assert!(from_utf8.is_static);
        assert_eq!(from_utf8.return_type, None);
        let params: Vec<_> = from_utf8.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(params, ["data", "size"]);

        let size = class.method("size").unwrap();
        assert!(size.is_const);
        assert_eq!(size.return_type.as_deref(), Some("int"));
    }
}
