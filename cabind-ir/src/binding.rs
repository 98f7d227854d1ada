//! Normalized binding model.

use serde::Serialize;

use crate::Lifecycle;

/// The emission-ready model: every default resolved, every container expanded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BindingIR {
    /// Settings shared by all artifacts.
    pub meta: BindingMeta,
    /// Classes in emission order: declared classes first, then containers.
    pub classes: Vec<ClassIR>,
}

impl BindingIR {
    /// Look up a class by its C name.
    pub fn class(&self, name: &str) -> Option<&ClassIR> {
        self.classes.iter().find(|c| c.c_name == name)
    }

    /// Iterate over classes expanded from container instantiations.
    pub fn containers(&self) -> impl Iterator<Item = &ClassIR> {
        self.classes
            .iter()
            .filter(|c| matches!(c.origin, ClassOrigin::Container { .. }))
    }
}

/// Settings shared by all artifacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BindingMeta {
    /// Symbol prefix for every C-ABI function.
    pub prefix: String,
    /// Text copied verbatim to the top of the native header.
    pub prelude: Option<String>,
    /// Extra native includes.
    pub includes: Vec<String>,
    /// File name of the native header, as included by the implementation.
    pub header: String,
    /// Module name of the raw bindings, as imported by the foreign glue.
    pub raw_module: String,
}

/// Where a class came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClassOrigin {
    /// Written in the schema.
    Declared,
    /// Expanded from a container instantiation.
    Container {
        element_native: String,
        element_foreign: String,
    },
}

/// A normalized class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassIR {
    /// Name used in C symbols and foreign declarations.
    pub c_name: String,
    /// Native spelling (e.g. `QList<QString>`).
    pub native_name: String,
    /// Native include providing the type.
    pub include: String,
    pub origin: ClassOrigin,

    /// Declared destructor policy.
    pub dtor: Lifecycle,
    /// Whether a native destructor function is emitted.
    pub generate_dtor: bool,
    pub default_ctor: Lifecycle,
    pub copy_ctor: Lifecycle,
    pub copy_assign: Lifecycle,
    pub movable: bool,
    pub eq: bool,
    pub ord: bool,

    /// Public fields in declaration order as `(name, native type)`.
    pub layout: Vec<(String, String)>,
    pub methods: Vec<MethodIR>,

    pub managed_object: bool,
    pub managed_object_default_ctor: bool,
}

impl ClassIR {
    /// Returns true if the class declares a layout struct.
    pub fn has_layout(&self) -> bool {
        !self.layout.is_empty()
    }

    /// Returns true if the native spelling differs from the C name.
    pub fn is_renamed(&self) -> bool {
        self.native_name != self.c_name
    }

    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodIR> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// A normalized method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodIR {
    pub name: String,
    /// Parameters in declaration order.
    pub params: Vec<ParamIR>,
    /// Native return type; `None` for nothing returned.
    pub return_type: Option<String>,
    /// Native body, never interpreted.
    pub body: String,
    pub is_const: bool,
    pub is_static: bool,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamIR {
    pub name: String,
    pub ty: String,
}

impl ParamIR {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
