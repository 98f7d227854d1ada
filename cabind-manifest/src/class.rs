use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

/// Generation policy for one lifecycle operation.
///
/// In the schema this is spelled `true`, `false` or `"trivial"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// Not emitted at all.
    #[default]
    Suppressed,
    /// Emitted as a C-ABI function wrapping the native operation.
    Generated,
    /// Bit-copyable / no-op; no native function is emitted.
    Trivial,
}

impl Lifecycle {
    /// Returns true unless the operation is suppressed.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Lifecycle::Suppressed)
    }

    /// Returns true if a native function must be emitted.
    pub fn is_generated(&self) -> bool {
        matches!(self, Lifecycle::Generated)
    }

    /// Returns true if the operation is marked trivial.
    pub fn is_trivial(&self) -> bool {
        matches!(self, Lifecycle::Trivial)
    }

    /// The schema spelling of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Suppressed => "false",
            Lifecycle::Generated => "true",
            Lifecycle::Trivial => "trivial",
        }
    }

    fn generated() -> Self {
        Lifecycle::Generated
    }
}

impl From<bool> for Lifecycle {
    fn from(value: bool) -> Self {
        if value {
            Lifecycle::Generated
        } else {
            Lifecycle::Suppressed
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either a boolean or the string `"trivial"`.
struct LifecycleVisitor;

impl Visitor<'_> for LifecycleVisitor {
    type Value = Lifecycle;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("true, false or \"trivial\"")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.into())
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match value {
            "trivial" => Ok(Lifecycle::Trivial),
            "true" => Ok(Lifecycle::Generated),
            "false" => Ok(Lifecycle::Suppressed),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Lifecycle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LifecycleVisitor)
    }
}

/// One bridged native class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ClassDescriptor {
    /// Destructor policy
    #[serde(default = "Lifecycle::generated")]
    pub dtor: Lifecycle,

    /// Default (no-argument) constructor policy
    #[serde(default)]
    pub default_ctor: Lifecycle,

    /// Copy constructor policy
    #[serde(default)]
    pub copy_ctor: Lifecycle,

    /// Copy assignment policy
    #[serde(default)]
    pub copy_assign: Lifecycle,

    #[serde(default)]
    pub movable: bool,

    #[serde(default)]
    pub eq: bool,

    #[serde(default)]
    pub ord: bool,

    /// Public field layout, in declaration order.
    ///
    /// Describes the foreign-visible shape of layout-compatible types; an
    /// opaque handle is a single `void*` field.
    #[serde(default)]
    pub layout: IndexMap<String, String>,

    /// Methods, in declaration order
    #[serde(default)]
    pub methods: IndexMap<String, MethodDescriptor>,

    /// Lifetime is owned by the host object tree, never by the bridge
    #[serde(default)]
    pub managed_object: bool,

    /// Managed object additionally exposes a no-argument constructor
    #[serde(default)]
    pub managed_object_default_ctor: bool,

    /// Native spelling, when it differs from the schema key (e.g. `QList<int>`)
    pub overwrite_name: Option<String>,

    /// Native include, when it differs from the schema key
    pub overwrite_include: Option<String>,
}

impl Default for ClassDescriptor {
    fn default() -> Self {
        Self {
            dtor: Lifecycle::Generated,
            default_ctor: Lifecycle::Suppressed,
            copy_ctor: Lifecycle::Suppressed,
            copy_assign: Lifecycle::Suppressed,
            movable: false,
            eq: false,
            ord: false,
            layout: IndexMap::new(),
            methods: IndexMap::new(),
            managed_object: false,
            managed_object_default_ctor: false,
            overwrite_name: None,
            overwrite_include: None,
        }
    }
}

/// One callable member or static function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDescriptor {
    /// Parameters; declaration order fixes the emitted signature
    #[serde(default)]
    pub params: IndexMap<String, String>,

    /// Native return type; absent means nothing is returned
    #[serde(rename = "return")]
    pub return_type: Option<String>,

    /// Native code pasted verbatim into the implementation
    pub body: String,

    #[serde(default, rename = "const")]
    pub is_const: bool,

    #[serde(default, rename = "static")]
    pub is_static: bool,
}

impl MethodDescriptor {
    /// Create a mutable member method with the given body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            params: IndexMap::new(),
            return_type: None,
            body: body.into(),
            is_const: false,
            is_static: false,
        }
    }

    /// Add a parameter after the existing ones.
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.insert(name.into(), ty.into());
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Mark the method as not mutating its receiver.
    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }
}
