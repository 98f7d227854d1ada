//! Manifest types and parsing for cabind.toml files.

mod file;
mod parse;
mod validate;

pub use file::ManifestFile;
use indexmap::IndexMap;
use serde::Deserialize;
pub use validate::ParseContext;

use crate::{ClassDescriptor, ContainerInstantiation};

/// Root of a binding schema.
///
/// Owns every descriptor. Descriptors refer to each other only by name,
/// resolved against [`Manifest::classes`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
    /// Prefix for every emitted C-ABI symbol (`{prefix}_{Class}_{op}`)
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Text copied verbatim to the top of the native header
    pub prelude: Option<String>,

    /// Extra native includes, emitted after the per-class ones
    #[serde(default)]
    pub includes: Vec<String>,

    /// Bridged classes, in declaration order
    #[serde(default)]
    pub classes: IndexMap<String, ClassDescriptor>,

    /// Container instantiations, in declaration order
    #[serde(default)]
    pub containers: IndexMap<String, ContainerInstantiation>,

    /// Native generic used for every container instantiation
    #[serde(default)]
    pub container: ContainerConfig,

    /// Artifact file names
    #[serde(default)]
    pub output: OutputConfig,

    /// Raw binding translator settings
    #[serde(default)]
    pub raw: RawConfig,
}

fn default_prefix() -> String {
    "ffi".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            prelude: None,
            includes: Vec::new(),
            classes: IndexMap::new(),
            containers: IndexMap::new(),
            container: ContainerConfig::default(),
            output: OutputConfig::default(),
            raw: RawConfig::default(),
        }
    }
}

impl Manifest {
    /// Look up a declared class by name.
    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }
}

/// The native dynamic-array template containers are instantiated from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ContainerConfig {
    /// Template name, e.g. `std::vector` or `QList`
    #[serde(default = "default_container_template")]
    pub template: String,

    /// Header providing the template
    #[serde(default = "default_container_include")]
    pub include: String,
}

fn default_container_template() -> String {
    "std::vector".to_string()
}

fn default_container_include() -> String {
    "vector".to_string()
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            template: default_container_template(),
            include: default_container_include(),
        }
    }
}

impl ContainerConfig {
    /// Native spelling of the container over `element`.
    pub fn instantiate(&self, element: &str) -> String {
        format!("{}<{}>", self.template, element)
    }
}

/// File names of the emitted artifacts, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_glue")]
    pub glue: String,

    #[serde(default = "default_containers")]
    pub containers: String,

    #[serde(default = "default_raw")]
    pub raw: String,
}

fn default_header() -> String {
    "ffi.hpp".to_string()
}

fn default_source() -> String {
    "ffi.cpp".to_string()
}

fn default_glue() -> String {
    "ffi_impl.rs".to_string()
}

fn default_containers() -> String {
    "list.rs".to_string()
}

fn default_raw() -> String {
    "ffi.rs".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            source: default_source(),
            glue: default_glue(),
            containers: default_containers(),
            raw: default_raw(),
        }
    }
}

/// Settings for the external header-to-foreign-declaration translator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    /// Whether raw bindings are produced at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Executable to invoke
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Minimum foreign-language compatibility level
    #[serde(default = "default_rust_target")]
    pub rust_target: String,

    /// Arguments forwarded to the header parser
    #[serde(default = "default_clang_args")]
    pub clang_args: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_tool() -> String {
    "bindgen".to_string()
}

fn default_rust_target() -> String {
    "1.20".to_string()
}

fn default_clang_args() -> Vec<String> {
    vec!["-DBINDGEN".to_string()]
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tool: default_tool(),
            rust_target: default_rust_target(),
            clang_args: default_clang_args(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Lifecycle;

    #[test]
    fn test_minimal_manifest() {
        let manifest = Manifest::from_str("").unwrap();

        assert_eq!(manifest.prefix, "ffi");
        assert!(manifest.classes.is_empty());
        assert!(manifest.containers.is_empty());
        assert_eq!(manifest.output, OutputConfig::default());
        assert_eq!(manifest.container.instantiate("int"), "std::vector<int>");
        assert!(manifest.raw.enabled);
    }

    #[test]
    fn test_point_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [classes.Point]
            dtor = "trivial"
            eq = true
            layout = { x = "int", y = "int" }
            "#,
        )
        .unwrap();

        let point = manifest.class("Point").unwrap();
        assert_eq!(point.dtor, Lifecycle::Trivial);
        assert!(point.eq);
        let fields: Vec<_> = point.layout.iter().collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], (&"x".to_string(), &"int".to_string()));
        assert!(point.methods.is_empty());
    }

    #[test]
    fn test_classes_keep_declaration_order() {
        let manifest = Manifest::from_str(
            r#"
            [classes.Zeta]
            [classes.Alpha]
            [classes.Mid]
            "#,
        )
        .unwrap();

        let names: Vec<&str> = manifest.classes.keys().map(String::as_str).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_full_configuration() {
        let manifest = Manifest::from_str(
            r#"
            prefix = "qffi"
            prelude = "// prelude"
            includes = ["QDebug"]

            [container]
            template = "QList"
            include = "QList"

            [output]
            header = "qffi.hpp"

            [raw]
            tool = "/usr/bin/bindgen"
            rust-target = "1.33"

            [containers.QStringList]
            native = "QString"
            foreign = "QString"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.prefix, "qffi");
        assert_eq!(manifest.prelude.as_deref(), Some("// prelude"));
        assert_eq!(manifest.includes, ["QDebug"]);
        assert_eq!(manifest.container.instantiate("QString"), "QList<QString>");
        assert_eq!(manifest.output.header, "qffi.hpp");
        assert_eq!(manifest.output.source, "ffi.cpp");
        assert_eq!(manifest.raw.tool, "/usr/bin/bindgen");
        assert_eq!(manifest.raw.rust_target, "1.33");
        assert_eq!(manifest.raw.clang_args, ["-DBINDGEN"]);
        assert_eq!(
            manifest.containers["QStringList"].element_native,
            "QString"
        );
    }

    #[test]
    fn test_unknown_root_field_rejected() {
        assert!(Manifest::from_str("qlists = {}").is_err());
    }
}
