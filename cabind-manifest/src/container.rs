use serde::Deserialize;

/// A container of a fixed element type, to be materialized as a class.
///
/// ```toml
/// [containers.QStringList]
/// native = "QString"
/// foreign = "QString"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerInstantiation {
    /// Element spelling on the native side
    #[serde(rename = "native")]
    pub element_native: String,

    /// Element spelling on the foreign side
    #[serde(rename = "foreign")]
    pub element_foreign: String,
}

impl ContainerInstantiation {
    pub fn new(element_native: impl Into<String>, element_foreign: impl Into<String>) -> Self {
        Self {
            element_native: element_native.into(),
            element_foreign: element_foreign.into(),
        }
    }
}
