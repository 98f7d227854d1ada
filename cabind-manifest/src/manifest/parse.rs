//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

/// Filename used in diagnostics when none is given.
const DEFAULT_FILENAME: &str = "cabind.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a schema file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a schema from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Check every name the generated code will spell as an identifier.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.validate_name(&manifest.prefix, "prefix")?;

    for (name, class) in &manifest.classes {
        ctx.validate_name(name, "class")?;

        let class_ctx = ctx.push(name);
        for field in class.layout.keys() {
            class_ctx.validate_name(field, "layout field")?;
        }
        for (method_name, method) in &class.methods {
            class_ctx.validate_identifier(method_name, "method")?;

            let method_ctx = class_ctx.push(method_name);
            for param in method.params.keys() {
                method_ctx.validate_name(param, "parameter")?;
            }
        }
    }

    for name in manifest.containers.keys() {
        ctx.validate_name(name, "container")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_has_span() {
        let err = parse_manifest("[classes.Point\n", "test.toml").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_class_name() {
        let err = parse_manifest(
            r#"
            [classes."my-class"]
            "#,
            "test.toml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_keyword_parameter_name() {
        let err = parse_manifest(
            r#"
            [classes.Widget.methods.resize]
            params = { delete = "int" }
            body = "self->resize(delete);"
            "#,
            "test.toml",
        )
        .unwrap_err();

        match *err {
            Error::ReservedKeyword { name, context, span, .. } => {
                assert_eq!(name, "delete");
                assert_eq!(context, "parameter in 'Widget.resize'");
                assert!(span.is_some());
            }
            other => panic!("expected reserved keyword error, got {other:?}"),
        }
    }

    #[test]
    fn test_keyword_method_name_is_accepted() {
        let manifest = parse_manifest(
            r#"
            [classes.Widget.methods.delete]
            body = "delete self;"
            "#,
            "test.toml",
        )
        .unwrap();

        assert!(manifest.classes["Widget"].methods.contains_key("delete"));
    }

    #[test]
    fn test_invalid_method_name() {
        let err = parse_manifest(
            r#"
            [classes.Widget.methods."set-size"]
            body = ""
            "#,
            "test.toml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_invalid_parameter_name() {
        let err = parse_manifest(
            r#"
            [classes.Widget.methods.resize]
            params = { "new size" = "int" }
            body = "self->resize(size);"
            "#,
            "test.toml",
        )
        .unwrap_err();

        match *err {
            Error::InvalidIdentifier { context, .. } => {
                assert_eq!(context, "parameter in 'Widget.resize'");
            }
            other => panic!("expected invalid identifier error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_body_is_parse_error() {
        let err = parse_manifest(
            r#"
            [classes.Widget.methods.size]
            return = "int"
            "#,
            "test.toml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_container_name() {
        let err = parse_manifest(
            r#"
            [containers."List<int>"]
            native = "int"
            foreign = "i32"
            "#,
            "test.toml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/nonexistent/cabind.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
