//! Schema loading errors.
//!
//! Every error that can point at the schema text carries it as miette source
//! code, so the CLI renders the offending line with a label.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Boxed so that `Result<Manifest>` stays small.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The schema text errors point into.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

/// Why a name cannot be spelled as a C identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameProblem {
    Keyword,
    Invalid(String),
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    fn named(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Wrap a deserialization failure, keeping toml's span.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    /// Reject `name`, used as a `context` (e.g. "method in 'QString'").
    pub fn name_error(
        &self,
        name: &str,
        context: String,
        problem: NameProblem,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let src = self.named();
        let name = name.to_string();
        Box::new(match problem {
            NameProblem::Keyword => Error::ReservedKeyword {
                src,
                span,
                name,
                context,
            },
            NameProblem::Invalid(reason) => Error::InvalidIdentifier {
                src,
                span,
                name,
                context,
                reason,
            },
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read schema '{}'", path.display())]
    #[diagnostic(help("pass the schema path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed binding schema")]
    #[diagnostic(code(cabind::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("'{name}' is a C++ keyword and cannot name a {context}")]
    #[diagnostic(
        code(cabind::reserved_keyword),
        help("pick another name, e.g. '{name}_'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("keyword")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("'{name}' is not a valid {context} name")]
    #[diagnostic(
        code(cabind::invalid_identifier),
        help("{reason}; generated C symbols need letters, digits and underscores only, not starting with a digit")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a C identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
