//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use cabind_core::{identifier_error, is_cpp_keyword};
use miette::SourceSpan;

use crate::{
    Error, Result,
    error::{NameProblem, SourceContext},
};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested classes and methods.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "cabind.toml");
/// ctx.validate_name("QString", "class")?;
///
/// let nested = ctx.push("QString").push("fromUtf8");
/// nested.validate_name("data", "parameter")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["QString", "fromUtf8"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "parameter in 'QString.fromUtf8'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name can be emitted as a C identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_cpp_keyword(name) {
            return Err(self.name_error(name, kind, NameProblem::Keyword));
        }
        self.validate_identifier(name, kind)
    }

    /// Validate a name that is only ever spelled inside a longer symbol,
    /// where a keyword is harmless.
    pub fn validate_identifier(&self, name: &str, kind: &str) -> Result<()> {
        match identifier_error(name) {
            Some(reason) => {
                let problem = NameProblem::Invalid(reason.to_string());
                Err(self.name_error(name, kind, problem))
            }
            None => Ok(()),
        }
    }

    fn name_error(&self, name: &str, kind: &str, problem: NameProblem) -> Box<Error> {
        self.source
            .name_error(name, self.context_for(kind), problem, self.find_span(name))
    }
}

/// Find the span of a name in the TOML source.
///
/// Searches for patterns like `.name]`, `.name.`, `{ name =` or a
/// `name =` key at the start of a line.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Table headers: [classes.name] or [classes.name.methods]
    for pattern in [format!(".{}]", name), format!(".{}.", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Quoted table headers: [classes."name"]
    let quoted = format!(".\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 2, name.len())));
    }

    // Inline tables: { name = or , name =
    let inline_patterns = [
        (format!("{{ {} ", name), 2usize),
        (format!("{{ {}=", name), 2usize),
        (format!("{{{}=", name), 1usize),
        (format!(", {} ", name), 2usize),
        (format!(", {}=", name), 2usize),
        (format!("{{ \"{}\"", name), 3usize),
        (format!(", \"{}\"", name), 3usize),
    ];

    for (pattern, skip) in &inline_patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    // Plain keys: `name = ...` on its own line
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(name) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::from((start, name.len())));
            }
        }
        offset += line.len();
    }

    // No fallback - better to have no span than point to wrong location
    None
}
