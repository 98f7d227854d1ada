//! Line-oriented writer for generated sources.

use super::Indent;

/// Accumulates indented lines.
///
/// The consuming methods (`line`, `block_with_close`, ...) chain; the
/// `push_*` twins take `&mut self` for renderers that loop over classes.
///
/// # Example (Consuming API)
///
/// ```
/// use cabind_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::cpp()
///     .line("extern \"C\" {")
///     .indent()
///     .line("void ffi_Point_init(Point* self);")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "extern \"C\" {\n    void ffi_Point_init(Point* self);\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use cabind_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::rust();
/// builder
///     .push_line("impl Drop for Point {")
///     .push_indent()
///     .push_line("fn drop(&mut self) {}")
///     .push_dedent()
///     .push_line("}");
/// let code = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Rust default).
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Create a new CodeBuilder for native C/C++ sources.
    pub fn cpp() -> Self {
        Self::new(Indent::CPP)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line fragment at the current indentation (mutable).
    ///
    /// Blank lines stay blank; a single trailing newline is ignored.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.strip_suffix('\n').unwrap_or(text).split('\n') {
            if line.trim().is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` line comment (mutable).
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add every line of a multi-line fragment at the current indentation.
    pub fn lines(mut self, text: &str) -> Self {
        self.push_lines(text);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a `//` line comment.
    pub fn comment(mut self, text: &str) -> Self {
        self.push_comment(text);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use cabind_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::rust()
    ///     .block_with_close("fn main() {", "}", |b: CodeBuilder| {
    ///         b.line("println!(\"Hello\");")
    ///     })
    ///     .build();
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
