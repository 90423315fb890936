//! Indentation-aware text accumulation.
//!
//! All emitters write into a single [`CodeBuilder`], which owns the output
//! buffer and the current indentation level. Generation is single-threaded
//! and synchronous, so there is no locking; the buffer is written out once
//! at the end.

/// One indentation unit in generated TypeScript.
pub const INDENT: &str = "  ";

/// An owned text buffer with indentation state.
///
/// ## Examples
///
/// ```
/// use quill_gen::builder::CodeBuilder;
///
/// let mut b = CodeBuilder::new();
/// b.line("function hello() {");
/// b.indent();
/// b.line("return 1");
/// b.dedent();
/// b.line("}");
///
/// assert_eq!(b.finish(), "function hello() {\n  return 1\n}\n");
/// ```
#[derive(Debug, Default)]
pub struct CodeBuilder {
    buf: String,
    indent: usize,
}

impl CodeBuilder {
    /// Creates an empty builder at indentation level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line at the current indentation level.
    ///
    /// An empty string produces a blank line with no trailing spaces.
    pub fn line(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.indent {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(line);
        }
        self.buf.push('\n');
    }

    /// Appends several lines at the current indentation level.
    pub fn lines(&mut self, lines: &[&str]) {
        for line in lines {
            self.line(line);
        }
    }

    /// Appends a blank line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends text verbatim, without indentation or a trailing newline.
    ///
    /// Used for pre-indented multi-line fragments such as interface bodies.
    pub fn raw(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Increases the indentation level by one unit.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decreases the indentation level by one unit.
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Returns the current indentation level in units.
    pub fn level(&self) -> usize {
        self.indent
    }

    /// Consumes the builder and returns the accumulated text.
    pub fn finish(self) -> String {
        self.buf
    }
}
