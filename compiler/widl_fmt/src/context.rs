//! Formatting Context
//!
//! Tracks the indentation level and whether the next fragment starts a
//! line, so callers emit text without managing leading spaces.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

#[derive(Default)]
pub struct FormatContext {
    out: String,
    indent_level: usize,
    /// Set once the current line has text.
    mid_line: bool,
}

impl FormatContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `text`, indenting first when it opens a line.
    pub fn emit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.mid_line {
            for _ in 0..self.indent_level * INDENT_WIDTH {
                self.out.push(' ');
            }
            self.mid_line = true;
        }
        self.out.push_str(text);
    }

    pub fn emit_newline(&mut self) {
        self.out.push('\n');
        self.mid_line = false;
    }

    /// Emit `text` followed by a newline.
    pub fn emit_line(&mut self, text: &str) {
        self.emit(text);
        self.emit_newline();
    }

    /// Run `body` one indentation level deeper.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent_level += 1;
        body(self);
        self.indent_level -= 1;
    }

    #[inline]
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Output so far, unfinished line included.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// The formatted text, ending in at most one newline.
    pub fn finalize(mut self) -> String {
        while self.out.ends_with("\n\n") {
            self.out.pop();
        }
        self.out
    }
}
