//! Rendering of embedded syntax errors as `ariadne` reports.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};
use widl_ir::{ErrorNode, File};

/// Character range of `error` in `source`, clamped to the text.
///
/// Spans are inclusive byte offsets; `ariadne` counts characters.
pub fn char_range(source: &str, error: &ErrorNode) -> Range<usize> {
    let bytes = error.span.to_range();
    let start = floor_char_boundary(source, bytes.start.min(source.len()));
    let end = floor_char_boundary(source, bytes.end.min(source.len())).max(start);
    let to_chars = |byte: usize| source[..byte].chars().count();
    to_chars(start)..to_chars(end)
}

fn floor_char_boundary(source: &str, mut index: usize) -> usize {
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Write one report per error in `file`. Returns the number written.
pub fn write_errors(
    out: &mut impl Write,
    name: &str,
    source: &str,
    file: &File,
) -> io::Result<usize> {
    let errors = file.errors();
    for error in &errors {
        let range = char_range(source, error);
        Report::build(ReportKind::Error, name, range.start)
            .with_message(&error.message)
            .with_label(
                Label::new((name, range))
                    .with_message(&error.message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((name, Source::from(source)), &mut *out)?;
    }
    Ok(errors.len())
}
