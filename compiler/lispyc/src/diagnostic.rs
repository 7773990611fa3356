//! Parse error reporting with `ariadne`.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use lispy_parse::ParseError;

/// Render a parse error against the line it came from.
///
/// The result ends with a newline and is meant for stderr.
pub fn render_parse_error(source: &str, err: &ParseError, color: bool) -> String {
    // Trailing space gives end-of-input errors a column to point at.
    let padded = format!("{source} ");
    let range = char_range(&padded, err);

    let report = Report::build(ReportKind::Error, (), range.start)
        .with_config(Config::default().with_color(color))
        .with_message(err.to_string())
        .with_label(
            Label::new(range)
                .with_message(err.label())
                .with_color(Color::Red),
        )
        .finish();

    let mut buf = Vec::new();
    match report.write(Source::from(padded), &mut buf) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("error: {err}\n"),
    }
}

/// Character range of the error location. `ariadne` counts characters, spans
/// count bytes. Zero-width spans are widened to one character.
fn char_range(padded: &str, err: &ParseError) -> Range<usize> {
    let Some(span) = err.span() else {
        return 0..1;
    };
    let to_chars = |offset: usize| {
        padded
            .get(..offset)
            .map_or(0, |prefix| prefix.chars().count())
    };
    let bytes = span.to_range();
    let start = to_chars(bytes.start);
    if span.is_empty() {
        return start..start + 1;
    }
    start..to_chars(bytes.end).max(start + 1)
}
