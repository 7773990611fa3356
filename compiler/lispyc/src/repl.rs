//! Read-evaluate-print loop and one-shot commands.

use std::io::{self, BufRead, Write};

use lispy_eval::{evaluate, render_line, Value};
use lispy_parse::{parse, ParseError};
use tracing::debug;

use crate::config::ReplConfig;
use crate::diagnostic::render_parse_error;

/// Parse and evaluate a single line.
pub fn eval_line(source: &str) -> Result<Value, ParseError> {
    let tree = parse(source)?;
    Ok(evaluate(&tree))
}

/// Counters reported when the loop ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplStats {
    /// Lines that parsed and were evaluated (including ones that produced an
    /// error value).
    pub evaluated: usize,
    /// Lines rejected by the parser.
    pub rejected: usize,
}

/// Run the interactive loop until `input` reaches end of file.
///
/// Results go to `out`, parse diagnostics to `err`. Blank lines are skipped
/// without output. Each line is independent of the ones before it.
pub fn run_repl<R, W, E>(
    config: &ReplConfig,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<ReplStats>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for line in &config.banner {
        writeln!(out, "{line}")?;
    }

    let mut stats = ReplStats::default();
    let mut line = String::new();
    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(stats);
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if source.trim().is_empty() {
            continue;
        }

        match eval_line(source) {
            Ok(value) => {
                stats.evaluated += 1;
                if let Some(kind) = value.as_error() {
                    debug!(%kind, "line evaluated to an error");
                }
                write!(out, "{}", render_line(value))?;
            }
            Err(parse_err) => {
                stats.rejected += 1;
                debug!(error = %parse_err, "rejected line");
                write!(err, "{}", render_parse_error(source, &parse_err, config.color))?;
            }
        }
    }
}

/// Evaluate one expression, writing the result line to `out`.
///
/// Returns `Ok(false)` if the expression did not parse; the diagnostic has
/// then been written to `err`.
pub fn run_eval<W: Write, E: Write>(
    config: &ReplConfig,
    source: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    match eval_line(source) {
        Ok(value) => {
            write!(out, "{}", render_line(value))?;
            Ok(true)
        }
        Err(parse_err) => {
            write!(err, "{}", render_parse_error(source, &parse_err, config.color))?;
            Ok(false)
        }
    }
}

/// Print the parse tree outline of one expression.
pub fn run_parse<W: Write, E: Write>(
    config: &ReplConfig,
    source: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    match parse(source) {
        Ok(tree) => {
            write!(out, "{}", tree.outline())?;
            Ok(true)
        }
        Err(parse_err) => {
            write!(err, "{}", render_parse_error(source, &parse_err, config.color))?;
            Ok(false)
        }
    }
}
