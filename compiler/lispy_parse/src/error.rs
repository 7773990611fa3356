//! Parse errors.
//!
//! Every variant except `SourceTooLarge` carries the span of the offending
//! token (or a zero-width span at the end of input) so the driver can point
//! at it.

use lispy_ir::Span;
use lispy_lexer::LexError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character `{text}`")]
    InvalidCharacter { text: String, span: Span },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: Span,
    },
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str, span: Span },
    #[error("input is too large to index ({len} bytes)")]
    SourceTooLarge { len: usize },
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::InvalidCharacter { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. } => Some(*span),
            ParseError::SourceTooLarge { .. } => None,
        }
    }

    /// Short label for the primary diagnostic marker.
    pub fn label(&self) -> String {
        match self {
            ParseError::InvalidCharacter { .. } => "not part of any token".to_string(),
            ParseError::UnexpectedToken { expected, .. }
            | ParseError::UnexpectedEof { expected, .. } => format!("expected {expected} here"),
            ParseError::SourceTooLarge { .. } => "input too large".to_string(),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::InvalidCharacter { text, span } => {
                ParseError::InvalidCharacter { text, span }
            }
            LexError::SourceTooLarge { len } => ParseError::SourceTooLarge { len },
        }
    }
}
