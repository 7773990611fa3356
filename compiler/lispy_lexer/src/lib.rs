//! Lexer for Lispy expressions using logos.
//!
//! Produces four kinds of tokens: `(`, `)`, number literals and operator
//! symbols. Whitespace is skipped. Any other character is a [`LexError`].
//!
//! Any run of operator characters is a symbol (`foo`, `min`, `**` all lex).
//! The evaluator decides which operators exist, so an unknown one is an
//! evaluation result rather than a syntax error.

use lispy_ir::Span;
use logos::Logos;
use tracing::trace;

/// Token kinds recognized by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    /// Integer or decimal literal with optional leading minus.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,
    /// Operator symbol. Digits are excluded so `-5` lexes as a number.
    #[regex(r"[a-zA-Z_+\-*/%^<>=!?&|~]+")]
    Symbol,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Number => "number",
            TokenKind::Symbol => "operator",
        }
    }
}

/// A token with its source text and location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

/// Errors produced while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character `{text}`")]
    InvalidCharacter { text: String, span: Span },
    #[error("input is too large to index ({len} bytes)")]
    SourceTooLarge { len: usize },
}

/// Tokenize one input line.
///
/// Stops at the first unrecognized character.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::try_from_range(lexer.span())
            .map_err(|_| LexError::SourceTooLarge { len: source.len() })?;
        let text = lexer.slice();
        match result {
            Ok(kind) => {
                trace!(kind = kind.display_name(), text, %span, "token");
                tokens.push(Token { kind, text, span });
            }
            Err(()) => {
                return Err(LexError::InvalidCharacter {
                    text: text.to_string(),
                    span,
                });
            }
        }
    }

    Ok(tokens)
}
