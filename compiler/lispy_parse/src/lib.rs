//! Lispy Parse - recursive descent parser for prefix arithmetic.
//!
//! # Grammar
//!
//! ```text
//! root     := '(' operator expr+ ')' EOF
//!           | operator expr+ EOF
//! expr     := number | '(' operator expr+ ')'
//! ```
//!
//! Both root forms produce the same child layout (see [`lispy_ir::ParseNode`]):
//! the bare parenthesized form uses its own parentheses as delimiters, the
//! polish form gets zero-width anchors at the start and end of input.
//!
//! Text that does not match the grammar is rejected with a [`ParseError`];
//! it never reaches the evaluator.

mod error;

use lispy_ir::{NodeKind, ParseNode, Span};
use lispy_lexer::{lex, Token, TokenKind};
use lispy_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

pub use error::ParseError;

/// Parse one input line into a tree rooted at a `NodeKind::Root` node.
pub fn parse(source: &str) -> Result<ParseNode, ParseError> {
    let end = u32::try_from(source.len())
        .map_err(|_| ParseError::SourceTooLarge { len: source.len() })?;
    let tokens = lex(source)?;
    debug!(tokens = tokens.len(), "parse");
    let tree = Parser::new(tokens, end).parse_root()?;
    debug!(nodes = tree.node_count(), "parsed");
    Ok(tree)
}

struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    /// Byte offset of end of input.
    end: u32,
}

impl<'src> Parser<'src> {
    fn new(tokens: Vec<Token<'src>>, end: u32) -> Self {
        Parser {
            tokens,
            pos: 0,
            end,
        }
    }

    fn current(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn bump(&mut self) -> Option<Token<'src>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    /// Consume a token of `kind` or report what was found instead.
    fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token<'src>, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.error(expected)),
        }
    }

    fn error(&self, expected: &'static str) -> ParseError {
        match self.current() {
            Some(token) => ParseError::UnexpectedToken {
                found: describe(token),
                expected,
                span: token.span,
            },
            None => ParseError::UnexpectedEof {
                expected,
                span: Span::point(self.end),
            },
        }
    }

    fn parse_root(mut self) -> Result<ParseNode, ParseError> {
        let mut children = Vec::new();

        if let Some(open) = self.current().filter(|t| t.kind == TokenKind::LParen) {
            trace!("parse_root -> parenthesized");
            self.pos += 1;
            children.push(ParseNode::leaf(NodeKind::Open, open.text, open.span));
            self.parse_body(&mut children)?;
            let close = self.expect(TokenKind::RParen, "`)`")?;
            self.expect_eof()?;
            children.push(ParseNode::leaf(NodeKind::Close, close.text, close.span));
        } else {
            trace!("parse_root -> polish");
            children.push(ParseNode::leaf(NodeKind::Open, "", Span::point(0)));
            self.parse_body(&mut children)?;
            self.expect_eof()?;
            children.push(ParseNode::leaf(NodeKind::Close, "", Span::point(self.end)));
        }

        Ok(ParseNode::interior(NodeKind::Root, children))
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        match self.current() {
            None => Ok(()),
            Some(_) => Err(self.error("end of input")),
        }
    }

    /// `operator expr+`, appended to `children`.
    fn parse_body(&mut self, children: &mut Vec<ParseNode>) -> Result<(), ParseError> {
        let op = self.expect(TokenKind::Symbol, "operator")?;
        children.push(ParseNode::leaf(NodeKind::Operator, op.text, op.span));

        let first = children.len();
        while self.check(TokenKind::Number) || self.check(TokenKind::LParen) {
            children.push(self.parse_expr()?);
        }
        if children.len() == first {
            return Err(self.error("operand"));
        }
        Ok(())
    }

    fn parse_expr(&mut self) -> Result<ParseNode, ParseError> {
        ensure_sufficient_stack(|| {
            let Some(token) = self.bump() else {
                return Err(self.error("operand"));
            };
            trace!(pos = self.pos, kind = token.kind.display_name(), "parse_expr");
            match token.kind {
                TokenKind::Number => Ok(ParseNode::leaf(NodeKind::Number, token.text, token.span)),
                TokenKind::LParen => {
                    let mut children =
                        vec![ParseNode::leaf(NodeKind::Open, token.text, token.span)];
                    self.parse_body(&mut children)?;
                    let close = self.expect(TokenKind::RParen, "`)`")?;
                    children.push(ParseNode::leaf(NodeKind::Close, close.text, close.span));
                    Ok(ParseNode::interior(NodeKind::Expr, children))
                }
                TokenKind::RParen | TokenKind::Symbol => {
                    self.pos -= 1;
                    Err(self.error("operand"))
                }
            }
        })
    }
}

/// Describe a token for an error message, e.g. ``number `12` ``.
fn describe(token: Token<'_>) -> String {
    match token.kind {
        TokenKind::LParen | TokenKind::RParen => token.kind.display_name().to_string(),
        TokenKind::Number | TokenKind::Symbol => {
            format!("{} `{}`", token.kind.display_name(), token.text)
        }
    }
}
