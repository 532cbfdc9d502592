//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its error type and the token
//! matching primitives the grammar in `declarations` is written with.
//!
//! # Error latch
//!
//! The parser records at most one error. Once a required match fails (or the
//! lexer fails) the parser is *broken*: every later `advance`/`match_*` call
//! returns a failure without touching the lexer or replacing the recorded
//! error. Grammar code can therefore run a straight sequence of matches and
//! stop at its first convenient check; the error that surfaces is always the
//! first one.

use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use log::debug;
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{line}: unexpected end of input")]
    UnexpectedEndOfInput { line: usize },

    #[error("{line}: {message}")]
    Syntax { line: usize, message: String },
}

impl ParseError {
    /// Line at which the failure was detected
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedEndOfInput { line } | ParseError::Syntax { line, .. } => *line,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::UnexpectedEndOfInput { line } => ParseError::UnexpectedEndOfInput { line },
        }
    }
}

/// Single-token-lookahead parser for `.enum` documents
pub struct Parser<I: Iterator<Item = char>> {
    lexer: Lexer<I>,
    current: Token,
    error: Option<ParseError>,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Create a parser and read its first token.
    pub fn new(lexer: Lexer<I>) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::eof(),
            error: None,
        };
        parser.advance();
        parser
    }

    // ===== Helper methods =====

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn line(&self) -> usize {
        self.lexer.line()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn is_broken(&self) -> bool {
        self.error.is_some()
    }

    /// End of input reached, or broken
    pub fn is_done(&self) -> bool {
        self.current.is_eof() || self.is_broken()
    }

    /// Record `err` unless an earlier error is already latched.
    pub fn set_error(&mut self, err: ParseError) {
        if self.error.is_none() {
            debug!("parse failed: {}", err);
            self.error = Some(err);
        }
    }

    /// Latch a syntax error at the current line.
    pub fn fail(&mut self, message: impl Into<String>) {
        let err = ParseError::Syntax {
            line: self.line(),
            message: message.into(),
        };
        self.set_error(err);
    }

    pub fn advance(&mut self) {
        if self.is_broken() {
            return;
        }
        match self.lexer.next_token() {
            Ok(token) => self.current = token,
            Err(err) => {
                self.current = Token::eof();
                self.set_error(err.into());
            }
        }
    }

    /// Consume the current token if it is `kind`, returning its lexeme.
    pub fn match_kind(&mut self, kind: TokenKind) -> Option<String> {
        if self.is_broken() || self.current.kind != kind {
            return None;
        }
        let lexeme = std::mem::take(&mut self.current.lexeme);
        self.advance();
        Some(lexeme)
    }

    /// Consume the current token if its kind is one of `kinds`.
    pub fn match_one_of(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        if self.is_broken() {
            return None;
        }
        let kind = self.current.kind;
        if !kinds.contains(&kind) {
            return None;
        }
        self.advance();
        Some(kind)
    }

    /// Like [`match_kind`](Self::match_kind), but a mismatch breaks the parser.
    pub fn must_match(&mut self, kind: TokenKind) -> Option<String> {
        if self.is_broken() {
            return None;
        }
        let matched = self.match_kind(kind);
        if matched.is_none() {
            self.expected(kind);
        }
        matched
    }

    fn expected(&mut self, kind: TokenKind) {
        self.expected_one_of(&kind.to_string());
    }

    /// Latch "expected `what`, got <current token>".
    pub(crate) fn expected_one_of(&mut self, what: &str) {
        let message = if self.current.is_eof() {
            format!("expected {}, got {}", what, self.current.kind)
        } else {
            format!(
                "expected {}, got {} {:?}",
                what, self.current.kind, self.current.lexeme
            )
        };
        self.fail(message);
    }

    /// Hand back `value`, or the latched error if there is one.
    pub fn finish<T>(self, value: T) -> Result<T, ParseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(source: &str) -> Parser<std::str::Chars<'_>> {
        Parser::new(Lexer::new(source))
    }

    #[test]
    fn test_match_consumes_on_success_only() {
        let mut p = parser("package foo");
        assert_eq!(p.match_kind(TokenKind::Type), None);
        assert_eq!(p.current().kind, TokenKind::Package);
        assert_eq!(p.match_kind(TokenKind::Package).as_deref(), Some("package"));
        assert_eq!(p.match_kind(TokenKind::Ident).as_deref(), Some("foo"));
        assert!(p.is_done());
        assert!(!p.is_broken());
    }

    #[test]
    fn test_must_match_latches_first_error() {
        let mut p = parser("type\nColor");
        assert!(p.must_match(TokenKind::Package).is_none());
        let first = p.error().cloned().unwrap();
        assert_eq!(
            first,
            ParseError::Syntax {
                line: 1,
                message: "expected 'package', got 'type' \"type\"".to_string(),
            }
        );

        // Everything after the latch is a no-op.
        assert!(p.must_match(TokenKind::Ident).is_none());
        assert!(p.match_kind(TokenKind::Type).is_none());
        assert!(p.match_one_of(&[TokenKind::Type]).is_none());
        p.fail("second failure");
        p.advance();
        assert_eq!(p.current().kind, TokenKind::Type);
        assert_eq!(p.line(), 1);
        assert_eq!(p.finish(()), Err(first));
    }

    #[test]
    fn test_lexer_error_is_latched() {
        let mut p = parser("package /* never closed");
        assert!(p.must_match(TokenKind::Package).is_some());
        assert!(p.is_broken());
        assert!(p.is_done());
        assert_eq!(
            p.finish(()),
            Err(ParseError::UnexpectedEndOfInput { line: 1 })
        );
    }

    #[test]
    fn test_match_one_of() {
        let mut p = parser("int8 x");
        let kinds = [TokenKind::Ident, TokenKind::Other];
        assert_eq!(p.match_one_of(&kinds), None);
        let kind = p.match_one_of(&crate::parser::lexer::INT_TYPE_KINDS);
        assert!(matches!(kind, Some(TokenKind::IntType(_))));
        assert_eq!(p.match_one_of(&kinds), Some(TokenKind::Ident));
    }

    #[test]
    fn test_expected_at_end_of_input() {
        let mut p = parser("");
        assert!(p.must_match(TokenKind::Package).is_none());
        assert_eq!(
            p.error().map(|e| e.to_string()),
            Some("1: expected 'package', got end of input".to_string())
        );
    }
}
