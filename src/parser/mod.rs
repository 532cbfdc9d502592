//! `.enum` source parser
//!
//! This module transforms enum-definition source text into a [`Document`]:
//! - [`lexer`]: Tokenization (characters → tokens)
//! - [`parse`]: Parser state, error latch and matching primitives
//! - `declarations`: The grammar, as `impl Parser` methods
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! ```text
//! package colors
//!
//! type Color enum uint8 {
//!     Red   `red`
//!     Green
//! }
//! ```
//!
//! A file is one `package` clause followed by any number of enum types. The
//! base type defaults to `int`; an enumerator's tag defaults to its name.
//! `//` and `/* */` comments may appear wherever whitespace may.

pub mod ast;
mod declarations;
pub mod lexer;
pub mod parse;

pub use ast::{Document, EnumDefinition, Enumerator, IntType};
pub use parse::{ParseError, Parser};

use lexer::Lexer;

/// Parse a whole document from a string.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    Parser::new(Lexer::new(source)).parse_document()
}

/// Parse a whole document from any character stream.
pub fn parse_chars<I: Iterator<Item = char>>(chars: I) -> Result<Document, ParseError> {
    Parser::new(Lexer::from_chars(chars)).parse_document()
}
