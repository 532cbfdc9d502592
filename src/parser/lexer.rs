//! Lexer (tokenizer) for `.enum` source text
//!
//! Converts a character stream into a lazy sequence of [`Token`]s consumed one
//! at a time by the parser. Whitespace, `//` line comments and `/* */` block
//! comments are skipped and never surface as tokens.
//!
//! The lexer is an explicit finite-state machine (see [`State`]). One character
//! of lookahead is needed to stop an identifier, or a lone `/`, without
//! consuming the character that follows it; the input is held in a
//! [`Peekable`] so that character is simply left unread.

use log::trace;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

/// The eleven built-in integer types an enum may be based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntType {
    Byte,
    Int,
    Uint,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
}

impl IntType {
    pub const ALL: [IntType; 11] = [
        IntType::Byte,
        IntType::Int,
        IntType::Uint,
        IntType::Int8,
        IntType::Uint8,
        IntType::Int16,
        IntType::Uint16,
        IntType::Int32,
        IntType::Uint32,
        IntType::Int64,
        IntType::Uint64,
    ];

    /// Keyword text, which is also the type name in generated code.
    pub fn as_str(self) -> &'static str {
        match self {
            IntType::Byte => "byte",
            IntType::Int => "int",
            IntType::Uint => "uint",
            IntType::Int8 => "int8",
            IntType::Uint8 => "uint8",
            IntType::Int16 => "int16",
            IntType::Uint16 => "uint16",
            IntType::Int32 => "int32",
            IntType::Uint32 => "uint32",
            IntType::Int64 => "int64",
            IntType::Uint64 => "uint64",
        }
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Ident,
    Eq,     // =
    LBrace, // {
    RBrace, // }
    Tag,    // `...`

    // Keywords
    Package,
    Type,
    Enum,
    IntType(IntType),

    /// Any single character with no other meaning.
    Other,
}

/// The integer-type keyword kinds, in [`IntType::ALL`] order.
pub const INT_TYPE_KINDS: [TokenKind; 11] = [
    TokenKind::IntType(IntType::Byte),
    TokenKind::IntType(IntType::Int),
    TokenKind::IntType(IntType::Uint),
    TokenKind::IntType(IntType::Int8),
    TokenKind::IntType(IntType::Uint8),
    TokenKind::IntType(IntType::Int16),
    TokenKind::IntType(IntType::Uint16),
    TokenKind::IntType(IntType::Int32),
    TokenKind::IntType(IntType::Uint32),
    TokenKind::IntType(IntType::Int64),
    TokenKind::IntType(IntType::Uint64),
];

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Eq => write!(f, "'='"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Tag => write!(f, "tag"),
            TokenKind::Package => write!(f, "'package'"),
            TokenKind::Type => write!(f, "'type'"),
            TokenKind::Enum => write!(f, "'enum'"),
            TokenKind::IntType(t) => write!(f, "'{}'", t),
            TokenKind::Other => write!(f, "character"),
        }
    }
}

/// Reserved words. Consulted only once a whole identifier has been scanned.
static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("package", TokenKind::Package);
    map.insert("type", TokenKind::Type);
    map.insert("enum", TokenKind::Enum);
    for t in IntType::ALL {
        map.insert(t.as_str(), TokenKind::IntType(t));
    }
    map
});

/// Look up `text` in the keyword table.
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// A classified lexical unit.
///
/// `lexeme` holds the identifier text, the tag text without its backticks, or
/// the single character of a punctuation / other token. It is empty for
/// [`TokenKind::Eof`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Classify a scanned identifier as a keyword or a user identifier.
    fn word(text: String) -> Self {
        let kind = keyword(&text).unwrap_or(TokenKind::Ident);
        Self { kind, lexeme: text }
    }
}

/// Lexer error type
///
/// Input ended inside a block comment, a half-opened comment, or a tag
/// literal. All three are reported the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput { line: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedEndOfInput { line } => *line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    MaybeStartComment,
    LineComment,
    BlockComment,
    MaybeEndComment,
    Identifier,
    Tag,
}

fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit()
}

/// Lexer over any character source.
pub struct Lexer<I: Iterator<Item = char>> {
    input: Peekable<I>,
    line: usize,
    finished: bool,
}

impl<'a> Lexer<Chars<'a>> {
    /// Create a new lexer for the given source string.
    pub fn new(source: &'a str) -> Self {
        Self::from_chars(source.chars())
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn from_chars(chars: I) -> Self {
        Self {
            input: chars.peekable(),
            line: 1,
            finished: false,
        }
    }

    /// Current 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next token, or [`TokenKind::Eof`] once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = self.scan()?;
        trace!("line {}: {:?} {:?}", self.line, token.kind, token.lexeme);
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        let mut state = State::Initial;
        let mut text = String::new();

        loop {
            let Some(&ch) = self.input.peek() else {
                return self.end_of_input(state, text);
            };

            // States that may stop before `ch` look at it without consuming.
            match state {
                State::Identifier => {
                    if is_identifier_char(ch) {
                        self.bump();
                        text.push(ch);
                        continue;
                    }
                    return Ok(Token::word(text));
                }
                State::MaybeStartComment => {
                    state = match ch {
                        '/' => State::LineComment,
                        '*' => State::BlockComment,
                        _ => return Ok(Token::new(TokenKind::Other, "/")),
                    };
                    self.bump();
                    continue;
                }
                _ => {}
            }

            self.bump();
            match state {
                State::Initial => match ch {
                    c if is_space(c) => {}
                    '/' => state = State::MaybeStartComment,
                    '=' => return Ok(Token::new(TokenKind::Eq, "=")),
                    '{' => return Ok(Token::new(TokenKind::LBrace, "{")),
                    '}' => return Ok(Token::new(TokenKind::RBrace, "}")),
                    '`' => {
                        state = State::Tag;
                        text.clear();
                    }
                    c if is_identifier_start(c) => {
                        state = State::Identifier;
                        text.push(c);
                    }
                    c => return Ok(Token::new(TokenKind::Other, c.to_string())),
                },
                State::Tag => {
                    if ch == '`' {
                        return Ok(Token::new(TokenKind::Tag, text));
                    }
                    text.push(ch);
                }
                State::LineComment => {
                    if ch == '\n' {
                        state = State::Initial;
                    }
                }
                State::BlockComment => {
                    if ch == '*' {
                        state = State::MaybeEndComment;
                    }
                }
                State::MaybeEndComment => {
                    state = match ch {
                        '/' => State::Initial,
                        '*' => State::MaybeEndComment,
                        _ => State::BlockComment,
                    };
                }
                State::Identifier | State::MaybeStartComment => unreachable!(),
            }
        }
    }

    fn end_of_input(&self, state: State, text: String) -> Result<Token, LexError> {
        match state {
            State::Initial | State::LineComment => Ok(Token::eof()),
            State::Identifier => Ok(Token::word(text)),
            State::MaybeStartComment
            | State::BlockComment
            | State::MaybeEndComment
            | State::Tag => Err(LexError::UnexpectedEndOfInput { line: self.line }),
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }
}

/// Yields tokens up to (not including) end of input. An error is yielded once,
/// after which the iterator is exhausted.
impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
