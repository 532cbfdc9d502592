//! Declaration parsing implementation
//!
//! # Grammar
//!
//! ```text
//! document    ::= "package" identifier enum_def*
//! enum_def    ::= "type" identifier "enum" base_clause enumerator* "}"
//! base_clause ::= "{"                  (base type int)
//!               | int_type "{"
//! enumerator  ::= identifier tag?
//! ```
//!
//! The top-level loop alternates between reading an enum header and reading
//! enumerators; only `}` leaves the enumerator phase, so `type` is rejected
//! inside an unfinished body.

use crate::parser::ast::*;
use crate::parser::lexer::{TokenKind, INT_TYPE_KINDS};
use crate::parser::parse::{ParseError, Parser};
use log::debug;

impl<I: Iterator<Item = char>> Parser<I> {
    /// Parse a complete document.
    pub fn parse_document(mut self) -> Result<Document, ParseError> {
        self.must_match(TokenKind::Package);
        let Some(package) = self.must_match(TokenKind::Ident) else {
            return self.finish(Document::default());
        };
        let mut document = Document::new(package);

        let mut current: Option<EnumDefinition> = None;
        loop {
            match current.take() {
                Some(mut def) => {
                    if self.parse_enum_body_step(&mut def) {
                        debug!(
                            "parsed enum {} ({} enumerators)",
                            def.type_name,
                            def.enumerators.len()
                        );
                        document.enums.push(def);
                    } else {
                        current = Some(def);
                    }
                }
                None if self.is_done() => break,
                None => current = self.parse_enum_header(),
            }
            if self.is_broken() {
                break;
            }
        }

        self.finish(document)
    }

    /// `type Name enum [base] {`
    pub(crate) fn parse_enum_header(&mut self) -> Option<EnumDefinition> {
        self.must_match(TokenKind::Type)?;
        let name = self.must_match(TokenKind::Ident)?;
        self.must_match(TokenKind::Enum)?;

        let base_type = if self.match_kind(TokenKind::LBrace).is_some() {
            IntType::Int
        } else if let Some(TokenKind::IntType(base)) = self.match_one_of(&INT_TYPE_KINDS) {
            self.must_match(TokenKind::LBrace)?;
            base
        } else {
            self.expected_one_of("'{' or <int-type>");
            return None;
        };

        Some(EnumDefinition::new(name, base_type))
    }

    /// Consume either the closing `}` or one enumerator. Returns `true` once
    /// the definition is closed.
    pub(crate) fn parse_enum_body_step(&mut self, def: &mut EnumDefinition) -> bool {
        if self.current().is_eof() {
            self.must_match(TokenKind::RBrace);
            return false;
        }
        if self.match_kind(TokenKind::RBrace).is_some() {
            return true;
        }
        if let Some(enumerator) = self.parse_enumerator() {
            def.enumerators.push(enumerator);
        }
        false
    }

    /// `Name` or ``Name `tag` ``
    pub(crate) fn parse_enumerator(&mut self) -> Option<Enumerator> {
        let name = self.must_match(TokenKind::Ident)?;
        let enumerator = Enumerator::new(name);
        Some(match self.match_kind(TokenKind::Tag) {
            Some(tag) => enumerator.with_tag(tag),
            None => enumerator,
        })
    }
}
