//! # Introduction
//!
//! `enums` reads small enumeration-definition files and generates Go
//! declarations for them: a named integer type, one constant per member and
//! a `String()` method, plus optional scanner and encoding methods.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Document → Generator → .go file
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds a [`parser::Document`].
//! 2. [`generator`]: renders a document as Go source in one of several
//!    flavours ([`generator::GeneratorKind`]).
//! 3. [`driver`]: finds input files and writes each `x.enum` to `x.go`.
//!
//! ## Input language
//!
//! ```text
//! package colors
//!
//! // Base type defaults to int
//! type Color enum {
//!     Red
//!     Green `green`   /* tag overrides the display text */
//! }
//! ```

pub mod driver;
pub mod generator;
pub mod parser;
