//! Go code generation
//!
//! Renders a parsed [`Document`] into Go declarations. Each
//! [`GeneratorKind`] selects a flavour of output; all of them include the
//! enumerated type, its constants and a `String()` method.

mod templates;

use crate::parser::ast::Document;
use chrono::{DateTime, Local};
use std::fmt;
use std::io;

/// Which flavour of Go code to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    /// Type, constants and `String()` only
    #[default]
    Std,
    /// Adds a `fmt.Scanner` implementation
    FmtScanner,
    /// Adds a `database/sql` `Scanner` implementation
    SqlScanner,
    /// Adds `json.Marshaler` / `json.Unmarshaler`
    Json,
    /// Adds `xml.Marshaler` / `xml.Unmarshaler`
    Xml,
}

impl GeneratorKind {
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Std => "std",
            GeneratorKind::FmtScanner => "scan",
            GeneratorKind::SqlScanner => "sql",
            GeneratorKind::Json => "json",
            GeneratorKind::Xml => "xml",
        }
    }

    /// Go packages the generated file imports
    pub fn imports(self) -> &'static [&'static str] {
        match self {
            GeneratorKind::Std => &[],
            GeneratorKind::FmtScanner | GeneratorKind::SqlScanner => &["fmt"],
            GeneratorKind::Json => &["encoding/json", "fmt"],
            GeneratorKind::Xml => &["encoding/xml", "fmt"],
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Details recorded in the generated file's header
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub filename: String,
    pub generated_at: DateTime<Local>,
    pub user: String,
}

impl GenerationContext {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            generated_at: Local::now(),
            user: current_user(),
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_time(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

/// Login name from the environment, or `unknown`.
pub fn current_user() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

pub trait CodeGenerator {
    fn imports(&self) -> &[&'static str];

    fn generate(
        &self,
        doc: &Document,
        ctx: &GenerationContext,
        out: &mut dyn io::Write,
    ) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    kind: GeneratorKind,
}

impl Generator {
    pub fn new(kind: GeneratorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    /// Render the whole output file into memory.
    pub fn render(&self, doc: &Document, ctx: &GenerationContext) -> Result<String, fmt::Error> {
        let mut out = String::new();
        templates::write_document(&mut out, self.kind, doc, ctx)?;
        Ok(out)
    }
}

impl CodeGenerator for Generator {
    fn imports(&self) -> &[&'static str] {
        self.kind.imports()
    }

    fn generate(
        &self,
        doc: &Document,
        ctx: &GenerationContext,
        out: &mut dyn io::Write,
    ) -> io::Result<()> {
        let text = self
            .render(doc, ctx)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        out.write_all(text.as_bytes())
    }
}
