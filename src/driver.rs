//! File processing
//!
//! Finds `.enum` inputs, parses each one and writes the generated Go source
//! next to it (`colors.enum` → `colors.go`). Processing stops at the first
//! file that fails.

use crate::generator::{CodeGenerator, GenerationContext, Generator};
use crate::parser::{self, Document, ParseError};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{}:{source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error("bad input pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("no .enum files found")]
    NoInputs,
}

impl DriverError {
    fn io(path: &Path, source: io::Error) -> Self {
        DriverError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The inputs to process: `files` if any were given, otherwise every
/// `*.enum` file in `dir`, sorted by name.
pub fn discover(files: Vec<PathBuf>, dir: &Path) -> Result<Vec<PathBuf>, DriverError> {
    if !files.is_empty() {
        return Ok(files);
    }
    // The directory itself may contain glob metacharacters.
    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("*.enum");
    let mut found = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        match entry {
            Ok(path) => found.push(path),
            Err(err) => {
                let path = err.path().to_path_buf();
                return Err(DriverError::Io {
                    path,
                    source: err.into_error(),
                });
            }
        }
    }
    found.sort();
    debug!("found {} input(s) matching {}", found.len(), pattern.display());
    if found.is_empty() {
        return Err(DriverError::NoInputs);
    }
    Ok(found)
}

/// `input` with its extension replaced by `.go`
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("go")
}

pub fn parse_file(path: &Path) -> Result<Document, DriverError> {
    let source = fs::read_to_string(path).map_err(|err| DriverError::io(path, err))?;
    parser::parse(&source).map_err(|source| DriverError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `input` and write its generated code, returning the output path.
///
/// Nothing is written unless parsing succeeds; a partially written output
/// file is removed.
pub fn process(input: &Path, generator: &Generator, user: &str) -> Result<PathBuf, DriverError> {
    let doc = parse_file(input)?;
    let ctx = GenerationContext::new(input.display().to_string()).with_user(user);

    let mut rendered = Vec::new();
    generator
        .generate(&doc, &ctx, &mut rendered)
        .map_err(|err| DriverError::io(input, err))?;

    let output = output_path(input);
    if let Err(err) = fs::write(&output, &rendered) {
        let _ = fs::remove_file(&output);
        return Err(DriverError::io(&output, err));
    }
    info!(
        "{} -> {} ({} enum types, {} generator)",
        input.display(),
        output.display(),
        doc.enums.len(),
        generator.kind()
    );
    Ok(output)
}

/// Process every input in order, stopping at the first failure.
pub fn process_all(
    inputs: &[PathBuf],
    generator: &Generator,
    user: &str,
) -> Result<Vec<PathBuf>, DriverError> {
    inputs
        .iter()
        .map(|input| process(input, generator, user))
        .collect()
}
