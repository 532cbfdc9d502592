// enums: Go enumerated-type generator

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, ArgGroup, Parser};
use crossterm::style::Stylize;
use log::LevelFilter;

use enums::driver;
use enums::generator::{current_user, Generator, GeneratorKind};

/// Generate Go enumerated types from .enum definition files.
///
/// In all cases the basic implementation of an enumerated type is generated
/// along with a String() method for textual output. At most one option may
/// be given to add further methods.
#[derive(Debug, Parser)]
#[command(name = "enums", version, about)]
#[command(group(ArgGroup::new("flavour").multiple(false)))]
struct Cli {
    /// Generate a fmt.Scanner Scan() method
    #[arg(long, group = "flavour")]
    fmt_scanner: bool,

    /// Generate a sql.Scanner Scan() method
    #[arg(long, group = "flavour")]
    sql_scanner: bool,

    /// Output JSON marshal/unmarshal methods
    #[arg(long, group = "flavour")]
    json: bool,

    /// Output XML marshal/unmarshal methods
    #[arg(long, group = "flavour")]
    xml: bool,

    /// Name recorded in the generated file header
    #[arg(long, env = "ENUMS_USER")]
    user: Option<String>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input files; defaults to every *.enum file in the current directory
    files: Vec<PathBuf>,
}

impl Cli {
    fn generator_kind(&self) -> GeneratorKind {
        if self.fmt_scanner {
            GeneratorKind::FmtScanner
        } else if self.sql_scanner {
            GeneratorKind::SqlScanner
        } else if self.json {
            GeneratorKind::Json
        } else if self.xml {
            GeneratorKind::Xml
        } else {
            GeneratorKind::Std
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let generator = Generator::new(cli.generator_kind());
    let user = cli.user.unwrap_or_else(current_user);
    let cwd = std::env::current_dir()?;
    let inputs = driver::discover(cli.files, &cwd)?;
    driver::process_all(&inputs, &generator, &user)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "enums:".red().bold(), err);
        std::process::exit(1);
    }
}
