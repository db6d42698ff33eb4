pub mod util;
pub mod error;
pub mod interpreter;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use clap::Parser as ClapParser;
use tracing::{debug, info};
use crate::error::Error;
use crate::interpreter::lexer::Lexer;
use crate::interpreter::parser::Parser;
use crate::interpreter::symbol_table::SymbolTable;

#[derive(ClapParser, Debug, Default, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[clap(required_unless_present = "interactive", conflicts_with = "interactive", help = "Source file to interpret")]
    pub input: Option<PathBuf>,
    #[clap(long, help = "Read programs from stdin, each terminated by ';'")]
    pub interactive: bool,

    #[clap(long, help = "Print the syntax tree")]
    pub dump_ast: bool,
    #[clap(long = "dump-sym", help = "Print every variable after evaluation")]
    pub dump_sym_table: bool,
    #[clap(long, help = "Print the program in an indentation-based syntax")]
    pub pythonify: bool,
    #[clap(long, help = "Replace malformed constructs with error nodes instead of stopping")]
    pub try_recovery_from_syntax_errors: bool,

    #[clap(short, long, help = "Print verbose log output")]
    pub verbose: bool,
}

/// Parses and evaluates one complete program, then writes the requested
/// dumps and the result to `out`. Nothing is written if parsing fails.
pub fn interpret(source: &str, config: &Config, out: &mut impl Write) -> Result<i64, Error> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer, config.try_recovery_from_syntax_errors);
    let program = parser.parse()?;

    let mut symbols = SymbolTable::new();
    let result = program.evaluate(&mut symbols);

    if config.dump_ast {
        writeln!(out)?;
        program.dump(out)?;
    }

    if config.dump_sym_table {
        writeln!(out)?;
        writeln!(out, "SymTable:")?;
        symbols.dump(out)?;
    }

    if config.pythonify {
        writeln!(out)?;
        program.render(out)?;
    }

    write!(out, "\n-> {}\n", result)?;
    Ok(result)
}

pub fn run(config: &Config) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &config.input {
        Some(path) if !config.interactive => run_file(config, path, &mut out),
        _ => run_interactive(config, &mut std::io::stdin().lock(), &mut out),
    }
}

fn run_file(config: &Config, path: &Path, out: &mut impl Write) -> Result<(), Error> {
    let source = std::fs::read_to_string(path)
        .map_err(|source| Error::Read { path: path.to_owned(), source })?;
    info!(path = %path.display(), bytes = source.len(), "loaded source");

    interpret(&source, config, out)?;
    Ok(())
}

/// Interprets every `;`-terminated chunk of `input` as its own program until
/// the input is exhausted. A trailing chunk without `;` is interpreted too.
pub fn run_interactive(config: &Config, input: &mut impl BufRead, out: &mut impl Write) -> Result<(), Error> {
    let mut buffer = Vec::new();

    loop {
        buffer.clear();

        if input.read_until(b';', &mut buffer)? == 0 {
            return Ok(());
        }

        if buffer.last() == Some(&b';') {
            buffer.pop();
        }

        let source = String::from_utf8_lossy(&buffer);

        if source.trim().is_empty() {
            continue;
        }

        debug!(bytes = source.len(), "read interactive program");
        interpret(&source, config, out)?;
        out.flush()?;
    }
}
