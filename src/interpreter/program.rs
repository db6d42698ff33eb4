use std::io::Write;
use tracing::debug;
use crate::error::ParseResult;
use crate::interpreter::ast::Node;
use crate::interpreter::evaluator::Evaluator;
use crate::interpreter::lexer::Lexer;
use crate::interpreter::parser::Parser;
use crate::interpreter::symbol_table::SymbolTable;
use crate::interpreter::writer::{PythonWriter, TreeWriter};

/// The variable whose final value is reported as the program's result.
pub const RESULT_VARIABLE: &str = "result";

/// A parsed program. Borrows the source buffer it was parsed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program<'source> {
    root: Node<'source>,
    valid: bool,
}

impl<'source> Program<'source> {
    pub fn new(root: Node<'source>, valid: bool) -> Program<'source> {
        Program { root, valid }
    }

    /// Parses `source` in one go. Diagnostics are printed to stderr only; use
    /// [`Parser`] directly to inspect them.
    pub fn parse(source: &'source str, recover: bool) -> ParseResult<Program<'source>> {
        Parser::new(Lexer::new(source), recover).parse()
    }

    pub fn root(&self) -> &Node<'source> {
        &self.root
    }

    /// False if the parser had to substitute `Error` nodes.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Runs the program and returns the value bound to `result` afterwards
    /// (binding it to 0 if the program never assigned it).
    pub fn evaluate(&self, symbols: &mut SymbolTable) -> i64 {
        Evaluator::new(symbols).evaluate(&self.root);

        let result = symbols.get_or_insert(RESULT_VARIABLE);
        debug!(result, variables = symbols.len(), "evaluated program");

        result
    }

    pub fn render(&self, out: &mut impl Write) -> Result<(), std::io::Error> {
        writeln!(out, "Python:")?;
        PythonWriter::default().write_node(&self.root, 0, out)
    }

    pub fn dump(&self, out: &mut impl Write) -> Result<(), std::io::Error> {
        writeln!(out, "Ast:")?;
        TreeWriter::new().write_node(&self.root, 1, out)
    }
}
