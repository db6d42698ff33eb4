pub mod ast;
pub mod lexer;
pub mod parser;
pub mod evaluator;
pub mod symbol_table;
pub mod program;
pub mod writer;
