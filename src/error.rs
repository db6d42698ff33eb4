use std::path::PathBuf;
use thiserror::Error;
use crate::interpreter::lexer::{TokenKind, TokenPos};
use crate::util;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError {
    #[error("error[lexer, {pos}]: invalid char '{}' (ASCII: {byte}).", util::escape_byte(.byte))]
    InvalidCharacter {
        pos: TokenPos,
        byte: u8,
    },
}

impl LexerError {
    pub fn pos(&self) -> TokenPos {
        match self {
            LexerError::InvalidCharacter { pos, .. } => *pos,
        }
    }
}

pub type LexerResult<T> = Result<T, LexerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("error[parser, {pos}]: invalid token {found} ({} expected).", util::join(.expected, ", "))]
    UnexpectedToken {
        pos: TokenPos,
        found: TokenKind,
        expected: Vec<TokenKind>,
    },
    #[error("error[parser, {pos}]: integer literal {text} does not fit in 64 bits.")]
    InvalidInteger {
        pos: TokenPos,
        text: String,
    },
    #[error("error[parser, {pos}]: nesting is deeper than {limit} levels.")]
    NestingTooDeep {
        pos: TokenPos,
        limit: usize,
    },
}

impl ParseError {
    pub fn pos(&self) -> TokenPos {
        match self {
            ParseError::UnexpectedToken { pos, .. } => *pos,
            ParseError::InvalidInteger { pos, .. } => *pos,
            ParseError::NestingTooDeep { pos, .. } => *pos,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Anything reported to the user while turning source text into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error(transparent)]
    Parser(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("error: cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
