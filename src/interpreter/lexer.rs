use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use lazy_static::lazy_static;
use crate::error::{LexerError, LexerResult};
use crate::util;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenPos {
    pub column: u32,
    pub line: u32,
}

impl TokenPos {
    pub fn new(column: u32, line: u32) -> TokenPos {
        TokenPos { column, line }
    }

    pub fn begin() -> TokenPos {
        TokenPos::new(1, 1)
    }

    pub fn advance_column(&mut self) {
        self.column += 1;
    }

    /// Moves to the next line. The column is reset to 0, so the character
    /// after the newline lands on column 1 once it is advanced over.
    pub fn advance_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    pub fn current(&self) -> TokenPos {
        *self
    }
}

impl Default for TokenPos {
    fn default() -> Self {
        TokenPos::begin()
    }
}

impl Display for TokenPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ln: {}, col: {}", self.line, self.column)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    EndOfInput,

    LeftParen, RightParen,

    Identifier,
    Integer,

    // Keywords
    Add, Sub, Mul,
    Set,
    If, While,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Add => "'add'",
            TokenKind::Sub => "'sub'",
            TokenKind::Mul => "'mul'",
            TokenKind::Set => "'set'",
            TokenKind::If => "'if'",
            TokenKind::While => "'while'",
        })
    }
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = HashMap::from([
        ("add", TokenKind::Add),
        ("sub", TokenKind::Sub),
        ("mul", TokenKind::Mul),
        ("set", TokenKind::Set),
        ("if", TokenKind::If),
        ("while", TokenKind::While),
    ]);
}

/// A lexical unit. `text` borrows from the source buffer and is only
/// non-empty for identifiers and integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'source> {
    kind: TokenKind,
    text: &'source str,
    pos: TokenPos,
}

impl<'source> Token<'source> {
    pub fn new(kind: TokenKind, text: &'source str, pos: TokenPos) -> Token<'source> {
        Token { kind, text, pos }
    }

    pub fn end_of_input(pos: TokenPos) -> Token<'source> {
        Token::new(TokenKind::EndOfInput, "", pos)
    }

    pub fn kind(&self) -> TokenKind { self.kind }
    pub fn text(&self) -> &'source str { self.text }
    pub fn pos(&self) -> TokenPos { self.pos }
}

pub struct Lexer<'source> {
    input: &'source str,

    start_index: usize,
    current_index: usize,

    start_pos: TokenPos,
    current_pos: TokenPos,

    finished: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Lexer<'source> {
        Lexer {
            input: source,

            start_index: 0,
            current_index: 0,

            start_pos: TokenPos::begin(),
            current_pos: TokenPos::begin(),

            finished: false,
        }
    }

    /// Scans the next token. An invalid byte is consumed and reported as an
    /// error; calling again continues after it. At the end of the buffer this
    /// keeps returning `EndOfInput`.
    pub fn scan_token(&mut self) -> LexerResult<Token<'source>> {
        self.skip_whitespace();
        self.start_index = self.current_index;
        self.start_pos = self.current_pos;

        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(Token::end_of_input(self.current_pos)),
        };

        self.consume();

        match c {
            b'(' => Ok(self.make_token(TokenKind::LeftParen)),
            b')' => Ok(self.make_token(TokenKind::RightParen)),

            // A lone zero is a complete literal
            b'0' => Ok(Token::new(TokenKind::Integer, self.lexeme(), self.start_pos)),
            b'1'..=b'9' => Ok(self.scan_number()),
            c if util::is_lowercase(c) => Ok(self.scan_identifier()),

            byte => Err(LexerError::InvalidCharacter { pos: self.start_pos, byte }),
        }
    }

    fn scan_number(&mut self) -> Token<'source> {
        while let Some(c) = self.peek() {
            if !util::is_numeric(c) {
                break;
            }

            self.consume();
        }

        Token::new(TokenKind::Integer, self.lexeme(), self.start_pos)
    }

    fn scan_identifier(&mut self) -> Token<'source> {
        while let Some(c) = self.peek() {
            if !util::is_alphanumeric(c) {
                break;
            }

            self.consume();
        }

        let name = self.lexeme();

        match KEYWORDS.get(name) {
            Some(&kind) => self.make_token(kind),
            None => Token::new(TokenKind::Identifier, name, self.start_pos),
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token<'source> {
        Token::new(kind, "", self.start_pos)
    }

    fn lexeme(&self) -> &'source str {
        &self.input[self.start_index..self.current_index]
    }

    fn consume(&mut self) {
        if let Some(c) = self.peek() {
            self.current_index += 1;

            if c == b'\n' {
                self.current_pos.advance_line();
            }

            self.current_pos.advance_column();
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.current_index).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n') = self.peek() {
            self.consume();
        }
    }

    pub fn is_eof(&self) -> bool {
        self.current_index >= self.input.len()
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = LexerResult<Token<'source>>;

    /// Yields every token up to and including the first `EndOfInput`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.scan_token();

        if let Ok(token) = &result {
            self.finished = token.kind() == TokenKind::EndOfInput;
        }

        Some(result)
    }
}
