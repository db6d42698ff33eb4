use tracing::debug;
use crate::error::{Diagnostic, LexerError, ParseError, ParseResult};
use crate::interpreter::ast::{ArithOp, Node, NodeKind};
use crate::interpreter::lexer::{Lexer, Token, TokenKind, TokenPos};
use crate::interpreter::program::Program;


/// Deepest allowed nesting of instruction lists and parenthesized
/// expressions. Every later pass recurses along the same path.
pub const MAX_NESTING: usize = 256;

/// Recursive descent parser over the grammar
///
/// ```text
/// program    ::= instr_list EndOfInput
/// instr_list ::= '(' { instr } ')'
/// instr      ::= '(' (assign | cond | loop) ')'
/// assign     ::= 'set' identifier exp
/// cond       ::= 'if' exp instr_list instr_list
/// loop       ::= 'while' exp instr_list
/// exp        ::= integer | identifier | '(' arith_exp ')'
/// arith_exp  ::= ('add' | 'sub' | 'mul') exp exp
/// ```
///
/// Without `recover`, the first grammar error is returned as `Err` and no
/// tree is produced. With it, errors are recorded, the malformed construct
/// becomes an `Error` node and parsing goes on. A group nested deeper than
/// [`MAX_NESTING`] is an error too; when recovering it is skipped up to its
/// closing `)` without descending into it.
pub struct Parser<'source> {
    lexer: Lexer<'source>,
    current: Token<'source>,

    recover: bool,
    depth: usize,
    had_error: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'source> Parser<'source> {
    pub fn new(lexer: Lexer<'source>, recover: bool) -> Parser<'source> {
        Parser {
            lexer,
            current: Token::end_of_input(TokenPos::begin()),
            recover,
            depth: 0,
            had_error: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Every lexer and parser diagnostic reported so far, in order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn parse(&mut self) -> ParseResult<Program<'source>> {
        self.consume();

        let root = self.parse_instr_list()?;
        self.expect(&[TokenKind::EndOfInput])?;

        debug!(valid = !self.had_error, diagnostics = self.diagnostics.len(), "parsed program");
        Ok(Program::new(root, !self.had_error))
    }

    fn parse_instr_list(&mut self) -> ParseResult<Node<'source>> {
        let pos = self.current.pos();

        if !self.enter_nested()? {
            return Ok(Node::error(pos));
        }

        self.expect_and_consume(&[TokenKind::LeftParen])?;

        let mut items = Vec::new();

        while !self.check(TokenKind::RightParen) && !self.is_eof() {
            let previous_pos = self.current.pos();
            items.push(self.parse_instr()?);

            // An instruction that consumed nothing would be retried forever
            if self.current.pos() == previous_pos {
                self.consume();
            }
        }

        self.expect_and_consume(&[TokenKind::RightParen])?;
        self.depth -= 1;

        Ok(Node::new(NodeKind::InstrList(items), pos))
    }

    fn parse_instr(&mut self) -> ParseResult<Node<'source>> {
        self.expect_and_consume(&[TokenKind::LeftParen])?;

        let node = match self.current.kind() {
            TokenKind::Set => self.parse_assign()?,
            TokenKind::If => self.parse_cond()?,
            TokenKind::While => self.parse_loop()?,
            _ => {
                let pos = self.current.pos();
                self.expect(&[TokenKind::Set, TokenKind::If, TokenKind::While])?;
                Node::error(pos)
            },
        };

        self.expect_and_consume(&[TokenKind::RightParen])?;
        Ok(node)
    }

    fn parse_assign(&mut self) -> ParseResult<Node<'source>> {
        let pos = self.current.pos();
        debug_assert_eq!(self.current.kind(), TokenKind::Set);
        self.consume();

        if !self.check(TokenKind::Identifier) {
            self.expect(&[TokenKind::Identifier])?;
            return Ok(Node::error(pos));
        }

        let name = self.current.text();
        self.consume();

        let value = self.parse_exp()?;
        Ok(Node::new(NodeKind::Assign { name, value: Box::new(value) }, pos))
    }

    fn parse_cond(&mut self) -> ParseResult<Node<'source>> {
        let pos = self.current.pos();
        debug_assert_eq!(self.current.kind(), TokenKind::If);
        self.consume();

        let condition = self.parse_exp()?;
        let then_branch = self.parse_instr_list()?;
        let else_branch = self.parse_instr_list()?;

        Ok(Node::new(NodeKind::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }, pos))
    }

    fn parse_loop(&mut self) -> ParseResult<Node<'source>> {
        let pos = self.current.pos();
        debug_assert_eq!(self.current.kind(), TokenKind::While);
        self.consume();

        let condition = self.parse_exp()?;
        let body = self.parse_instr_list()?;

        Ok(Node::new(NodeKind::While { condition: Box::new(condition), body: Box::new(body) }, pos))
    }

    fn parse_exp(&mut self) -> ParseResult<Node<'source>> {
        let token = self.current;

        match token.kind() {
            TokenKind::Integer => {
                self.consume();

                match token.text().parse::<i64>() {
                    Ok(value) => Ok(Node::new(NodeKind::IntLiteral(value), token.pos())),
                    Err(_) => {
                        self.report(ParseError::InvalidInteger { pos: token.pos(), text: token.text().to_owned() })?;
                        Ok(Node::error(token.pos()))
                    },
                }
            },
            TokenKind::Identifier => {
                self.consume();
                Ok(Node::new(NodeKind::VarRef(token.text()), token.pos()))
            },
            TokenKind::LeftParen => {
                if !self.enter_nested()? {
                    return Ok(Node::error(token.pos()));
                }

                self.consume();
                let node = self.parse_arith_exp()?;
                self.expect_and_consume(&[TokenKind::RightParen])?;
                self.depth -= 1;

                Ok(node)
            },
            _ => {
                self.expect(&[TokenKind::Integer, TokenKind::Identifier, TokenKind::LeftParen])?;
                Ok(Node::error(token.pos()))
            },
        }
    }

    fn parse_arith_exp(&mut self) -> ParseResult<Node<'source>> {
        let pos = self.current.pos();
        let op = match self.current.kind() {
            TokenKind::Add => Some(ArithOp::Add),
            TokenKind::Sub => Some(ArithOp::Sub),
            TokenKind::Mul => Some(ArithOp::Mul),
            _ => None,
        };

        self.expect_and_consume(&[TokenKind::Add, TokenKind::Sub, TokenKind::Mul])?;

        let left = self.parse_exp()?;
        let right = self.parse_exp()?;

        Ok(match op {
            Some(op) => Node::new(NodeKind::BinaryArith { op, left: Box::new(left), right: Box::new(right) }, pos),
            // Operands parsed after a bad operator are dropped with the error
            None => Node::error(pos),
        })
    }

    /// Opens one nesting level. Returns `Ok(false)` once [`MAX_NESTING`] is
    /// reached, after skipping the whole group at the current token.
    fn enter_nested(&mut self) -> ParseResult<bool> {
        if self.depth < MAX_NESTING {
            self.depth += 1;
            return Ok(true);
        }

        self.report(ParseError::NestingTooDeep { pos: self.current.pos(), limit: MAX_NESTING })?;
        self.skip_group();

        Ok(false)
    }

    /// Consumes tokens up to and including the `)` matching the current `(`,
    /// or up to end of input.
    fn skip_group(&mut self) {
        let mut open = 0usize;

        loop {
            match self.current.kind() {
                TokenKind::EndOfInput => return,
                TokenKind::LeftParen => open += 1,
                TokenKind::RightParen => open = open.saturating_sub(1),
                _ => {},
            }

            self.consume();

            if open == 0 {
                return;
            }
        }
    }

    fn consume(&mut self) {
        loop {
            match self.lexer.scan_token() {
                Ok(token) => {
                    self.current = token;
                    break;
                },
                Err(err) => self.error_from_lexer(err),
            }
        }
    }

    /// Returns `Ok(false)` on a mismatch in recovery mode, without consuming.
    fn expect(&mut self, expected: &[TokenKind]) -> ParseResult<bool> {
        if expected.contains(&self.current.kind()) {
            return Ok(true);
        }

        self.report(ParseError::UnexpectedToken {
            pos: self.current.pos(),
            found: self.current.kind(),
            expected: expected.to_vec(),
        })?;

        Ok(false)
    }

    fn expect_and_consume(&mut self, expected: &[TokenKind]) -> ParseResult<()> {
        if self.expect(expected)? {
            self.consume();
        }

        Ok(())
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind() == kind
    }

    fn is_eof(&self) -> bool {
        self.current.kind() == TokenKind::EndOfInput
    }

    // Error handling

    fn error_from_lexer(&mut self, error: LexerError) {
        eprintln!("{}", error);
        self.diagnostics.push(Diagnostic::Lexer(error));
    }

    fn report(&mut self, error: ParseError) -> ParseResult<()> {
        eprintln!("{}", error);
        self.diagnostics.push(Diagnostic::Parser(error.clone()));
        self.had_error = true;

        if self.recover {
            Ok(())
        } else {
            Err(error)
        }
    }
}
