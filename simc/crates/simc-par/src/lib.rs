//! simc-par - Statement Parser for the Simian Programming Language
//!
//! This crate turns the token stream produced by `simc-lex` into a small
//! Abstract Syntax Tree. Only `my` declarations are recognized so far; their
//! initializers are kept as flat token lists.
//!
//! # Example Usage
//!
//! ```
//! use simc_lex::Lexer;
//! use simc_par::ast::{Node, Statement};
//! use simc_par::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("my $x = 5; my $y = $x;"));
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.statements.len(), 2);
//! let Statement::My(stmt) = &program.statements[1];
//! assert_eq!(stmt.name.value, "$y");
//! assert_eq!(stmt.token_literal(), "my");
//! ```
//!
//! # Error Recovery
//!
//! Diagnostics are collected rather than returned early. After a failed
//! statement the parser skips one token at a time until it finds the next
//! statement keyword, so a single mistake does not hide later ones.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ast;
pub mod error;

#[cfg(test)]
mod edge_cases;

use simc_lex::{Lexer, Token, TokenKind};
use tracing::debug;

use crate::ast::{Expression, Identifier, MyStatement, Program, Statement};
pub use crate::error::ParseError;

/// Two-token lookahead parser over a [`Lexer`].
pub struct Parser<'a> {
    /// Token source
    lexer: Lexer<'a>,

    /// Token under examination
    cur_token: Token,

    /// Byte offset of `cur_token`
    cur_offset: usize,

    /// One token of lookahead
    peek_token: Token,

    /// Byte offset of `peek_token`
    peek_offset: usize,

    /// Diagnostics collected so far
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes the current and peek tokens.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            cur_offset: 0,
            peek_token: Token::eof(),
            peek_offset: 0,
            errors: Vec::new(),
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Returns the diagnostics recorded so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail to parse are dropped and reported through
    /// [`Parser::errors`]; everything else ends up in the returned program.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_token.is_eof() {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    // ========================================================================
    // STATEMENT PARSING
    // ========================================================================

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::My => self.parse_my_statement().map(Statement::My),
            kind if kind.is_error() => {
                self.report_illegal();
                None
            },
            _ => None,
        }
    }

    /// Parses `my <IDENTIFIER> = <tokens> ;`.
    ///
    /// On success the current token is the closing `;`.
    fn parse_my_statement(&mut self) -> Option<MyStatement> {
        let token = self.cur_token.clone();
        let start = self.cur_offset;

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        let name = Identifier::new(self.cur_token.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let mut initializer = Vec::new();
        while !self.cur_token_is(TokenKind::Semicolon) {
            if self.cur_token.is_eof() {
                self.errors.push(ParseError::MissingSemicolon { offset: start });
                return None;
            }
            if self.cur_token.kind.is_error() {
                self.report_illegal();
            }
            initializer.push(Expression::from_token(self.cur_token.clone()));
            self.next_token();
        }

        Some(MyStatement {
            token,
            name,
            initializer,
        })
    }

    // ========================================================================
    // TOKEN HANDLING
    // ========================================================================

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
        self.cur_offset = self.peek_offset;
        self.peek_offset = self.lexer.token_start();
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the peek token has the expected kind, records a
    /// diagnostic otherwise.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(ParseError::UnexpectedToken {
            expected,
            found: self.peek_token.kind,
            literal: self.peek_token.literal.clone(),
            offset: self.peek_offset,
        });
    }

    fn report_illegal(&mut self) {
        self.errors.push(ParseError::IllegalToken {
            kind: self.cur_token.kind,
            literal: self.cur_token.literal.clone(),
            offset: self.cur_offset,
        });
    }
}
