//! Number literal lexing.

use crate::classify::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of digits.
    ///
    /// There is no fractional or exponent part: `3.14` lexes as `DIGIT`,
    /// `DOT`, `DIGIT`.
    pub fn read_number(&mut self) -> Token {
        let text = self.cursor.read_sequence(is_digit);
        Token::new(TokenKind::Digit, text)
    }
}
