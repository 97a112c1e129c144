//! Operator lexing.
//!
//! Operators are matched greedily against the operator table: the reader
//! keeps consuming while the lexeme read so far is still a prefix of some
//! operator, then looks the whole lexeme up. Since the lexeme only grows
//! while it can still become an operator, the longest match falls out
//! without backtracking.

use crate::classify::{is_operator_prefix, lookup_operator};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the longest operator starting at the current character.
    ///
    /// Handles everything in the operator table, e.g. `=`, `==`, `!`, `!=`,
    /// `**`, `**=`, `<=>`, `...`. A prefix that never completes an operator
    /// comes back as `INVALID`. If the current character starts no operator
    /// at all it is consumed on its own and tagged `INVALID`, so the reader
    /// always makes progress.
    pub fn read_operator(&mut self) -> Token {
        let start = self.cursor.position();

        while !self.cursor.is_at_end()
            && is_operator_prefix(self.cursor.slice_through_current(start))
        {
            self.cursor.read_char();
        }

        if self.cursor.position() == start {
            self.cursor.read_char();
            return Token::new(TokenKind::Invalid, self.cursor.slice_from(start));
        }

        let text = self.cursor.slice_from(start);
        Token::new(lookup_operator(text), text)
    }
}
