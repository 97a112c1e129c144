//! Whitespace lexing.

use crate::classify::is_whitespace;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of whitespace.
    ///
    /// The token only exists so the dispatch table stays uniform;
    /// [`Lexer::next_token`] drops it.
    pub fn read_whitespace(&mut self) -> Token {
        let text = self.cursor.read_sequence(is_whitespace);
        Token::new(TokenKind::Whitespace, text)
    }
}
