//! Single-character token lexing.

use crate::classify::lookup_single_token;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes exactly one character.
    ///
    /// Delimiters get their own tag; anything else is `ILLEGAL`. Either way
    /// the cursor moves past the character.
    pub fn read_single_token(&mut self) -> Token {
        let start = self.cursor.position();
        let ch = self.cursor.current_char();
        self.cursor.read_char();
        Token::new(lookup_single_token(ch), self.cursor.slice_from(start))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};

    fn lex_single(source: &str) -> Token {
        let mut lexer = crate::Lexer::new(source);
        lexer.read_single_token()
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(lex_single(";"), Token::new(TokenKind::Semicolon, ";"));
        assert_eq!(lex_single("("), Token::new(TokenKind::LParen, "("));
        assert_eq!(lex_single(")"), Token::new(TokenKind::RParen, ")"));
        assert_eq!(lex_single("{"), Token::new(TokenKind::LBrace, "{"));
        assert_eq!(lex_single("}"), Token::new(TokenKind::RBrace, "}"));
        assert_eq!(lex_single("["), Token::new(TokenKind::LBracket, "["));
        assert_eq!(lex_single("]"), Token::new(TokenKind::RBracket, "]"));
        assert_eq!(lex_single("*"), Token::new(TokenKind::Asterisk, "*"));
    }

    #[test]
    fn test_illegal() {
        assert_eq!(lex_single("#"), Token::new(TokenKind::Illegal, "#"));
        assert_eq!(lex_single("\""), Token::new(TokenKind::Illegal, "\""));
    }

    #[test]
    fn test_illegal_multibyte() {
        let mut lexer = crate::Lexer::new("€1");
        assert_eq!(lexer.read_single_token(), Token::new(TokenKind::Illegal, "€"));
        assert_eq!(lexer.cursor.current_char(), '1');
    }

    #[test]
    fn test_consumes_only_one() {
        let mut lexer = crate::Lexer::new("((");
        lexer.read_single_token();
        assert_eq!(lexer.cursor.current_char(), '(');
    }
}
