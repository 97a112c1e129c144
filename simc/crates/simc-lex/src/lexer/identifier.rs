//! Identifier and keyword lexing.
//!
//! This module handles lexing of bare words, sigil-prefixed names and
//! colon-prefixed attributes.

use crate::classify::{is_identifier_continue, lookup_keyword};
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of letters, sigils, digits, underscores and
    /// colons, so `$five`, `@array`, `*glob` and `:reader` each come out as
    /// one token. A lone sigil is a one-character identifier. After reading
    /// the run, checks if it matches a reserved keyword.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g. `MY`) or an `IDENTIFIER`
    pub fn read_identifier(&mut self) -> Token {
        let text = self.cursor.read_sequence(is_identifier_continue);
        Token::new(lookup_keyword(text), text)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};

    fn lex_ident(source: &str) -> Token {
        let mut lexer = crate::Lexer::new(source);
        lexer.read_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("add"), Token::new(TokenKind::Identifier, "add"));
    }

    #[test]
    fn test_identifier_with_underscores() {
        assert_eq!(
            lex_ident("something_with_underscores"),
            Token::new(TokenKind::Identifier, "something_with_underscores")
        );
    }

    #[test]
    fn test_scalar() {
        assert_eq!(lex_ident("$five"), Token::new(TokenKind::Identifier, "$five"));
        assert_eq!(lex_ident("$ten"), Token::new(TokenKind::Identifier, "$ten"));
    }

    #[test]
    fn test_hash_array_code_glob() {
        assert_eq!(lex_ident("%hash"), Token::new(TokenKind::Identifier, "%hash"));
        assert_eq!(lex_ident("@array"), Token::new(TokenKind::Identifier, "@array"));
        assert_eq!(lex_ident("&sub"), Token::new(TokenKind::Identifier, "&sub"));
        assert_eq!(lex_ident("*glob"), Token::new(TokenKind::Identifier, "*glob"));
    }

    #[test]
    fn test_attribute() {
        assert_eq!(lex_ident(":reader"), Token::new(TokenKind::Identifier, ":reader"));
        assert_eq!(lex_ident(":isa"), Token::new(TokenKind::Identifier, ":isa"));
    }

    #[test]
    fn test_stops_at_operator() {
        let mut lexer = crate::Lexer::new("$i++");
        assert_eq!(lexer.read_identifier(), Token::new(TokenKind::Identifier, "$i"));
        assert_eq!(lexer.cursor.current_char(), '+');
    }

    #[test]
    fn test_lone_sigil() {
        assert_eq!(lex_ident("$"), Token::new(TokenKind::Identifier, "$"));
        assert_eq!(lex_ident("% 2"), Token::new(TokenKind::Identifier, "%"));
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(lex_ident("$café"), Token::new(TokenKind::Identifier, "$café"));
        assert_eq!(lex_ident("変数"), Token::new(TokenKind::Identifier, "変数"));
    }

    #[test]
    fn test_keyword_my() {
        assert_eq!(lex_ident("my"), Token::new(TokenKind::My, "my"));
    }

    #[test]
    fn test_keyword_sub() {
        assert_eq!(lex_ident("sub"), Token::new(TokenKind::Sub, "sub"));
    }

    #[test]
    fn test_keyword_booleans() {
        assert_eq!(lex_ident("true"), Token::new(TokenKind::True, "true"));
        assert_eq!(lex_ident("false"), Token::new(TokenKind::False, "false"));
    }

    #[test]
    fn test_keyword_class_members() {
        assert_eq!(lex_ident("class"), Token::new(TokenKind::Class, "class"));
        assert_eq!(lex_ident("field"), Token::new(TokenKind::Field, "field"));
        assert_eq!(lex_ident("method"), Token::new(TokenKind::Method, "method"));
        assert_eq!(lex_ident("state"), Token::new(TokenKind::State, "state"));
    }

    #[test]
    fn test_keyword_control_flow() {
        assert_eq!(lex_ident("if"), Token::new(TokenKind::If, "if"));
        assert_eq!(lex_ident("else"), Token::new(TokenKind::Else, "else"));
        assert_eq!(lex_ident("return"), Token::new(TokenKind::Return, "return"));
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("myvar"), Token::new(TokenKind::Identifier, "myvar"));
        assert_eq!(lex_ident("$my"), Token::new(TokenKind::Identifier, "$my"));
    }
}
