//! Edge case tests for simc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).tokens().collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![Token::new(TokenKind::Identifier, "x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = format!("${}", "a".repeat(10000));
        let tokens = lex_all(&format!("my {} = 1;", name));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, name));
    }

    #[test]
    fn test_edge_keyword_is_exact() {
        assert_eq!(kinds("my"), vec![TokenKind::My]);
        assert_eq!(lex_all("myvar"), vec![Token::new(TokenKind::Identifier, "myvar")]);
        assert_eq!(kinds("state_x"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_assign_vs_equal() {
        assert_eq!(kinds("="), vec![TokenKind::Assign]);
        assert_eq!(kinds("=="), vec![TokenKind::Equal]);
        assert_eq!(kinds("= ="), vec![TokenKind::Assign, TokenKind::Assign]);
    }

    #[test]
    fn test_edge_not_vs_not_equal() {
        assert_eq!(kinds("!"), vec![TokenKind::Not]);
        assert_eq!(kinds("!="), vec![TokenKind::NotEqual]);
        assert_eq!(kinds("!$x"), vec![TokenKind::Not, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_power_not_two_asterisks() {
        assert_eq!(lex_all("**"), vec![Token::new(TokenKind::OpPower, "**")]);
        assert_eq!(
            kinds("2**8"),
            vec![TokenKind::Digit, TokenKind::OpPower, TokenKind::Digit]
        );
    }

    #[test]
    fn test_edge_postfix_increment() {
        assert_eq!(
            lex_all("$i++;"),
            vec![
                Token::new(TokenKind::Identifier, "$i"),
                Token::new(TokenKind::Plus, "++"),
                Token::new(TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_edge_lone_sigils() {
        assert_eq!(lex_all("$"), vec![Token::new(TokenKind::Identifier, "$")]);
        assert_eq!(lex_all("@ "), vec![Token::new(TokenKind::Identifier, "@")]);
        assert_eq!(
            kinds("5 % 3"),
            vec![TokenKind::Digit, TokenKind::Identifier, TokenKind::Digit]
        );
    }

    #[test]
    fn test_edge_sigils_run_together() {
        // Sigils continue identifiers, so `&&` between names is one word.
        assert_eq!(lex_all("&&"), vec![Token::new(TokenKind::Identifier, "&&")]);
        assert_eq!(lex_all("$$ref"), vec![Token::new(TokenKind::Identifier, "$$ref")]);
    }

    #[test]
    fn test_edge_attribute_not_split() {
        let tokens = lex_all("field $name :isa");
        assert_eq!(tokens[2], Token::new(TokenKind::Identifier, ":isa"));
        assert!(!tokens.iter().any(|t| t.kind == TokenKind::OpTriElse));
    }

    #[test]
    fn test_edge_package_separator() {
        assert_eq!(
            lex_all("Foo::Bar"),
            vec![Token::new(TokenKind::Identifier, "Foo::Bar")]
        );
    }

    #[test]
    fn test_edge_lone_colon() {
        assert_eq!(lex_all(":"), vec![Token::new(TokenKind::Identifier, ":")]);
    }

    #[test]
    fn test_edge_digits_then_letters() {
        assert_eq!(
            lex_all("123abc"),
            vec![
                Token::new(TokenKind::Digit, "123"),
                Token::new(TokenKind::Identifier, "abc"),
            ]
        );
    }

    #[test]
    fn test_edge_vulgar_fraction_is_not_a_digit() {
        assert_eq!(
            lex_all("½3"),
            vec![
                Token::new(TokenKind::Illegal, "½"),
                Token::new(TokenKind::Digit, "3"),
            ]
        );
        assert_eq!(
            lex_all("$x²"),
            vec![
                Token::new(TokenKind::Identifier, "$x"),
                Token::new(TokenKind::Illegal, "²"),
            ]
        );
    }

    #[test]
    fn test_edge_identifier_keeps_digits() {
        assert_eq!(lex_all("$x1"), vec![Token::new(TokenKind::Identifier, "$x1")]);
    }

    #[test]
    fn test_edge_illegal_characters() {
        assert_eq!(
            lex_all("# \" ' `"),
            vec![
                Token::new(TokenKind::Illegal, "#"),
                Token::new(TokenKind::Illegal, "\""),
                Token::new(TokenKind::Illegal, "'"),
                Token::new(TokenKind::Illegal, "`"),
            ]
        );
    }

    #[test]
    fn test_edge_interior_nul() {
        assert_eq!(
            lex_all("a\0b"),
            vec![
                Token::new(TokenKind::Identifier, "a"),
                Token::new(TokenKind::Illegal, "\0"),
                Token::new(TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_edge_emoji_is_illegal() {
        assert_eq!(
            lex_all("$x=😀;"),
            vec![
                Token::new(TokenKind::Identifier, "$x"),
                Token::new(TokenKind::Assign, "="),
                Token::new(TokenKind::Illegal, "😀"),
                Token::new(TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_edge_ranges() {
        assert_eq!(
            kinds("1..10"),
            vec![TokenKind::Digit, TokenKind::OpRange, TokenKind::Digit]
        );
        assert_eq!(
            kinds("1...10"),
            vec![TokenKind::Digit, TokenKind::OpRangeInclusive, TokenKind::Digit]
        );
    }

    #[test]
    fn test_edge_fat_comma() {
        assert_eq!(
            lex_all("a => 1"),
            vec![
                Token::new(TokenKind::Identifier, "a"),
                Token::new(TokenKind::Comma, "=>"),
                Token::new(TokenKind::Digit, "1"),
            ]
        );
    }

    #[test]
    fn test_edge_arrow_call() {
        assert_eq!(
            kinds("$obj->name()"),
            vec![
                TokenKind::Identifier,
                TokenKind::OpArrow,
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_edge_all_operators() {
        let tokens = kinds("+ - / == != < > <= >= <=> || ! ^ ~ << >> // -> ?");
        assert!(!tokens.iter().any(|k| k.is_error()));
        assert_eq!(tokens.len(), 19);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        assert_eq!(
            kinds("my $x = 1;\r\nmy $y = 2;\r\n"),
            kinds("my $x = 1;\nmy $y = 2;\n")
        );
    }
}
