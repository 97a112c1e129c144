//! Edge case tests for simc-par

#[cfg(test)]
mod tests {
    use crate::ast::{Expression, Node, Program, Statement};
    use crate::{ParseError, Parser};
    use simc_lex::{Lexer, TokenKind};

    fn parse_source(source: &str) -> (Program, Vec<ParseError>) {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        (program, parser.errors().to_vec())
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Empty source
    #[test]
    fn test_edge_empty_source() {
        let (program, errors) = parse_source("");
        assert!(program.statements.is_empty());
        assert!(errors.is_empty());
        assert_eq!(program.token_literal(), "");
    }

    /// EDGE CASE: Whitespace only
    #[test]
    fn test_edge_whitespace_only() {
        let (program, errors) = parse_source("   \n\t  \n  ");
        assert!(program.statements.is_empty());
        assert!(errors.is_empty());
    }

    /// EDGE CASE: Lone `my`
    #[test]
    fn test_edge_lone_my() {
        let (program, errors) = parse_source("my");
        assert!(program.statements.is_empty());
        assert!(matches!(
            errors.as_slice(),
            [ParseError::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::Eof,
                ..
            }]
        ));
    }

    /// EDGE CASE: Empty initializer
    #[test]
    fn test_edge_empty_initializer() {
        let (program, errors) = parse_source("my $x = ;");
        assert!(errors.is_empty());
        let Statement::My(stmt) = &program.statements[0];
        assert!(stmt.initializer.is_empty());
    }

    /// EDGE CASE: Keyword where a name is expected
    #[test]
    fn test_edge_keyword_as_name() {
        let (program, errors) = parse_source("my my = 1;");
        assert!(program.statements.is_empty());
        assert!(matches!(
            errors[0],
            ParseError::UnexpectedToken {
                found: TokenKind::My,
                ..
            }
        ));
    }

    /// EDGE CASE: Array and package names
    #[test]
    fn test_edge_sigiled_names() {
        let (program, errors) = parse_source("my @list = 1; my Foo::Bar = 2;");
        assert!(errors.is_empty());
        let names: Vec<&str> = program
            .statements
            .iter()
            .map(|Statement::My(stmt)| stmt.name.value.as_str())
            .collect();
        assert_eq!(names, vec!["@list", "Foo::Bar"]);
    }

    /// EDGE CASE: Nested braces inside the initializer
    #[test]
    fn test_edge_sub_initializer_stops_at_first_semicolon() {
        let (program, _) = parse_source("my $f = sub { return 1; };");
        let Statement::My(stmt) = &program.statements[0];
        let literals: Vec<&str> = stmt.initializer.iter().map(|e| e.token_literal()).collect();
        assert_eq!(literals, vec!["sub", "{", "return", "1"]);
    }

    /// EDGE CASE: Illegal token inside the initializer
    #[test]
    fn test_edge_illegal_in_initializer() {
        let (program, errors) = parse_source("my $x = 1 # 2;");
        assert_eq!(program.statements.len(), 1);
        assert_eq!(
            errors,
            vec![ParseError::IllegalToken {
                kind: TokenKind::Illegal,
                literal: "#".to_string(),
                offset: 10,
            }]
        );
        let Statement::My(stmt) = &program.statements[0];
        assert!(matches!(stmt.initializer[1], Expression::Token(_)));
    }

    /// EDGE CASE: Stray tokens outside statements
    #[test]
    fn test_edge_stray_tokens() {
        let (_, errors) = parse_source("$x ? 1 : 2;");
        assert!(errors.is_empty());
        let (_, errors) = parse_source("my $x = 1; ` ");
        assert!(matches!(
            errors.as_slice(),
            [ParseError::IllegalToken { literal, .. }] if literal == "`"
        ));
    }

    /// EDGE CASE: Unterminated statement after a good one
    #[test]
    fn test_edge_unterminated_after_valid() {
        let (program, errors) = parse_source("my $a = 1;\nmy $b = 2");
        assert_eq!(program.statements.len(), 1);
        assert_eq!(
            errors,
            vec![ParseError::MissingSemicolon {
                offset: "my $a = 1;\n".len()
            }]
        );
    }

    /// EDGE CASE: Many statements
    #[test]
    fn test_edge_many_statements() {
        let source: String = (0..500).map(|i| format!("my $v{i} = {i};\n")).collect();
        let (program, errors) = parse_source(&source);
        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 500);
    }
}
