//! AST node definitions.

use std::fmt;

use simc_lex::{Token, TokenKind};

/// Common behavior of every AST node.
pub trait Node {
    /// Returns the literal of the token the node was built from.
    fn token_literal(&self) -> &str;
}

/// AST root: the statements of a source file, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Parsed statements
    pub statements: Vec<Statement>,
}

impl Node for Program {
    /// The literal of the first statement, or `""` for an empty program.
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Variable declaration: `my $x = ...;`
    My(MyStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::My(stmt) => stmt.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::My(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// `my <name> = <initializer>;`
///
/// The initializer is kept as the flat list of tokens between `=` and `;`;
/// no expression structure is built yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyStatement {
    /// The `my` keyword token
    pub token: Token,

    /// Declared variable
    pub name: Identifier,

    /// Tokens of the initializer
    pub initializer: Vec<Expression>,
}

impl Node for MyStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for MyStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} =", self.token.literal, self.name.value)?;
        for expr in &self.initializer {
            write!(f, " {}", expr.token_literal())?;
        }
        write!(f, ";")
    }
}

/// A name such as `$x`, `@list` or `Foo::Bar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The `IDENTIFIER` token
    pub token: Token,

    /// The name itself
    pub value: String,
}

impl Identifier {
    /// Builds an identifier from its token.
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

/// A run of digits, kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    /// The `DIGIT` token
    pub token: Token,

    /// The digits
    pub value: String,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

/// An initializer element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Name reference
    Identifier(Identifier),

    /// Integer literal
    IntegerLiteral(IntegerLiteral),

    /// Any other token, uninterpreted
    Token(Token),
}

impl Expression {
    /// Wraps a token in the matching expression node.
    ///
    /// # Example
    ///
    /// ```
    /// use simc_lex::{Token, TokenKind};
    /// use simc_par::ast::{Expression, Node};
    ///
    /// let expr = Expression::from_token(Token::new(TokenKind::Digit, "42"));
    /// assert!(matches!(expr, Expression::IntegerLiteral(_)));
    /// assert_eq!(expr.token_literal(), "42");
    /// ```
    pub fn from_token(token: Token) -> Self {
        match token.kind {
            TokenKind::Identifier => Expression::Identifier(Identifier::new(token)),
            TokenKind::Digit => {
                let value = token.literal.clone();
                Expression::IntegerLiteral(IntegerLiteral { token, value })
            },
            _ => Expression::Token(token),
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::IntegerLiteral(lit) => lit.token_literal(),
            Expression::Token(token) => &token.literal,
        }
    }
}
