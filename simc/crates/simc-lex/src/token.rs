//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] tag with the exact slice of source text
//! that produced it. Tokens own their literal, so they outlive the lexer that
//! produced them.

use std::fmt;

/// The closed set of token tags produced by the lexer.
///
/// Several operators share a tag on purpose (`+` and `++` are both
/// [`TokenKind::Plus`], `,` and `=>` are both [`TokenKind::Comma`]); the
/// parser tells them apart by literal when it needs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ==================== SPECIAL ====================
    /// End of input. Carries an empty literal.
    Eof,
    /// A character no reader claims.
    Illegal,
    /// An operator-like lexeme missing from the operator table.
    Invalid,
    /// A run of whitespace. Never returned by [`crate::Lexer::next_token`].
    Whitespace,

    // ==================== ATOMS ====================
    /// Bare word or sigil-prefixed name (`foo`, `$five`, `:reader`).
    Identifier,
    /// A run of digits.
    Digit,

    // ==================== KEYWORDS ====================
    /// `my`
    My,
    /// `sub`
    Sub,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `true`
    True,
    /// `false`
    False,
    /// `class`
    Class,
    /// `field`
    Field,
    /// `method`
    Method,
    /// `state`
    State,

    // ==================== DELIMITERS ====================
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `,` and `=>`
    Comma,

    // ==================== ARITHMETIC ====================
    /// `+` and `++`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    OpModulus,
    /// `**`
    OpPower,
    /// `--`
    OpDec,
    /// `x`
    OpRepeat,
    /// `.`
    Dot,

    // ==================== COMPARISON ====================
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    OpLessThanEqual,
    /// `>=`
    OpGreaterThanEqual,
    /// `<=>`
    OpCompare,
    /// `=~`
    OpMatch,
    /// `!~`
    OpNomatch,

    // ==================== BITWISE ====================
    /// `&`
    OpBitwiseAnd,
    /// `|`
    OpBitwiseOr,
    /// `^`
    OpBitwiseXor,
    /// `~`
    OpComplement,
    /// `<<`
    OpLeftShift,
    /// `>>`
    OpRightShift,

    // ==================== LOGICAL ====================
    /// `!`
    Not,
    /// `&&`
    OpLogicalAnd,
    /// `||`
    OpLogicalOr,
    /// `//`
    OpLogicalDefinedOr,
    /// `and`
    OpLogicalAndLowPrecedence,
    /// `or`
    OpLogicalOrLowPrecedence,
    /// `xor`
    OpLogicalXorLowPrecedence,
    /// `not`
    OpLogicalNotLowPrecedence,

    // ==================== ASSIGNMENT ====================
    /// `=`
    Assign,
    /// `+=`
    OpAddAssign,
    /// `-=`
    OpSubAssign,
    /// `*=`
    OpMulAssign,
    /// `/=`
    OpDivAssign,
    /// `%=`
    OpModAssign,
    /// `**=`
    OpPowerAssign,
    /// `x=`
    OpRepeatAssign,
    /// `<<=`
    OpLeftShiftAssign,
    /// `>>=`
    OpRightShiftAssign,
    /// `&=`
    OpBitwiseAndAssign,
    /// `|=`
    OpBitwiseOrAssign,
    /// `^=`
    OpBitwiseXorAssign,
    /// `&&=`
    OpLogicalAndAssign,
    /// `||=`
    OpLogicalOrAssign,

    // ==================== MISC OPERATORS ====================
    /// `->`
    OpArrow,
    /// `..`
    OpRange,
    /// `...`
    OpRangeInclusive,
    /// `?`
    OpTriThen,
    /// `:` (only reachable through a direct operator lookup)
    OpTriElse,
}

impl TokenKind {
    /// Returns the upper-case tag name used when printing tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Invalid => "INVALID",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Digit => "DIGIT",
            TokenKind::My => "MY",
            TokenKind::Sub => "SUB",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Class => "CLASS",
            TokenKind::Field => "FIELD",
            TokenKind::Method => "METHOD",
            TokenKind::State => "STATE",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::OpModulus => "OP_MODULUS",
            TokenKind::OpPower => "OP_POWER",
            TokenKind::OpDec => "OP_DEC",
            TokenKind::OpRepeat => "OP_REPEAT",
            TokenKind::Dot => "DOT",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::OpLessThanEqual => "OP_LESS_THAN_EQUAL",
            TokenKind::OpGreaterThanEqual => "OP_GREATER_THAN_EQUAL",
            TokenKind::OpCompare => "OP_COMPARE",
            TokenKind::OpMatch => "OP_MATCH",
            TokenKind::OpNomatch => "OP_NOMATCH",
            TokenKind::OpBitwiseAnd => "OP_BITWISE_AND",
            TokenKind::OpBitwiseOr => "OP_BITWISE_OR",
            TokenKind::OpBitwiseXor => "OP_BITWISE_XOR",
            TokenKind::OpComplement => "OP_COMPLEMENT",
            TokenKind::OpLeftShift => "OP_LEFT_SHIFT",
            TokenKind::OpRightShift => "OP_RIGHT_SHIFT",
            TokenKind::Not => "NOT",
            TokenKind::OpLogicalAnd => "OP_LOGICAL_AND",
            TokenKind::OpLogicalOr => "OP_LOGICAL_OR",
            TokenKind::OpLogicalDefinedOr => "OP_LOGICAL_DEFINED_OR",
            TokenKind::OpLogicalAndLowPrecedence => "OP_LOGICAL_AND_LOW_PRECEDENCE",
            TokenKind::OpLogicalOrLowPrecedence => "OP_LOGICAL_OR_LOW_PRECEDENCE",
            TokenKind::OpLogicalXorLowPrecedence => "OP_LOGICAL_XOR_LOW_PRECEDENCE",
            TokenKind::OpLogicalNotLowPrecedence => "OP_LOGICAL_NOT_LOW_PRECEDENCE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::OpAddAssign => "OP_ADD_ASSIGN",
            TokenKind::OpSubAssign => "OP_SUB_ASSIGN",
            TokenKind::OpMulAssign => "OP_MUL_ASSIGN",
            TokenKind::OpDivAssign => "OP_DIV_ASSIGN",
            TokenKind::OpModAssign => "OP_MOD_ASSIGN",
            TokenKind::OpPowerAssign => "OP_POWER_ASSIGN",
            TokenKind::OpRepeatAssign => "OP_REPEAT_ASSIGN",
            TokenKind::OpLeftShiftAssign => "OP_LEFT_SHIFT_ASSIGN",
            TokenKind::OpRightShiftAssign => "OP_RIGHT_SHIFT_ASSIGN",
            TokenKind::OpBitwiseAndAssign => "OP_BITWISE_AND_ASSIGN",
            TokenKind::OpBitwiseOrAssign => "OP_BITWISE_OR_ASSIGN",
            TokenKind::OpBitwiseXorAssign => "OP_BITWISE_XOR_ASSIGN",
            TokenKind::OpLogicalAndAssign => "OP_LOGICAL_AND_ASSIGN",
            TokenKind::OpLogicalOrAssign => "OP_LOGICAL_OR_ASSIGN",
            TokenKind::OpArrow => "OP_ARROW",
            TokenKind::OpRange => "OP_RANGE",
            TokenKind::OpRangeInclusive => "OP_RANGE_INCLUSIVE",
            TokenKind::OpTriThen => "OP_TRI_THEN",
            TokenKind::OpTriElse => "OP_TRI_ELSE",
        }
    }

    /// Returns true for the two "could not lex this" tags.
    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Illegal | TokenKind::Invalid)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexical token.
///
/// `literal` is the exact source text consumed for the token, sigils
/// included. It is empty only for [`TokenKind::Eof`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token tag.
    pub kind: TokenKind,
    /// The source text that produced the token.
    pub literal: String,
}

impl Token {
    /// Creates a token from a kind and its source text.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input sentinel token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, String::new())
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders the token as `TYPE("literal")`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.literal)
    }
}
