//! Character classification and lexeme lookup tables.
//!
//! Everything here is pure: the predicates look at a single decoded
//! character and the lookups at a finished (or growing) lexeme. None of it
//! touches scanner state, which is what lets the lexer choose a reader from
//! one character of input.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::token::TokenKind;

/// Coarse category of a single source character.
///
/// The lexer keys its reader dispatch table on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Alphabetic character or underscore.
    Letter,
    /// Numeric character.
    Digit,
    /// One of `$ @ % &` (`*` is claimed earlier as a delimiter).
    Sigil,
    /// Any Unicode whitespace.
    Whitespace,
    /// First character of some operator.
    OperatorStart,
    /// `:`, the start of an attribute such as `:reader`.
    Colon,
    /// A delimiter that always forms a one-character token.
    SingleCharToken,
    /// Nothing claims this character.
    Invalid,
}

/// Reserved words. Matching is exact and case-sensitive.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("my", TokenKind::My),
        ("sub", TokenKind::Sub),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("class", TokenKind::Class),
        ("field", TokenKind::Field),
        ("method", TokenKind::Method),
        ("state", TokenKind::State),
    ]
    .into_iter()
    .collect()
});

/// Operator lexemes and their tags.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("->", TokenKind::OpArrow),
    ("++", TokenKind::Plus),
    ("--", TokenKind::OpDec),
    ("**", TokenKind::OpPower),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("=~", TokenKind::OpMatch),
    ("!~", TokenKind::OpNomatch),
    ("/", TokenKind::Slash),
    ("*", TokenKind::Asterisk),
    ("%", TokenKind::OpModulus),
    ("x", TokenKind::OpRepeat),
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    ("<=", TokenKind::OpLessThanEqual),
    (">=", TokenKind::OpGreaterThanEqual),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("<=>", TokenKind::OpCompare),
    ("&", TokenKind::OpBitwiseAnd),
    ("|", TokenKind::OpBitwiseOr),
    ("^", TokenKind::OpBitwiseXor),
    ("<<", TokenKind::OpLeftShift),
    (">>", TokenKind::OpRightShift),
    ("~", TokenKind::OpComplement),
    ("!", TokenKind::Not),
    ("&&", TokenKind::OpLogicalAnd),
    ("||", TokenKind::OpLogicalOr),
    ("//", TokenKind::OpLogicalDefinedOr),
    ("and", TokenKind::OpLogicalAndLowPrecedence),
    ("or", TokenKind::OpLogicalOrLowPrecedence),
    ("xor", TokenKind::OpLogicalXorLowPrecedence),
    ("not", TokenKind::OpLogicalNotLowPrecedence),
    ("=", TokenKind::Assign),
    ("+=", TokenKind::OpAddAssign),
    ("-=", TokenKind::OpSubAssign),
    ("*=", TokenKind::OpMulAssign),
    ("/=", TokenKind::OpDivAssign),
    ("%=", TokenKind::OpModAssign),
    ("**=", TokenKind::OpPowerAssign),
    ("x=", TokenKind::OpRepeatAssign),
    ("<<=", TokenKind::OpLeftShiftAssign),
    (">>=", TokenKind::OpRightShiftAssign),
    ("&=", TokenKind::OpBitwiseAndAssign),
    ("|=", TokenKind::OpBitwiseOrAssign),
    ("^=", TokenKind::OpBitwiseXorAssign),
    ("&&=", TokenKind::OpLogicalAndAssign),
    ("||=", TokenKind::OpLogicalOrAssign),
    (".", TokenKind::Dot),
    ("..", TokenKind::OpRange),
    ("...", TokenKind::OpRangeInclusive),
    ("?", TokenKind::OpTriThen),
    (":", TokenKind::OpTriElse),
    (",", TokenKind::Comma),
    ("=>", TokenKind::Comma),
];

static OPERATOR_TABLE: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| OPERATORS.iter().copied().collect());

/// Every non-empty prefix of every operator, the operators themselves included.
static OPERATOR_PREFIXES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    let mut prefixes = FxHashSet::default();
    for &(op, _) in OPERATORS {
        for (idx, ch) in op.char_indices() {
            prefixes.insert(&op[..idx + ch.len_utf8()]);
        }
    }
    prefixes
});

/// Classifies a single character.
///
/// Precedence is fixed: delimiters, then `:`, then letters, sigils, digits,
/// whitespace and finally operator starts.
///
/// # Example
///
/// ```
/// use simc_lex::classify::{classify, Category};
///
/// assert_eq!(classify('m'), Category::Letter);
/// assert_eq!(classify('$'), Category::Sigil);
/// assert_eq!(classify(';'), Category::SingleCharToken);
/// assert_eq!(classify('='), Category::OperatorStart);
/// assert_eq!(classify('#'), Category::Invalid);
/// ```
pub fn classify(ch: char) -> Category {
    match ch {
        '{' | '}' | '(' | ')' | '[' | ']' | ';' | '*' => Category::SingleCharToken,
        ':' => Category::Colon,
        c if is_letter(c) || c == '_' => Category::Letter,
        c if is_sigil(c) => Category::Sigil,
        c if is_digit(c) => Category::Digit,
        c if is_whitespace(c) => Category::Whitespace,
        c if is_operator_start(c) => Category::OperatorStart,
        _ => Category::Invalid,
    }
}

/// Checks if a character is a Unicode letter.
///
/// ```
/// use simc_lex::classify::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('é'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('1'));
/// ```
pub fn is_letter(ch: char) -> bool {
    ch.is_alphabetic()
}

/// Checks if a character is a decimal digit `0`-`9`.
///
/// Other numeric code points such as `½` or `²` are not digits, so every
/// `DIGIT` lexeme parses as a base-10 integer.
///
/// ```
/// use simc_lex::classify::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('½'));
/// assert!(!is_digit('²'));
/// ```
pub fn is_digit(ch: char) -> bool {
    ch.to_digit(10).is_some()
}

/// Checks if a character is a sigil: `$ @ % & *`.
///
/// ```
/// use simc_lex::classify::is_sigil;
///
/// assert!(is_sigil('$'));
/// assert!(is_sigil('*'));
/// assert!(!is_sigil('#'));
/// ```
pub fn is_sigil(ch: char) -> bool {
    matches!(ch, '$' | '@' | '%' | '&' | '*')
}

/// Checks if a character is Unicode whitespace.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Checks if a character may continue an identifier: letters, sigils,
/// digits, `_` and `:`.
pub fn is_identifier_continue(ch: char) -> bool {
    is_letter(ch) || is_sigil(ch) || is_digit(ch) || ch == '_' || ch == ':'
}

/// Checks if a character begins at least one operator.
pub fn is_operator_start(ch: char) -> bool {
    let mut buf = [0u8; 4];
    is_operator_prefix(ch.encode_utf8(&mut buf))
}

/// Returns the keyword tag for a lexeme, or [`TokenKind::Identifier`].
///
/// ```
/// use simc_lex::classify::lookup_keyword;
/// use simc_lex::TokenKind;
///
/// assert_eq!(lookup_keyword("my"), TokenKind::My);
/// assert_eq!(lookup_keyword("myvar"), TokenKind::Identifier);
/// assert_eq!(lookup_keyword("My"), TokenKind::Identifier);
/// ```
pub fn lookup_keyword(lexeme: &str) -> TokenKind {
    KEYWORDS
        .get(lexeme)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

/// Returns the operator tag for a lexeme, or [`TokenKind::Invalid`].
///
/// ```
/// use simc_lex::classify::lookup_operator;
/// use simc_lex::TokenKind;
///
/// assert_eq!(lookup_operator("=="), TokenKind::Equal);
/// assert_eq!(lookup_operator("=!"), TokenKind::Invalid);
/// ```
pub fn lookup_operator(lexeme: &str) -> TokenKind {
    OPERATOR_TABLE
        .get(lexeme)
        .copied()
        .unwrap_or(TokenKind::Invalid)
}

/// Checks if a lexeme is an operator or the beginning of one.
///
/// The operator reader keeps consuming while this holds, which yields the
/// longest match without backtracking.
pub fn is_operator_prefix(lexeme: &str) -> bool {
    OPERATOR_PREFIXES.contains(lexeme)
}

/// Returns the tag for a character read on its own, or
/// [`TokenKind::Illegal`] if it is not a delimiter.
pub fn lookup_single_token(ch: char) -> TokenKind {
    match ch {
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        ';' => TokenKind::Semicolon,
        '*' => TokenKind::Asterisk,
        _ => TokenKind::Illegal,
    }
}
