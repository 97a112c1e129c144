//! Parse diagnostics.

use simc_lex::TokenKind;
use thiserror::Error;

/// A problem found while parsing.
///
/// The parser never stops at the first error: every diagnostic is collected
/// and the parse continues with the next statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The next token was not the one the grammar requires.
    #[error("expected next token {expected}, got {found} ({literal:?}) at offset {offset}")]
    UnexpectedToken {
        /// Kind the parser was looking for
        expected: TokenKind,
        /// Kind actually found
        found: TokenKind,
        /// Literal text of the token found
        literal: String,
        /// Byte offset of the token found
        offset: usize,
    },

    /// The lexer produced an `ILLEGAL` or `INVALID` token.
    #[error("illegal token {literal:?} at offset {offset}")]
    IllegalToken {
        /// Either `Illegal` or `Invalid`
        kind: TokenKind,
        /// The offending text
        literal: String,
        /// Byte offset of the token
        offset: usize,
    },

    /// The input ended before the statement's closing `;`.
    #[error("missing ';' to end the statement starting at offset {offset}")]
    MissingSemicolon {
        /// Byte offset of the statement's first token
        offset: usize,
    },
}

impl ParseError {
    /// Returns the byte offset this diagnostic points at.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { offset, .. }
            | ParseError::IllegalToken { offset, .. }
            | ParseError::MissingSemicolon { offset } => *offset,
        }
    }
}
