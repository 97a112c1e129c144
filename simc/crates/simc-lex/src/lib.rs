//! simc-lex - Lexical Analyzer for the Simian Programming Language
//!
//! This crate provides the lexer (tokenizer) for Simian, a small
//! Perl-flavored scripting language. It transforms source text into a
//! stream of tokens that can be consumed by the parser.
//!
//! # Example Usage
//!
//! ```
//! use simc_lex::{Lexer, Token, TokenKind};
//!
//! let source = "my $x = 5;";
//!
//! // Pull tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::My, "my"));
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Identifier, "$x"));
//!
//! // Or drain the whole stream
//! for token in Lexer::new(source).tokens() {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`classify`] - Character classification and keyword/operator tables
//! - [`cursor`] - Character cursor for source traversal
//! - [`lexer`] - Reader strategies and the main lexer
//!
//! # How a token is read
//!
//! The lexer classifies the current character (letter, digit, sigil,
//! whitespace, operator start, colon, delimiter, invalid), picks the reader
//! registered for that category, and lets the reader consume a maximal
//! lexeme:
//!
//! - **Identifiers**: letters, sigils (`$ @ % & *`), digits, `_` and `:`;
//!   `$five`, `@array`, `*glob` and `:reader` are single tokens. Exact
//!   keyword matches (`my`, `sub`, `class`, `field`, `method`, `state`,
//!   `if`, `else`, `return`, `true`, `false`) get their own tag.
//! - **Numbers**: runs of digits, always tagged `DIGIT`.
//! - **Operators**: longest match against the operator table (`=`, `==`,
//!   `!=`, `**`, `**=`, `<=>`, `...`).
//! - **Delimiters**: `{ } ( ) [ ] ;` and a lone `*`.
//! - **Whitespace**: consumed and dropped.
//!
//! Anything else becomes an `ILLEGAL` token; the lexer never stops early.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use classify::{lookup_keyword, lookup_operator, Category};
pub use cursor::Cursor;
pub use lexer::{Lexer, Tokens};
pub use token::{Token, TokenKind};
