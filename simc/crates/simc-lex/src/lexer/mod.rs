//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, reader dispatch and the token iterator
//! - `identifier` - Identifier, keyword and attribute lexing
//! - `number` - Digit run lexing
//! - `operator` - Greedy operator lexing
//! - `punctuation` - Single-character delimiters and illegal characters
//! - `whitespace` - Whitespace runs

mod core;
mod identifier;
mod number;
mod operator;
mod punctuation;
mod whitespace;

pub use self::core::{reader_for, Lexer, Reader, Tokens};
