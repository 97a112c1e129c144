//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the category-to-reader
//! dispatch table and the token iterator.

use std::iter::FusedIterator;

use tracing::trace;

use crate::classify::{classify, is_letter, Category};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// A reader strategy: consumes one maximal lexeme and tags it.
#[derive(Clone, Copy)]
pub struct Reader {
    /// Name used in trace output.
    pub name: &'static str,
    /// The strategy itself.
    pub run: for<'a> fn(&mut Lexer<'a>) -> Token,
}

const READ_IDENTIFIER: Reader = Reader {
    name: "read_identifier",
    run: |lexer| lexer.read_identifier(),
};
const READ_NUMBER: Reader = Reader {
    name: "read_number",
    run: |lexer| lexer.read_number(),
};
const READ_OPERATOR: Reader = Reader {
    name: "read_operator",
    run: |lexer| lexer.read_operator(),
};
const READ_WHITESPACE: Reader = Reader {
    name: "read_whitespace",
    run: |lexer| lexer.read_whitespace(),
};
const READ_SINGLE_TOKEN: Reader = Reader {
    name: "read_single_token",
    run: |lexer| lexer.read_single_token(),
};

/// Selects the reader for a character category.
///
/// Categories without a dedicated reader fall back to
/// `read_single_token`, which also tags illegal characters.
pub fn reader_for(category: Category) -> Reader {
    match category {
        Category::Letter | Category::Sigil | Category::Colon => READ_IDENTIFIER,
        Category::Digit => READ_NUMBER,
        Category::OperatorStart => READ_OPERATOR,
        Category::Whitespace => READ_WHITESPACE,
        Category::SingleCharToken | Category::Invalid => READ_SINGLE_TOKEN,
    }
}

/// Lexer for the Simian language.
///
/// The lexer turns source text into tokens one [`Lexer::next_token`] call
/// at a time. It never fails: characters it cannot place come back as
/// [`TokenKind::Illegal`] tokens and scanning continues.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Whitespace is consumed but never returned. Once the input is
    /// exhausted every call returns `Token::eof()`.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.token_start = self.cursor.position();

            if self.cursor.is_at_end() {
                return Token::eof();
            }

            let reader = self.select_reader();
            let token = (reader.run)(self);
            debug_assert!(
                self.cursor.position() > self.token_start,
                "{} did not advance the cursor",
                reader.name
            );

            if token.kind == TokenKind::Whitespace {
                continue;
            }

            trace!(
                reader = reader.name,
                kind = %token.kind,
                offset = self.token_start,
                "token"
            );
            return token;
        }
    }

    /// Picks the reader for the current character.
    ///
    /// `*` is the one character the classifier cannot settle alone: followed
    /// by a name it starts a glob (`*glob`), otherwise it starts an operator
    /// (`*`, `**`, `*=`, `**=`).
    fn select_reader(&self) -> Reader {
        let ch = self.cursor.current_char();
        if ch == '*' {
            let next = self.cursor.peek_char();
            return if is_letter(next) || next == '_' {
                READ_IDENTIFIER
            } else {
                READ_OPERATOR
            };
        }
        reader_for(classify(ch))
    }

    /// Returns a lazy iterator over the remaining tokens.
    ///
    /// The iterator takes the lexer by value: once drained it cannot be
    /// restarted, and a second pass needs a new lexer over the same source.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting byte offset of the most recent token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns true once the source is exhausted.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

/// Iterator over the tokens of a [`Lexer`], end-of-input excluded.
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl<'a> Tokens<'a> {
    /// Returns the starting byte offset of the most recently yielded token.
    pub fn token_start(&self) -> usize {
        self.lexer.token_start()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.lexer.next_token();
        if token.is_eof() {
            self.done = true;
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Tokens<'_> {}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = Token;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}
