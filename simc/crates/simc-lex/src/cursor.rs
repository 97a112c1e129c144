//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which holds the only mutable
//! state of a scan: the byte offset of the current character, the byte
//! offset of the next one, and the current character itself. Offsets are
//! byte offsets into a `&str`, advanced by the UTF-8 width of each
//! character, so every slice taken from the cursor lands on a char boundary.

/// Sentinel returned for any read past the end of the source.
pub const EOF_CHAR: char = '\0';

/// A forward-only cursor over source text.
///
/// `read_position` always equals `position` plus the UTF-8 width of the
/// current character (the sentinel counts as one byte). `position` never
/// decreases.
///
/// # Example
///
/// ```
/// use simc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("my $x");
///
/// assert_eq!(cursor.current_char(), 'm');
/// cursor.read_char();
/// assert_eq!(cursor.current_char(), 'y');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the current character.
    position: usize,

    /// Byte offset of the character after the current one.
    read_position: usize,

    /// The current character, or [`EOF_CHAR`] at the end.
    ch: char,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor and primes it with the first character.
    ///
    /// # Example
    ///
    /// ```
    /// use simc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert!(cursor.is_at_end());
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            ch: EOF_CHAR,
        };
        cursor.read_char();
        cursor
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.ch
    }

    /// Returns the character after the current one without consuming it.
    ///
    /// Returns `'\0'` instead of reading past the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use simc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_char(), 'b');
    ///
    /// let cursor = Cursor::new("a");
    /// assert_eq!(cursor.peek_char(), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self) -> char {
        self.char_at(self.read_position)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> char {
        if pos >= self.source.len() {
            return EOF_CHAR;
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source[pos..].chars().next().unwrap_or(EOF_CHAR)
    }

    /// Moves to the next character.
    ///
    /// Does nothing once the cursor is at the end, so calling it repeatedly
    /// past the end is harmless.
    #[inline]
    pub fn read_char(&mut self) {
        if self.position >= self.source.len() && self.read_position > self.position {
            return;
        }

        self.ch = self.char_at(self.read_position);
        self.position = self.read_position.min(self.source.len());
        self.read_position = self.position + self.ch.len_utf8();
    }

    /// Returns true once every character has been consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use simc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.read_char();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes characters while `check` accepts the current one and
    /// returns the consumed slice.
    ///
    /// # Example
    ///
    /// ```
    /// use simc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123+4");
    /// assert_eq!(cursor.read_sequence(|c| c.is_ascii_digit()), "123");
    /// assert_eq!(cursor.current_char(), '+');
    /// ```
    pub fn read_sequence(&mut self, mut check: impl FnMut(char) -> bool) -> &'a str {
        let start = self.position;
        while !self.is_at_end() && check(self.ch) {
            self.read_char();
        }
        self.slice_from(start)
    }

    /// Returns the source from `start` up to and including the current
    /// character. At the end of the source this is the same as
    /// [`Cursor::slice_from`].
    pub fn slice_through_current(&self, start: usize) -> &'a str {
        let end = self.read_position.min(self.source.len());
        &self.source[start..end]
    }

    /// Returns the source from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use simc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("my $x");
    /// let start = cursor.position();
    /// cursor.read_char();
    /// cursor.read_char();
    /// assert_eq!(cursor.slice_from(start), "my");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the byte offset of the current character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte offset of the next character.
    pub fn read_position(&self) -> usize {
        self.read_position
    }
}
