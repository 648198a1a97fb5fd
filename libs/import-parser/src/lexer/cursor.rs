//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Tracks the byte offset so scanned runs can be sliced from the source.
//!
//! ## Example
//!
//! ```rust
//! use import_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("import");
//! assert_eq!(cursor.peek(), Some('i'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('m'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor over source text.
///
/// Moves forward only; the lexer never backtracks.
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self { source, byte: 0 }
    }

    /// Current byte offset into the source.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use import_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("é;");
    /// cursor.advance();
    /// assert_eq!(cursor.offset(), 2);
    /// ```
    pub fn offset(&self) -> usize {
        self.byte
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    ///
    /// ## Returns
    ///
    /// Current character or None if at end of input
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at end of input
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use import_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("from \"x\"");
    /// cursor.advance_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.peek(), Some(' '));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Source text between `start` and the current offset.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
