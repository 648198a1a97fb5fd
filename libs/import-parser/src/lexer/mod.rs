//! # Import Lexer
//!
//! Tokenizes source text into keywords, identifiers and string literals.
//!
//! Whitespace and `;` are skipped. A `"` opens a string literal that runs
//! verbatim to the next `"`. A run of ASCII letters is a keyword if it spells
//! `import` or `from`, otherwise an identifier. Anything else is an error.
//!
//! ## Example
//!
//! ```rust
//! use import_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("import m from \"p\";").tokenize().unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[1].kind, TokenKind::Identifier);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Keyword, Token, TokenKind};

use crate::error::LexError;
use config::constants::{STATEMENT_TERMINATOR, STRING_QUOTE};

// =============================================================================
// LEXER
// =============================================================================

/// Import lexer.
///
/// Single left-to-right scan, no backtracking.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Tokens in source order, or the first lexical error. No partial token
    /// sequence is returned on failure.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.cursor.peek() {
            if c.is_whitespace() || c == STATEMENT_TERMINATOR {
                self.cursor.advance();
                continue;
            }
            self.scan_token(c)?;
        }

        Ok(self.tokens)
    }

    /// Scan a single token starting at `c`.
    fn scan_token(&mut self, c: char) -> Result<(), LexError> {
        match c {
            STRING_QUOTE => self.scan_string(),
            'a'..='z' | 'A'..='Z' => {
                self.scan_word();
                Ok(())
            }
            other => Err(LexError::UnrecognizedChar(other)),
        }
    }

    /// Scan a string literal. No escape sequences.
    fn scan_string(&mut self) -> Result<(), LexError> {
        self.cursor.advance(); // Opening quote
        let start = self.cursor.offset();

        self.cursor.advance_while(|c| c != STRING_QUOTE);
        if self.cursor.is_eof() {
            return Err(LexError::UnterminatedString);
        }

        let value = self.cursor.slice_from(start);
        self.cursor.advance(); // Closing quote

        self.tokens.push(Token::new(TokenKind::StringLiteral, value));
        Ok(())
    }

    /// Scan a keyword or identifier.
    fn scan_word(&mut self) {
        let start = self.cursor.offset();
        self.cursor.advance_while(|c| c.is_ascii_alphabetic());

        let text = self.cursor.slice_from(start);
        let kind = Keyword::from_text(text).map_or(TokenKind::Identifier, TokenKind::Keyword);

        self.tokens.push(Token::new(kind, text));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
        Lexer::new(source).tokenize()
    }

    #[test]
    fn test_tokenize_import() {
        let tokens = tokenize("import m from \"p\";").unwrap();

        // import, m, from, "p" = 4 tokens, the semicolon is dropped
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Import));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "m");
        assert_eq!(tokens[2].kind, TokenKind::Keyword(Keyword::From));
        assert_eq!(tokens[3].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[3].text, "p");
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \n\t;;").unwrap().is_empty());
    }

    #[test]
    fn test_string_keeps_contents_verbatim() {
        let tokens = tokenize("\"./local-module 1@x\"").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "./local-module 1@x");
    }

    #[test]
    fn test_empty_string() {
        let tokens = tokenize("\"\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, "");
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let tokens = tokenize("Import FROM").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_word_is_maximal_letter_run() {
        let tokens = tokenize("importer fromage").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "importer");
        assert_eq!(tokens[1].text, "fromage");
    }

    #[test]
    fn test_word_followed_by_quote() {
        // The character right after a word is scanned, not skipped.
        let tokens = tokenize("from\"p\"").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(tokenize("import m from \"p;"), Err(LexError::UnterminatedString));
    }

    #[test]
    fn test_unrecognized_char() {
        assert_eq!(tokenize("import @m"), Err(LexError::UnrecognizedChar('@')));
    }

    #[test]
    fn test_digits_and_underscores_are_rejected() {
        assert_eq!(tokenize("m1"), Err(LexError::UnrecognizedChar('1')));
        assert_eq!(tokenize("my_mod"), Err(LexError::UnrecognizedChar('_')));
    }

    #[test]
    fn test_non_ascii_letter_is_rejected() {
        assert_eq!(tokenize("é"), Err(LexError::UnrecognizedChar('é')));
    }
}
