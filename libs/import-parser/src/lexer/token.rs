//! # Tokens
//!
//! Token types for the import lexer.
//!
//! ## Example
//!
//! ```rust
//! use import_parser::lexer::{Keyword, Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Keyword(Keyword::From), "from");
//! assert!(token.is_keyword(Keyword::From));
//! ```

use config::constants::{FROM_KEYWORD, IMPORT_KEYWORD};
use std::fmt;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// Tokens carry no position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Token text. For string literals the quotes are stripped.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Check if token is the given keyword.
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::StringLiteral => write!(f, "{} \"{}\"", self.kind.display(), self.text),
            _ => write!(f, "{} `{}`", self.kind.display(), self.text),
        }
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word, `import` or `from`
    Keyword(Keyword),
    /// Letter-only name like `chalk`
    Identifier,
    /// String literal like `"./local-module"`
    StringLiteral,
}

impl TokenKind {
    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword",
            Self::Identifier => "identifier",
            Self::StringLiteral => "string literal",
        }
    }
}

// =============================================================================
// KEYWORD
// =============================================================================

/// Reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Import,
    From,
}

impl Keyword {
    /// Look up a keyword by its exact spelling.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use import_parser::lexer::Keyword;
    ///
    /// assert_eq!(Keyword::from_text("import"), Some(Keyword::Import));
    /// assert_eq!(Keyword::from_text("Import"), None);
    /// ```
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            IMPORT_KEYWORD => Some(Self::Import),
            FROM_KEYWORD => Some(Self::From),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Import => IMPORT_KEYWORD,
            Self::From => FROM_KEYWORD,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
