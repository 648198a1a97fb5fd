//! # Lex and Parse Errors
//!
//! Error types for the import lexer and parser.
//!
//! ## Example
//!
//! ```rust
//! use import_parser::error::{Context, ParseError};
//!
//! let error = ParseError::UnexpectedEof { context: Context::From };
//! assert_eq!(
//!     error.to_string(),
//!     "unexpected end of input after `from`, expected string literal"
//! );
//! ```

use crate::lexer::Token;
use std::fmt;
use thiserror::Error;

// =============================================================================
// LEX ERROR
// =============================================================================

/// Errors raised while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Character that cannot start any token.
    #[error("unrecognized character '{0}'")]
    UnrecognizedChar(char),

    /// Input ended inside a string literal.
    #[error("unterminated string literal, expected closing '\"'")]
    UnterminatedString,
}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// Errors raised while parsing. The first one aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token of the wrong kind inside a statement.
    #[error("unexpected {found} after {context}, expected {}", .context.expected())]
    UnexpectedToken {
        /// Token that was found.
        found: Token,
        /// Where in the statement it was found.
        context: Context,
    },

    /// Input ended inside a statement.
    #[error("unexpected end of input after {context}, expected {}", .context.expected())]
    UnexpectedEof {
        /// Where in the statement input ended.
        context: Context,
    },

    /// Statement does not start with `import`.
    #[error("unrecognized token: {0}, expected keyword `import`")]
    UnrecognizedToken(Token),
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Position inside an import statement, named by the construct just parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// After the `import` keyword.
    Import,
    /// After the bound specifier.
    Specifier(String),
    /// After the `from` keyword.
    From,
}

impl Context {
    /// Construct expected at this position.
    pub const fn expected(&self) -> &'static str {
        match self {
            Self::Import => "identifier",
            Self::Specifier(_) => "keyword `from`",
            Self::From => "string literal",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import => write!(f, "`import`"),
            Self::Specifier(name) => write!(f, "specifier `{}`", name),
            Self::From => write!(f, "`from`"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
