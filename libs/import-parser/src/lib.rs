//! # Import Parser
//!
//! Lexer and parser for default import statements.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Program
//! ```
//!
//! ## Example
//!
//! ```rust
//! use import_parser::{parse, tokenize};
//!
//! let tokens = tokenize("import chalk from \"chalk\";").unwrap();
//! let program = parse(tokens).unwrap();
//! assert_eq!(program.len(), 1);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export public API
pub use error::{Context, LexError, ParseError};
pub use lexer::{Keyword, Token, TokenKind};

use import_ast::Program;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Tokenize source text.
///
/// ## Errors
///
/// `LexError` on the first character that cannot start a token, or on a
/// string literal missing its closing quote.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    lexer::Lexer::new(source).tokenize()
}

/// Parse a token sequence into a program of import declarations.
///
/// ## Errors
///
/// `ParseError` on the first structural deviation. No partial program is
/// returned.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    parser::Parser::new(tokens).parse()
}
