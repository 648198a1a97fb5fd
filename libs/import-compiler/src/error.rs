//! # Compile Errors
//!
//! One variant per fallible stage, so callers can tell lexical, syntactic
//! and traversal failures apart.

use import_ast::UnsupportedNodeKind;
use import_parser::{LexError, ParseError};
use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Lexer rejected the input.
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    /// Parser rejected the token sequence.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Transformer met a statement it cannot lower.
    #[error("Transform error: {0}")]
    Transform(UnsupportedNodeKind),

    /// Code generator met a statement it cannot print.
    #[error("Codegen error: {0}")]
    Generate(UnsupportedNodeKind),
}

// =============================================================================
// TESTS
// =============================================================================
