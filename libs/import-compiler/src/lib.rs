//! # Import Compiler
//!
//! Compiles default import statements into `require` calls.
//!
//! ```text
//! import m from "p";   →   var m = require("p");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Parser → Transformer → Code Generator → Output Text
//! ```
//!
//! Every stage fails fast: the first error aborts compilation and no partial
//! output is produced. Each call owns its tokens and tree, so concurrent calls
//! share nothing.
//!
//! ## Usage
//!
//! ```rust
//! use import_compiler::compile;
//!
//! let js = compile("import a from \"x\";\nimport b from \"y\";").unwrap();
//! assert_eq!(js, "var a = require(\"x\");\nvar b = require(\"y\");");
//! ```
//!
//! The stages are re-exported for callers that want the intermediate forms.

pub mod error;

pub use error::CompileError;
pub use import_ast::{NodeKind, Program, UnsupportedNodeKind};
pub use import_codegen::generate;
pub use import_parser::{parse, tokenize, Context, LexError, ParseError, Token, TokenKind};
pub use import_transform::transform;

/// Compile source text to its `require` form.
///
/// ## Errors
///
/// - `CompileError::Lex` for characters outside the grammar or an
///   unterminated string
/// - `CompileError::Parse` for a malformed statement
/// - `CompileError::Transform` / `CompileError::Generate` for node kinds a
///   stage has no rule for
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = tokenize(source)?;
    let program = parse(tokens)?;
    let lowered = transform(program).map_err(CompileError::Transform)?;
    generate(&lowered).map_err(CompileError::Generate)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_single() {
        assert_eq!(
            compile("import m from \"p\";").unwrap(),
            "var m = require(\"p\");"
        );
    }

    #[test]
    fn test_compile_empty() {
        assert_eq!(compile("").unwrap(), "");
        assert_eq!(compile("  \n ;").unwrap(), "");
    }

    #[test]
    fn test_compile_without_semicolon() {
        assert_eq!(
            compile("import chalk from \"chalk\"").unwrap(),
            "var chalk = require(\"chalk\");"
        );
    }

    #[test]
    fn test_stage_errors_are_distinct() {
        assert!(matches!(compile("import m from \"p"), Err(CompileError::Lex(_))));
        assert!(matches!(compile("import m \"p\""), Err(CompileError::Parse(_))));
    }
}
