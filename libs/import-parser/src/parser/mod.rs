//! # Import Parser
//!
//! Recursive descent parser producing a `Program` of import declarations.
//!
//! ## Grammar
//!
//! ```text
//! program       = statement*
//! statement     = "import" identifier "from" string_literal
//! ```
//!
//! ## Example
//!
//! ```rust
//! use import_parser::lexer::Lexer;
//! use import_parser::parser::Parser;
//!
//! let tokens = Lexer::new("import m from \"p\";").tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//! assert_eq!(program.len(), 1);
//! ```

mod statements;

use crate::error::{Context, ParseError};
use crate::lexer::{Keyword, Token, TokenKind};
use import_ast::Program;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for import statements.
///
/// One token of lookahead and no error recovery: the first structural error
/// aborts the parse.
pub struct Parser {
    /// Token stream.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
}

impl Parser {
    /// Create a new parser over lexer output.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse the entire token stream into a program.
    ///
    /// End of input between statements is the only terminator.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while let Some(token) = self.peek() {
            if !token.is_keyword(Keyword::Import) {
                return Err(ParseError::UnrecognizedToken(token.clone()));
            }
            body.push(self.parse_statement()?);
        }

        Ok(Program::new(body))
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token, or None at end of input.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Advance to next token.
    ///
    /// ## Returns
    ///
    /// The token that was consumed
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.current);
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    /// Consume token if it matches expected kind.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Expected token kind
    /// - `context`: Construct parsed just before, for the error message
    fn expect(&mut self, kind: TokenKind, context: Context) -> Result<&Token, ParseError> {
        match self.tokens.get(self.current) {
            Some(token) if token.kind == kind => {
                self.current += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                found: token.clone(),
                context,
            }),
            None => Err(ParseError::UnexpectedEof { context }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
