//! # Statement Parsing
//!
//! ## Grammar
//!
//! ```text
//! statement = "import" identifier "from" string_literal
//! ```

use super::Parser;
use crate::error::{Context, ParseError};
use crate::lexer::{Keyword, TokenKind};
use import_ast::{Identifier, ImportDeclaration, Statement, StringLiteral};

impl Parser {
    /// Parse a statement. The current token is the `import` keyword.
    pub(super) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.parse_import_declaration()
            .map(Statement::ImportDeclaration)
    }

    /// Parse an import declaration.
    ///
    /// ## Example
    ///
    /// ```text
    /// import chalk from "chalk";
    /// import mod from "./local-module"
    /// ```
    fn parse_import_declaration(&mut self) -> Result<ImportDeclaration, ParseError> {
        self.advance(); // import

        let name = self.expect(TokenKind::Identifier, Context::Import)?.text.clone();
        let specifier = Identifier::new(name);

        self.expect(
            TokenKind::Keyword(Keyword::From),
            Context::Specifier(specifier.name.clone()),
        )?;

        let value = self.expect(TokenKind::StringLiteral, Context::From)?.text.clone();
        let source = StringLiteral::new(value);

        Ok(ImportDeclaration::new(specifier, source))
    }
}
