//! # Import Code Generator
//!
//! Prints a lowered program back to source text with fixed formatting:
//!
//! ```text
//! Program              statements joined by "\n"
//! VariableDeclaration  <kind> <id> = <init>
//! CallExpression       <callee>(<arg>, <arg>);
//! Identifier           <name>
//! StringLiteral        "<value>"
//! ```
//!
//! String values are wrapped in quotes as-is. A value containing `"` prints
//! as broken output; escaping is not performed.
//!
//! ## Example
//!
//! ```rust
//! use import_ast::{CallExpression, Identifier, Program, Statement, StringLiteral, VariableDeclaration};
//! use import_codegen::generate;
//!
//! let program = Program::new(vec![Statement::VariableDeclaration(VariableDeclaration {
//!     kind: "var".to_string(),
//!     id: Identifier::new("m"),
//!     init: CallExpression {
//!         callee: Identifier::new("require"),
//!         arguments: vec![StringLiteral::new("p").into()],
//!     },
//! })]);
//! assert_eq!(generate(&program).unwrap(), "var m = require(\"p\");");
//! ```

use config::constants::{
    ARGUMENT_SEPARATOR, STATEMENT_SEPARATOR, STATEMENT_TERMINATOR, STRING_QUOTE,
};
use import_ast::{
    CallExpression, Expression, Identifier, Program, Statement, StringLiteral,
    UnsupportedNodeKind, VariableDeclaration,
};

/// Print a program, one line per statement.
///
/// ## Errors
///
/// `UnsupportedNodeKind` if a statement was never lowered: there is no
/// output form for an `ImportDeclaration`.
pub fn generate(program: &Program) -> Result<String, UnsupportedNodeKind> {
    let lines = program
        .body
        .iter()
        .map(generate_statement)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join(STATEMENT_SEPARATOR))
}

fn generate_statement(stmt: &Statement) -> Result<String, UnsupportedNodeKind> {
    match stmt {
        Statement::VariableDeclaration(decl) => Ok(generate_variable_declaration(decl)),
        Statement::ImportDeclaration(_) => Err(UnsupportedNodeKind::new(stmt.kind())),
    }
}

fn generate_variable_declaration(decl: &VariableDeclaration) -> String {
    format!(
        "{} {} = {}",
        decl.kind,
        generate_identifier(&decl.id),
        generate_call(&decl.init)
    )
}

fn generate_call(call: &CallExpression) -> String {
    let args = call
        .arguments
        .iter()
        .map(generate_expression)
        .collect::<Vec<_>>()
        .join(ARGUMENT_SEPARATOR);

    format!(
        "{}({}){}",
        generate_identifier(&call.callee),
        args,
        STATEMENT_TERMINATOR
    )
}

fn generate_expression(expr: &Expression) -> String {
    match expr {
        Expression::Identifier(ident) => generate_identifier(ident),
        Expression::StringLiteral(lit) => generate_string(lit),
    }
}

fn generate_identifier(ident: &Identifier) -> String {
    ident.name.clone()
}

fn generate_string(lit: &StringLiteral) -> String {
    format!("{STRING_QUOTE}{}{STRING_QUOTE}", lit.value)
}

// =============================================================================
// TESTS
// =============================================================================
