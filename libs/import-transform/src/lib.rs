//! # Import Transform
//!
//! Lowers every `ImportDeclaration` into a `VariableDeclaration` initialized
//! by a loader call:
//!
//! ```text
//! import m from "p"   →   var m = require("p")
//! ```
//!
//! The specifier and source nodes are moved into the new declaration, not
//! copied. Each lowered statement takes the slot of the import it replaces.
//!
//! ## Example
//!
//! ```rust
//! use import_ast::{Identifier, ImportDeclaration, NodeKind, Program, Statement, StringLiteral};
//! use import_transform::transform;
//!
//! let program = Program::new(vec![Statement::ImportDeclaration(ImportDeclaration::new(
//!     Identifier::new("m"),
//!     StringLiteral::new("p"),
//! ))]);
//! let lowered = transform(program).unwrap();
//! assert_eq!(lowered.body[0].kind(), NodeKind::VariableDeclaration);
//! ```

use config::constants::{DECLARATION_KIND, LOADER_FUNCTION};
use import_ast::{
    CallExpression, Identifier, ImportDeclaration, Program, Statement, UnsupportedNodeKind,
    VariableDeclaration,
};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Lower every statement of `program`, keeping statement order.
///
/// ## Errors
///
/// `UnsupportedNodeKind` if a statement is not an import, which happens when
/// the program was already transformed. Lowering twice is not supported.
pub fn transform(program: Program) -> Result<Program, UnsupportedNodeKind> {
    let body = program
        .body
        .into_iter()
        .map(lower_statement)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Program::new(body))
}

// =============================================================================
// LOWERING
// =============================================================================

fn lower_statement(statement: Statement) -> Result<Statement, UnsupportedNodeKind> {
    match statement {
        Statement::ImportDeclaration(decl) => {
            Ok(Statement::VariableDeclaration(lower_import(decl)))
        }
        other @ Statement::VariableDeclaration(_) => Err(UnsupportedNodeKind::new(other.kind())),
    }
}

/// `import <specifier> from <source>` → `var <specifier> = require(<source>)`
fn lower_import(decl: ImportDeclaration) -> VariableDeclaration {
    let ImportDeclaration { specifier, source } = decl;

    VariableDeclaration {
        kind: DECLARATION_KIND.to_string(),
        id: specifier,
        init: CallExpression {
            callee: Identifier::new(LOADER_FUNCTION),
            arguments: vec![source.into()],
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================
