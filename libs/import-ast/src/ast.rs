//! # Syntax Tree Nodes
//!
//! Node types for import statements and their lowered form.
//!
//! Statements and expressions serialize with a `"type"` tag naming the node
//! kind, e.g. `{"type": "ImportDeclaration", "specifier": {...}, ...}`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PROGRAM
// =============================================================================

/// Root node. Statements are kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Top-level statements.
    pub body: Vec<Statement>,
}

impl Program {
    /// Create a program from its statements.
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }

    /// Number of top-level statements.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the program has no statements.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

// =============================================================================
// STATEMENTS
// =============================================================================

/// A top-level statement.
///
/// `ImportDeclaration` only exists before lowering and
/// `VariableDeclaration` only after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// `import <specifier> from "<source>"`
    ImportDeclaration(ImportDeclaration),
    /// `var <id> = <init>`
    VariableDeclaration(VariableDeclaration),
}

impl Statement {
    /// Kind of this statement.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::ImportDeclaration(_) => NodeKind::ImportDeclaration,
            Self::VariableDeclaration(_) => NodeKind::VariableDeclaration,
        }
    }
}

/// Default import of a single module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    /// Bound name.
    pub specifier: Identifier,
    /// Module being imported.
    pub source: StringLiteral,
}

impl ImportDeclaration {
    /// Create an import declaration.
    pub fn new(specifier: Identifier, source: StringLiteral) -> Self {
        Self { specifier, source }
    }
}

/// Variable declaration initialized by a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// Declaration keyword, e.g. `var`.
    pub kind: String,
    /// Declared name.
    pub id: Identifier,
    /// Initializer.
    pub init: CallExpression,
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// An expression in argument position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// Bare name.
    Identifier(Identifier),
    /// Quoted string.
    StringLiteral(StringLiteral),
}

impl Expression {
    /// Kind of this expression.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Identifier(_) => NodeKind::Identifier,
            Self::StringLiteral(_) => NodeKind::StringLiteral,
        }
    }
}

impl From<Identifier> for Expression {
    fn from(ident: Identifier) -> Self {
        Self::Identifier(ident)
    }
}

impl From<StringLiteral> for Expression {
    fn from(lit: StringLiteral) -> Self {
        Self::StringLiteral(lit)
    }
}

/// Call of a named function, `callee(arguments...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    /// Function being called.
    pub callee: Identifier,
    /// Arguments in call order.
    pub arguments: Vec<Expression>,
}

/// A name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A string literal. `value` holds the contents without quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

// =============================================================================
// NODE KIND
// =============================================================================

/// Every kind of node the tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    Identifier,
    StringLiteral,
    ImportDeclaration,
    VariableDeclaration,
    CallExpression,
}

impl NodeKind {
    /// Node type name used in diagnostics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::Identifier => "Identifier",
            Self::StringLiteral => "StringLiteral",
            Self::ImportDeclaration => "ImportDeclaration",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::CallExpression => "CallExpression",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
