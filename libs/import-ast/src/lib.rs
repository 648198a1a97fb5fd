//! # Import AST Crate
//!
//! Typed syntax tree shared by every stage of the import lowering pipeline.
//!
//! ## Architecture
//!
//! ```text
//! import-parser → import-ast → import-transform → import-codegen
//! ```
//!
//! The parser produces `ImportDeclaration` statements, the transformer
//! replaces each of them with a `VariableDeclaration`, and the code generator
//! prints the lowered tree.
//!
//! ## Usage
//!
//! ```rust
//! use import_ast::{Identifier, ImportDeclaration, NodeKind, Program, Statement, StringLiteral};
//!
//! let program = Program::new(vec![Statement::ImportDeclaration(ImportDeclaration::new(
//!     Identifier::new("chalk"),
//!     StringLiteral::new("chalk"),
//! ))]);
//! assert_eq!(program.body[0].kind(), NodeKind::ImportDeclaration);
//! ```
//!
//! ## Design Principles
//!
//! - **Closed Node Set**: Statements and expressions are enums, so every
//!   stage matches exhaustively
//! - **Single Owner**: Each node has exactly one parent, no sharing or cycles

pub mod ast;
pub mod error;

pub use ast::*;
pub use error::UnsupportedNodeKind;
