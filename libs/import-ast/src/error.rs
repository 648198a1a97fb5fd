//! # Tree Errors
//!
//! Error shared by the stages that walk the tree.

use crate::ast::NodeKind;
use thiserror::Error;

/// A stage met a node kind it has no rule for.
///
/// The transformer raises it for statements that are already lowered, the
/// code generator for statements that were never lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported node kind: {kind}")]
pub struct UnsupportedNodeKind {
    /// Offending node kind.
    pub kind: NodeKind,
}

impl UnsupportedNodeKind {
    pub const fn new(kind: NodeKind) -> Self {
        Self { kind }
    }
}

// =============================================================================
// TESTS
// =============================================================================
