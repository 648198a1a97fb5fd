//! # Config Crate
//!
//! Centralized constants for the import lowering pipeline.
//! Keywords, emitted names and output separators are defined here so the
//! lexer, transformer and code generator agree on a single spelling.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DECLARATION_KIND, LOADER_FUNCTION};
//!
//! let line = format!("{} m = {}(\"p\");", DECLARATION_KIND, LOADER_FUNCTION);
//! assert_eq!(line, "var m = require(\"p\");");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Fixed Output**: Formatting is not user-configurable

pub mod constants;

#[cfg(test)]
mod tests;
