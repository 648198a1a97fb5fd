//! # Pipeline Constants
//!
//! ## Categories
//!
//! - **Keywords**: Reserved words recognized by the lexer
//! - **Lowering**: Names emitted by the transformer
//! - **Formatting**: Separators and delimiters used by the code generator

// =============================================================================
// KEYWORDS
// =============================================================================

/// Keyword that opens an import statement.
///
/// # Example
///
/// ```rust
/// use config::constants::IMPORT_KEYWORD;
/// assert_eq!(IMPORT_KEYWORD, "import");
/// ```
pub const IMPORT_KEYWORD: &str = "import";

/// Keyword that separates the specifier from the module source.
pub const FROM_KEYWORD: &str = "from";

/// Closed set of reserved words. Every other letter run is an identifier.
///
/// # Example
///
/// ```rust
/// use config::constants::KEYWORDS;
/// assert!(KEYWORDS.contains(&"from"));
/// assert!(!KEYWORDS.contains(&"require"));
/// ```
pub const KEYWORDS: [&str; 2] = [IMPORT_KEYWORD, FROM_KEYWORD];

// =============================================================================
// LOWERING
// =============================================================================

/// Declaration keyword of the emitted variable declaration.
pub const DECLARATION_KIND: &str = "var";

/// Name of the loader function the import is rewritten to call.
///
/// # Example
///
/// ```rust
/// use config::constants::LOADER_FUNCTION;
/// let call = format!("{}(\"chalk\")", LOADER_FUNCTION);
/// assert_eq!(call, "require(\"chalk\")");
/// ```
pub const LOADER_FUNCTION: &str = "require";

// =============================================================================
// FORMATTING
// =============================================================================

/// Delimiter of string literals, both on input and output.
pub const STRING_QUOTE: char = '"';

/// Statement terminator. Skipped by the lexer, appended after every call.
pub const STATEMENT_TERMINATOR: char = ';';

/// Joins top-level statements in generated output.
pub const STATEMENT_SEPARATOR: &str = "\n";

/// Joins call arguments in generated output.
pub const ARGUMENT_SEPARATOR: &str = ", ";
