//! # Tests for Config Constants

use crate::constants::*;

// =============================================================================
// KEYWORD TESTS
// =============================================================================

#[test]
fn test_keywords_are_letter_only() {
    // The lexer only groups ASCII letters, so a keyword with any other
    // character could never be produced.
    for keyword in KEYWORDS {
        assert!(
            keyword.chars().all(|c| c.is_ascii_alphabetic()),
            "keyword {keyword:?} must be letters only"
        );
    }
}

#[test]
fn test_keywords_are_distinct() {
    assert_ne!(IMPORT_KEYWORD, FROM_KEYWORD);
}

// =============================================================================
// LOWERING TESTS
// =============================================================================

#[test]
fn test_lowering_names_are_not_keywords() {
    assert!(!KEYWORDS.contains(&DECLARATION_KIND));
    assert!(!KEYWORDS.contains(&LOADER_FUNCTION));
}

// =============================================================================
// FORMATTING TESTS
// =============================================================================

#[test]
fn test_separators() {
    assert_eq!(STATEMENT_SEPARATOR, "\n");
    assert_eq!(ARGUMENT_SEPARATOR, ", ");
    assert_eq!(STRING_QUOTE, '"');
    assert_eq!(STATEMENT_TERMINATOR, ';');
}
