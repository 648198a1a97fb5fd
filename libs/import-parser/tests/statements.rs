use import_parser::{parse, tokenize, Context, LexError, ParseError};
use import_ast::Statement;

#[test]
fn each_statement_consumes_four_tokens() {
    let src = "import a from \"x\"; import b from \"y\"; import c from \"z\";";
    let tokens = tokenize(src).unwrap();
    assert_eq!(tokens.len(), 12);
    let program = parse(tokens).unwrap();
    assert_eq!(program.len(), 3);
}

#[test]
fn parses_statements_split_across_lines() {
    let src = "import \n                        mod from \n  \"./local-module\"\n  import chalk from \"chalk\"";
    let program = parse(tokenize(src).unwrap()).unwrap();
    match &program.body[..] {
        [Statement::ImportDeclaration(first), Statement::ImportDeclaration(second)] => {
            assert_eq!(first.specifier.name, "mod");
            assert_eq!(first.source.value, "./local-module");
            assert_eq!(second.specifier.name, "chalk");
        }
        other => panic!("unexpected statements: {:?}", other),
    }
}

#[test]
fn lex_errors_come_before_parse_errors() {
    // A stray `from` would be a parse error, but the lexer stops first.
    let err = tokenize("from \"unterminated").unwrap_err();
    assert_eq!(err, LexError::UnterminatedString);
}

#[test]
fn error_messages_name_the_expected_construct() {
    let err = parse(tokenize("import m \"p\"").unwrap()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { context: Context::Specifier(_), .. }));
    assert_eq!(
        err.to_string(),
        "unexpected string literal \"p\" after specifier `m`, expected keyword `from`"
    );
}
