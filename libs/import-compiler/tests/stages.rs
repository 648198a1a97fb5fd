use import_compiler::{generate, parse, tokenize, transform, CompileError, NodeKind};

#[test]
fn stages_compose_like_compile() {
    let src = "import chalk from \"chalk\";";
    let tokens = tokenize(src).unwrap();
    let program = parse(tokens).unwrap();
    let lowered = transform(program).unwrap();
    assert_eq!(generate(&lowered).unwrap(), "var chalk = require(\"chalk\");");
}

#[test]
fn parsed_tree_serializes_with_node_types() {
    let program = parse(tokenize("import chalk from \"chalk\";").unwrap()).unwrap();
    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(json["body"][0]["type"], "ImportDeclaration");
    assert_eq!(json["body"][0]["specifier"]["name"], "chalk");
}

#[test]
fn lowered_tree_serializes_with_node_types() {
    let program = parse(tokenize("import m from \"p\";").unwrap()).unwrap();
    let json = serde_json::to_value(transform(program).unwrap()).unwrap();

    let decl = &json["body"][0];
    assert_eq!(decl["type"], "VariableDeclaration");
    assert_eq!(decl["kind"], "var");
    assert_eq!(decl["id"]["name"], "m");
    assert_eq!(decl["init"]["callee"]["name"], "require");
    assert_eq!(decl["init"]["arguments"][0]["type"], "StringLiteral");
    assert_eq!(decl["init"]["arguments"][0]["value"], "p");
}

#[test]
fn generating_untransformed_tree_fails() {
    let program = parse(tokenize("import m from \"p\";").unwrap()).unwrap();
    let err = generate(&program).map_err(CompileError::Generate).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Codegen error: unsupported node kind: ImportDeclaration"
    );
    match err {
        CompileError::Generate(inner) => assert_eq!(inner.kind, NodeKind::ImportDeclaration),
        other => panic!("expected codegen error, got {other:?}"),
    }
}
