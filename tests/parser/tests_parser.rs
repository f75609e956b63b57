//! Parser tests: tree shape, losslessness and error recovery.

use rstest::rstest;
use slim_enum::parser::{
    AstNode, CallExpr, Expr, SourceFile, SwitchStmt, SyntaxKind, TypeDecl, parse,
};

use crate::helpers::source_fixtures::{ALL_GROUPS, COLOR};

fn count(source: &str, kind: SyntaxKind) -> usize {
    parse(source)
        .syntax()
        .descendants()
        .filter(|n| n.kind() == kind)
        .count()
}

#[test]
fn test_fixtures_parse_cleanly() {
    for (path, source) in ALL_GROUPS {
        let parse = parse(source);
        assert!(parse.ok(), "Parse errors in '{}': {:?}", path, parse.errors);
    }
}

#[rstest]
#[case("")]
#[case("class A { }")]
#[case("@interface Color { int RED = 0, GREEN = 1; }")]
#[case("class A { void f() { switch (c) { case A.X, A.Y: break; default: } } }")]
#[case("class A { int f() { return a[0] += b ? c : d; } }")]
#[case("class A { void f( { x = ; case : } }")]
#[case("}}} ;; @ class")]
fn test_lossless(#[case] source: &str) {
    assert_eq!(parse(source).syntax().to_string(), source);
}

#[rstest]
#[case("class A { void f() { x = ; } }")]
#[case("class A { void f() { switch (x) { case : } } }")]
#[case("class A { void f() { paint(1, ); } }")]
#[case("class A { int c = ")]
fn test_incomplete_input_reports_errors(#[case] source: &str) {
    let parse = parse(source);
    assert!(!parse.ok());
    assert!(parse.errors.iter().all(|e| !e.message.is_empty()));
    assert_eq!(parse.syntax().to_string(), source);
}

#[test]
fn test_annotation_type_members() {
    let file = SourceFile::cast(parse(COLOR).syntax()).unwrap();
    let decls: Vec<_> = file.type_decls().collect();
    assert_eq!(decls.len(), 1);
    let TypeDecl::AnnotationType(color) = &decls[0] else {
        panic!("expected annotation type");
    };
    assert_eq!(color.syntax().kind(), SyntaxKind::ANNOTATION_TYPE_DECL);
    assert_eq!(count(COLOR, SyntaxKind::VARIABLE), 3);
}

#[test]
fn test_switch_labels_collect_values() {
    let source = "class A { void f(int c) { switch (c) { case A.X, A.Y: break; case A.Z: default: } } }";
    let root = parse(source).syntax();
    let switch = root.descendants().find_map(SwitchStmt::cast).unwrap();
    let labels: Vec<_> = switch.body().unwrap().labels().collect();
    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0].values().count(), 2);
    assert!(labels[2].is_default());
}

#[test]
fn test_call_arguments_are_comma_delimited() {
    let source = "class A { void f() { paint(1, x, y); } }";
    let root = parse(source).syntax();
    let call = root.descendants().find_map(CallExpr::cast).unwrap();
    let args = call.arg_list().unwrap();
    assert_eq!(args.args().count(), 3);
    let commas = args
        .syntax()
        .children_with_tokens()
        .filter(|e| e.kind() == SyntaxKind::COMMA)
        .count();
    assert_eq!(commas, 2);
    assert!(matches!(call.callee(), Some(Expr::Ref(_))));
}

#[rstest]
#[case("x = y", SyntaxKind::ASSIGN_EXPR)]
#[case("x == y", SyntaxKind::BINARY_EXPR)]
#[case("x | y", SyntaxKind::BINARY_EXPR)]
#[case("x ? y : z", SyntaxKind::CONDITIONAL_EXPR)]
#[case("x[0]", SyntaxKind::INDEX_EXPR)]
#[case("A.X", SyntaxKind::FIELD_EXPR)]
#[case("f(x)", SyntaxKind::CALL_EXPR)]
#[case("(x)", SyntaxKind::PAREN_EXPR)]
#[case("-x", SyntaxKind::PREFIX_EXPR)]
#[case("x++", SyntaxKind::POSTFIX_EXPR)]
fn test_expression_node_kinds(#[case] expr: &str, #[case] expected: SyntaxKind) {
    let source = format!("class A {{ void f() {{ {expr}; }} }}");
    let root = parse(&source).syntax();
    let stmt = root
        .descendants()
        .find(|n| n.kind() == SyntaxKind::EXPR_STMT)
        .unwrap();
    let first = stmt.children().next().unwrap();
    assert_eq!(first.kind(), expected);
}
