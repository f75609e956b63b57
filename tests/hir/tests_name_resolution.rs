//! Name resolution tests.

use rstest::rstest;
use slim_enum::base::FileId;
use slim_enum::hir::{DeclKind, Semantics, SymbolIndex};
use slim_enum::parser::{AstNode, CallExpr, SyntaxKind, SyntaxNode};

use crate::helpers::hir_helpers::*;
use crate::helpers::source_fixtures::{COLOR, MODE};

/// The `nth` REF_EXPR or FIELD_EXPR in the last file whose text is `text`.
fn reference(index: &SymbolIndex, file: FileId, text: &str, nth: usize) -> SyntaxNode {
    index
        .file_root(file)
        .unwrap()
        .descendants()
        .filter(|n| matches!(n.kind(), SyntaxKind::REF_EXPR | SyntaxKind::FIELD_EXPR))
        .filter(|n| n.text() == text)
        .nth(nth)
        .unwrap_or_else(|| panic!("no reference '{text}' #{nth}"))
}

/// Resolve the `nth` reference `text` in `source`, loaded after COLOR and MODE.
fn resolve(source: &str, text: &str, nth: usize) -> Option<(String, DeclKind)> {
    let index = index_from_sources(&[COLOR, MODE, source]);
    let file = FileId::new(2);
    let sema = Semantics::new(&index, file);
    let node = reference(&index, file, text, nth);
    sema.resolve_reference(&node).map(|id| {
        let d = decl(&index, id);
        (d.name.to_string(), d.kind)
    })
}

#[rstest]
#[case("Color.RED", "RED", DeclKind::Field)]
#[case("ui.Color.GREEN", "GREEN", DeclKind::Field)]
#[case("Color", "Color", DeclKind::AnnotationType)]
#[case("Mode.OFF", "OFF", DeclKind::Field)]
fn test_qualified_constants(#[case] text: &str, #[case] name: &str, #[case] kind: DeclKind) {
    let source = format!("class A {{ void f() {{ x = {text}; }} }}");
    assert_eq!(resolve(&source, text, 0), Some((name.to_string(), kind)));
}

#[test]
fn test_local_declared_later_is_not_visible() {
    let source = "class A { int v; void f() { g(v); int v = 1; g(v); } }";
    assert_eq!(resolve(source, "v", 0), Some(("v".to_string(), DeclKind::Field)));
    assert_eq!(resolve(source, "v", 1), Some(("v".to_string(), DeclKind::Local)));
}

#[test]
fn test_parameter_shadows_field() {
    let source = "class A { int c; void f(int c) { g(c); } }";
    assert_eq!(resolve(source, "c", 0), Some(("c".to_string(), DeclKind::Parameter)));
}

#[test]
fn test_earlier_declarator_of_same_statement() {
    let source = "class A { void f() { int a = 1, b = a; } }";
    assert_eq!(resolve(source, "a", 0), Some(("a".to_string(), DeclKind::Local)));
}

#[test]
fn test_inherited_field() {
    let source = "class Base { @Color int tint; } class Child extends Base { void f() { g(tint); } }";
    assert_eq!(resolve(source, "tint", 0), Some(("tint".to_string(), DeclKind::Field)));
}

#[test]
fn test_member_through_variable_type() {
    let source = "class Box { @Color int tint; } class A { Box box; void f() { g(box.tint); } }";
    assert_eq!(resolve(source, "box.tint", 0), Some(("tint".to_string(), DeclKind::Field)));
}

#[rstest]
#[case("import static ui.Color.*; class A { void f() { g(RED); } }")]
#[case("import static ui.Color.RED; class A { void f() { g(RED); } }")]
fn test_static_imports(#[case] source: &str) {
    assert_eq!(resolve(source, "RED", 0), Some(("RED".to_string(), DeclKind::Field)));
}

#[test]
fn test_single_static_import_is_member_specific() {
    let source = "import static ui.Color.RED; class A { void f() { g(GREEN); } }";
    assert_eq!(resolve(source, "GREEN", 0), None);
}

#[test]
fn test_unresolved_names() {
    let source = "class A { void f() { g(missing, Color.PURPLE, nothing.here); } }";
    assert_eq!(resolve(source, "missing", 0), None);
    assert_eq!(resolve(source, "Color.PURPLE", 0), None);
    assert_eq!(resolve(source, "nothing.here", 0), None);
}

#[test]
fn test_call_prefers_matching_arity() {
    let index = index_from_sources(&[
        "class A { void paint(int a) { } void paint(int a, int b) { } void f() { paint(1, 2); } }",
    ]);
    let sema = Semantics::new(&index, FileId::new(0));
    let call = index
        .file_root(FileId::new(0))
        .unwrap()
        .descendants()
        .find_map(CallExpr::cast)
        .unwrap();
    let method = sema.resolve_call(&call).unwrap();
    assert_eq!(decl(&index, method).params.len(), 2);
    assert_eq!(
        sema.enclosing_method(call.syntax()),
        Some(find_decl(&index, "f", DeclKind::Method))
    );
}
