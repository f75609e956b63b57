//! Declaration extraction tests.

use rstest::rstest;
use slim_enum::hir::{DeclKind, PrimitiveType, StaticImport, Type};

use crate::helpers::hir_helpers::*;
use crate::helpers::source_fixtures::{COLOR, MODE, PERMISSION, RETENTION};

#[test]
fn test_annotation_fields_in_declaration_order() {
    let index = index_from_sources(&[PERMISSION]);
    let permission = index.type_by_name("Permission").unwrap();
    let fields: Vec<_> = decl(&index, permission)
        .members
        .iter()
        .map(|id| decl(&index, *id))
        .map(|d| (d.name.as_str(), d.ordinal, d.initializer.as_deref()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("WRITE", 0, Some("2")),
            ("READ", 1, Some("1")),
            ("EXECUTE", 2, Some("4")),
        ]
    );
}

#[rstest]
#[case(COLOR, "RED", Type::Primitive(PrimitiveType::Int))]
#[case(MODE, "ON", Type::Named("String".into()))]
fn test_field_types(#[case] source: &str, #[case] name: &str, #[case] expected: Type) {
    let index = index_from_sources(&[source]);
    let field = find_decl(&index, name, DeclKind::Field);
    assert_eq!(decl(&index, field).ty, Some(expected));
}

#[test]
fn test_annotation_element_is_a_method() {
    let index = index_from_sources(&[RETENTION]);
    let value = find_decl(&index, "value", DeclKind::Method);
    assert_eq!(decl(&index, value).params.len(), 0);
    assert_eq!(
        decl(&index, value).container,
        index.type_by_name("Retention")
    );
}

#[test]
fn test_array_dimensions_on_type_and_declarator() {
    let index = index_from_sources(&["class A { int[] a; int b[]; int[] c[]; }"]);
    let ty = |name| decl(&index, find_decl(&index, name, DeclKind::Field)).ty.clone();
    let int = Type::Primitive(PrimitiveType::Int);
    assert_eq!(ty("a"), Some(Type::Array(Box::new(int.clone()))));
    assert_eq!(ty("b"), Some(Type::Array(Box::new(int.clone()))));
    assert_eq!(
        ty("c"),
        Some(Type::Array(Box::new(Type::Array(Box::new(int)))))
    );
}

#[test]
fn test_annotations_keep_simple_names() {
    let index = index_from_sources(&["class A { @ui.Color @Deprecated int c; }"]);
    let c = find_decl(&index, "c", DeclKind::Field);
    let names: Vec<_> = decl(&index, c).annotations.iter().map(|a| a.as_str()).collect();
    assert_eq!(names, vec!["Color", "Deprecated"]);
}

#[test]
fn test_locals_params_and_supertypes() {
    let index = index_from_sources(&[
        "class A extends B implements C, D { void f(int p, @Color int q) { int x = 1, y; } }",
    ]);
    let a = index.type_by_name("A").unwrap();
    let supertypes: Vec<_> = decl(&index, a).supertypes.iter().map(|s| s.as_str()).collect();
    assert_eq!(supertypes, vec!["B", "C", "D"]);

    let f = find_decl(&index, "f", DeclKind::Method);
    assert_eq!(decl(&index, f).ty, Some(Type::Void));
    let params: Vec<_> = decl(&index, f)
        .params
        .iter()
        .map(|p| decl(&index, *p).name.as_str())
        .collect();
    assert_eq!(params, vec!["p", "q"]);

    for local in ["x", "y"] {
        let id = find_decl(&index, local, DeclKind::Local);
        assert_eq!(decl(&index, id).container, Some(f));
    }
}

#[test]
fn test_static_imports_per_file() {
    let index = index_from_sources(&[
        "import static ui.Color.*; import static fs.Permission.READ; import java.util.List; class A { }",
        "class B { }",
    ]);
    assert_eq!(
        index.static_imports(slim_enum::base::FileId::new(0)),
        &[
            StaticImport::Wildcard { type_name: "Color".into() },
            StaticImport::Member {
                type_name: "Permission".into(),
                member: "READ".into()
            },
        ]
    );
    assert!(index.static_imports(slim_enum::base::FileId::new(1)).is_empty());
}

#[test]
fn test_first_type_name_wins_across_files() {
    let index = index_from_sources(&["class Dup { int a; }", "class Dup { int b; }"]);
    let dup = index.type_by_name("Dup").unwrap();
    assert_eq!(decl(&index, dup).file, slim_enum::base::FileId::new(0));
}
