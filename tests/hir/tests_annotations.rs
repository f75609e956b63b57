//! Annotation lookup tests.

use slim_enum::base::FileId;
use slim_enum::hir::{DeclKind, Semantics, SymbolHost};

use crate::helpers::hir_helpers::*;
use crate::helpers::source_fixtures::{COLOR, RETENTION, SHAPE};

#[test]
fn test_overriding_parameter_inherits_group() {
    let index = index_from_sources(&[
        COLOR,
        SHAPE,
        "class Square implements Shape { void paint(int size, int color) { } }",
    ]);
    let sema = Semantics::new(&index, FileId::new(2));
    let square = index.type_by_name("Square").unwrap();
    let paint = index
        .find_member(square, "paint", DeclKind::Method, Some(2))
        .unwrap();
    let params = &decl(&index, paint).params;

    let color: Vec<_> = sema.annotations(params[1]).into_iter().map(|a| a.name).collect();
    assert_eq!(color, vec!["Color"]);
    assert!(sema.annotations(params[0]).is_empty());
}

#[test]
fn test_overriding_method_inherits_group() {
    let index = index_from_sources(&[
        COLOR,
        SHAPE,
        "class Square implements Shape { int fill() { return 0; } }",
    ]);
    let sema = Semantics::new(&index, FileId::new(2));
    let square = index.type_by_name("Square").unwrap();
    let fill = index.find_member(square, "fill", DeclKind::Method, Some(0)).unwrap();
    let names: Vec<_> = sema.annotations(fill).into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["Color"]);
}

#[test]
fn test_cyclic_hierarchy_terminates() {
    let index = index_from_sources(&[
        COLOR,
        "class A extends B { int pick() { return 0; } } class B extends A { @Color int pick() { return 0; } }",
    ]);
    let sema = Semantics::new(&index, FileId::new(1));
    let a = index.type_by_name("A").unwrap();
    let pick = index.find_member(a, "pick", DeclKind::Method, Some(0)).unwrap();
    let names: Vec<_> = sema.annotations(pick).into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["Color"]);
}

#[test]
fn test_declaring_type_lists_methods_and_fields() {
    let index = index_from_sources(&[RETENTION, "class A { @Retention int r; }"]);
    let sema = Semantics::new(&index, FileId::new(1));
    let r = find_decl(&index, "r", DeclKind::Field);
    let instances = sema.annotations(r);
    assert_eq!(instances.len(), 1);

    let declaring = sema.annotation_declaring_type(&instances[0]).unwrap();
    assert_eq!(declaring.name, "Retention");
    assert_eq!(declaring.methods.len(), 1);
    let fields: Vec<_> = declaring.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, vec!["SOURCE", "RUNTIME"]);

    let retention = index.type_by_name("Retention").unwrap();
    assert!(sema.annotations(retention).is_empty());
}
