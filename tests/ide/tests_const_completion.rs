//! Constant completion tests, driven through `AnalysisHost`.
//!
//! Request sources mark the cursor with `$0`; every fixture annotation type
//! is loaded next to them.

use rstest::rstest;
use slim_enum::ide::{CompletionConfig, CompletionKind};

use crate::helpers::completion_helpers::*;

// =============================================================================
// SWITCH
// =============================================================================

#[test]
fn test_switch_offers_unused_cases() {
    let source = r#"
class Painter {
    void paint(@Color int color) {
        switch (color) {
            case Color.RED:
                break;
            case $0
        }
    }
}
"#;
    assert_eq!(labels(&complete(source)), vec!["BLUE", "GREEN"]);
}

#[test]
fn test_switch_multi_value_labels_are_excluded() {
    let source = r#"
class Painter {
    void paint(@Color int color) {
        switch (color) {
            case Color.RED, Color.BLUE: break;
            case $0:
        }
    }
}
"#;
    assert_eq!(labels(&complete(source)), vec!["GREEN"]);
}

#[test]
fn test_switch_with_every_case_used_is_empty() {
    let source = r#"
class Painter {
    void paint(@Color int color) {
        switch (color) {
            case Color.RED: case Color.GREEN: case Color.BLUE: break;
            case $0
        }
    }
}
"#;
    assert!(complete(source).is_empty());
}

#[test]
fn test_switch_over_combinable_group_offers_all() {
    let source = r#"
class Files {
    void check(@Permission int p) {
        switch (p) {
            case Permission.READ: break;
            case $0
        }
    }
}
"#;
    assert_eq!(labels(&complete(source)), vec!["WRITE", "READ", "EXECUTE"]);
}

// =============================================================================
// ASSIGNMENT AND DECLARATION
// =============================================================================

#[test]
fn test_assignment_of_reference_group() {
    let source = r#"
class Light {
    @Mode String mode;
    void toggle() {
        mode = $0;
    }
}
"#;
    let items = complete(source);
    assert_eq!(labels(&items), vec!["ON", "OFF"]);
    assert_eq!(items[0].tail.as_deref(), Some(" = \"on\""));
    assert_eq!(items[1].insert_text(), "Mode.OFF");
}

#[test]
fn test_assignment_with_used_value_offers_nothing() {
    let source = r#"
class Light {
    @Mode String mode;
    void toggle() {
        mode = Mode.ON + $0;
    }
}
"#;
    assert!(complete(source).is_empty());
}

#[test]
fn test_combinable_assignment_keeps_used_values() {
    let source = r#"
class Files {
    @Permission int p;
    void grant() {
        p = Permission.READ | $0;
    }
}
"#;
    assert_eq!(labels(&complete(source)), vec!["WRITE", "READ", "EXECUTE"]);
}

#[rstest]
#[case("@Color int c = $0;")]
#[case("final @Color int c = $0;")]
#[case("@Color int a = Color.RED, c = $0;")]
fn test_local_declaration(#[case] statement: &str) {
    let source = format!("class A {{ void f() {{ {statement} }} }}");
    assert_eq!(labels(&complete(&source)), vec!["BLUE", "GREEN", "RED"]);
}

#[test]
fn test_field_initializer() {
    let source = "class A { @Color int c = $0; }";
    assert_eq!(labels(&complete(source)), vec!["BLUE", "GREEN", "RED"]);
}

#[test]
fn test_declaration_outside_initializer_offers_nothing() {
    let source = "class A { void f() { @Color int $0 } }";
    assert!(complete(source).is_empty());
}

#[test]
fn test_array_element_assignment() {
    let source = r#"
class Palette {
    @Color int[] colors;
    void f() {
        colors[0] = $0;
    }
}
"#;
    assert_eq!(labels(&complete(source)), vec!["BLUE", "GREEN", "RED"]);
}

// =============================================================================
// CALL ARGUMENTS
// =============================================================================

#[rstest]
#[case("shape.paint(10, $0);", vec!["BLUE", "GREEN", "RED"])]
#[case("shape.paint($0, 10);", vec![])]
#[case("shape.paint(10, Color.RED, $0);", vec![])]
fn test_call_argument_slot(#[case] call: &str, #[case] expected: Vec<&str>) {
    let source = format!("class A {{ Shape shape; void f() {{ {call} }} }}");
    assert_eq!(labels(&complete(&source)), expected);
}

#[test]
fn test_call_argument_with_used_value_in_same_slot() {
    let source = "class A { Shape shape; void f() { shape.paint(1, Color.RED | $0); } }";
    assert!(complete(source).is_empty());
}

#[test]
fn test_used_value_in_other_argument_does_not_exclude() {
    let source = r#"
class A {
    void mix(@Color int a, @Color int b) { }
    void f() { mix(Color.RED, $0); }
}
"#;
    assert_eq!(labels(&complete(source)), vec!["BLUE", "GREEN", "RED"]);
}

#[test]
fn test_inherited_parameter_group() {
    let source = r#"
class Square implements Shape {
    public void paint(int size, int color) { }
    void f() { paint(1, $0); }
}
"#;
    assert_eq!(labels(&complete(source)), vec!["BLUE", "GREEN", "RED"]);
}

// =============================================================================
// COMPARISON AND RETURN
// =============================================================================

#[rstest]
#[case("c == $0")]
#[case("c != $0")]
fn test_comparison(#[case] condition: &str) {
    let source = format!("class A {{ @Color int c; boolean f() {{ if ({condition}) {{ }} return true; }} }}");
    assert_eq!(labels(&complete(&source)), vec!["BLUE", "GREEN", "RED"]);
}

#[test]
fn test_comparison_with_method_result() {
    let source = "class A { Shape s; boolean f() { return s.fill() == $0; } }";
    assert_eq!(labels(&complete(source)), vec!["BLUE", "GREEN", "RED"]);
}

#[test]
fn test_return_of_annotated_method() {
    let source = r#"
class Square implements Shape {
    public int fill() {
        return $0;
    }
}
"#;
    assert_eq!(labels(&complete(source)), vec!["BLUE", "GREEN", "RED"]);
}

#[test]
fn test_return_excludes_values_in_statement() {
    let source = "class A { @Color int pick() { return Color.GREEN + $0; } }";
    assert!(complete(source).is_empty());
}

// =============================================================================
// NO CONTEXT
// =============================================================================

#[rstest]
#[case("class A { void f() { $0 } }")]
#[case("class A { int plain; void f() { plain = $0; } }")]
#[case("class A { @Color long wide; void f() { wide = $0; } }")]
#[case("class A { @Retention int r; void f() { r = $0; } }")]
#[case("class A { void f() { missing = $0; } }")]
#[case("class A { $0 }")]
fn test_no_candidates(#[case] source: &str) {
    assert!(complete(source).is_empty());
}

// =============================================================================
// ITEMS
// =============================================================================

#[test]
fn test_item_shape() {
    let items = complete("class A { @Color int c; void f() { c = $0; } }");
    let green = &items[1];
    assert_eq!(&*green.label, "GREEN");
    assert_eq!(green.kind, CompletionKind::Constant);
    assert_eq!(green.detail.as_deref(), Some("Color"));
    assert_eq!(green.tail.as_deref(), Some(" = 1"));
    assert_eq!(green.insert_text(), "Color.GREEN");
    assert_eq!(green.sort_priority, 1);
}

#[test]
fn test_static_import_inserts_bare_name() {
    let source = "import static ui.Color.*;\nclass A { @Color int c; void f() { c = $0; } }";
    let items = complete(source);
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.insert_text.is_none()));
}

#[test]
fn test_config_limit_and_plain_insert() {
    let config = CompletionConfig::default()
        .with_limit(1)
        .with_qualify_insert_text(false);
    let items = complete_with("class A { @Color int c; void f() { c = $0; } }", config);
    assert_eq!(labels(&items), vec!["BLUE"]);
    assert_eq!(items[0].insert_text(), "BLUE");
}
