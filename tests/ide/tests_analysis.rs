//! AnalysisHost tests: file management and request errors.

use slim_enum::base::LineCol;
use slim_enum::ide::{AnalysisError, AnalysisHost};

use crate::helpers::completion_helpers::cursor_position;
use crate::helpers::source_fixtures::{ALL_GROUPS, COLOR};

#[test]
fn test_unknown_file() {
    let mut host = AnalysisHost::new();
    host.set_file_content("Color.java", COLOR);
    let result = host.analysis().const_completions("Missing.java", LineCol::new(0, 0));
    assert_eq!(result, Err(AnalysisError::UnknownFile("Missing.java".to_string())));
}

#[test]
fn test_position_out_of_range() {
    let mut host = AnalysisHost::new();
    host.set_file_content("A.java", "class A { }\n");
    let analysis = host.analysis();
    assert_eq!(
        analysis.const_completions("A.java", LineCol::new(0, 50)),
        Err(AnalysisError::PositionOutOfRange { line: 0, col: 50 })
    );
    assert_eq!(
        analysis.const_completions("A.java", LineCol::new(7, 0)),
        Err(AnalysisError::PositionOutOfRange { line: 7, col: 0 })
    );
    assert_eq!(
        analysis.const_completions("A.java", LineCol::new(1, u32::MAX)),
        Err(AnalysisError::PositionOutOfRange {
            line: 1,
            col: u32::MAX
        })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        AnalysisError::UnknownFile("A.java".into()).to_string(),
        "Unknown file: A.java"
    );
    assert_eq!(
        AnalysisError::PositionOutOfRange { line: 3, col: 9 }.to_string(),
        "Position out of range: 3:9"
    );
}

#[test]
fn test_removed_file_is_unknown() {
    let mut host = AnalysisHost::new();
    host.set_file_content("A.java", "class A { }");
    host.remove_file("A.java");
    assert!(matches!(
        host.analysis().const_completions("A.java", LineCol::new(0, 0)),
        Err(AnalysisError::UnknownFile(_))
    ));
}

#[test]
fn test_groups_follow_file_updates() {
    let (text, position) = cursor_position("class A { @Color int c; void f() { c = $0; } }");
    let mut host = AnalysisHost::new();
    for (path, content) in ALL_GROUPS {
        host.set_file_content(path, content);
    }
    host.set_file_content("A.java", &text);
    assert_eq!(host.analysis().const_completions("A.java", position).unwrap().len(), 3);

    host.set_file_content("Color.java", "@interface Color { int ONLY = 0; }");
    assert!(host.analysis().const_completions("A.java", position).unwrap().is_empty());

    host.remove_file("Color.java");
    assert!(host.analysis().const_completions("A.java", position).unwrap().is_empty());
}

#[test]
fn test_position_at_end_of_file() {
    let (text, position) = cursor_position("class A { @Color int c = $0");
    let mut host = AnalysisHost::new();
    host.set_file_content("Color.java", COLOR);
    host.set_file_content("A.java", &text);
    let items = host.analysis().const_completions("A.java", position).unwrap();
    assert_eq!(items.len(), 3);
}
