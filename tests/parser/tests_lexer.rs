//! Lexer tests: every token class maps to its named kind.

use rstest::rstest;
use slim_enum::parser::{SyntaxKind, tokenize};

fn kinds(input: &str) -> Vec<SyntaxKind> {
    tokenize(input)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

#[rstest]
#[case("class", SyntaxKind::CLASS_KW)]
#[case("interface", SyntaxKind::INTERFACE_KW)]
#[case("static", SyntaxKind::STATIC_KW)]
#[case("final", SyntaxKind::FINAL_KW)]
#[case("int", SyntaxKind::INT_KW)]
#[case("void", SyntaxKind::VOID_KW)]
#[case("switch", SyntaxKind::SWITCH_KW)]
#[case("case", SyntaxKind::CASE_KW)]
#[case("default", SyntaxKind::DEFAULT_KW)]
#[case("return", SyntaxKind::RETURN_KW)]
#[case("this", SyntaxKind::THIS_KW)]
#[case("null", SyntaxKind::NULL_KW)]
fn test_keywords(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(kinds(input), vec![expected]);
}

#[rstest]
#[case("=", SyntaxKind::EQ)]
#[case("==", SyntaxKind::EQ_EQ)]
#[case("!=", SyntaxKind::BANG_EQ)]
#[case("|", SyntaxKind::PIPE)]
#[case("||", SyntaxKind::PIPE_PIPE)]
#[case("<<", SyntaxKind::SHL)]
#[case("+=", SyntaxKind::PLUS_EQ)]
#[case("<<=", SyntaxKind::SHL_EQ)]
#[case(",", SyntaxKind::COMMA)]
#[case("@", SyntaxKind::AT)]
fn test_operators(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(kinds(input), vec![expected]);
}

#[rstest]
#[case("name", SyntaxKind::IDENT)]
#[case("_under$score", SyntaxKind::IDENT)]
#[case("42", SyntaxKind::INTEGER)]
#[case("\"text\"", SyntaxKind::STRING)]
fn test_literals_and_names(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(kinds(input), vec![expected]);
}

#[test]
fn test_annotation_type_keyword_pair() {
    assert_eq!(
        kinds("@interface Color"),
        vec![SyntaxKind::AT, SyntaxKind::INTERFACE_KW, SyntaxKind::IDENT]
    );
}

#[test]
fn test_comments_are_trivia() {
    let tokens = tokenize("a // line\n/* block */ b");
    let trivia: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind.is_trivia())
        .map(|t| t.kind)
        .collect();
    assert!(trivia.contains(&SyntaxKind::LINE_COMMENT));
    assert!(trivia.contains(&SyntaxKind::BLOCK_COMMENT));
    assert_eq!(kinds("a // line\n/* block */ b"), vec![SyntaxKind::IDENT, SyntaxKind::IDENT]);
}

#[test]
fn test_tokens_cover_input() {
    let input = "x = Color.RED | 1;";
    let text: String = tokenize(input).iter().map(|t| t.text).collect();
    assert_eq!(text, input);
}
