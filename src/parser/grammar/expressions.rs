//! Expression parsing
//!
//! This module implements the Java expression precedence chain:
//!
//! ```text
//! Assignment → Conditional → Binary (precedence climbing:
//!     || → && → | → ^ → & → equality → relational → shift → additive
//!     → multiplicative) → Prefix → Postfix → Primary
//! ```
//!
//! Every operator form wraps its operands in a dedicated node, built with
//! rowan checkpoints so the left operand is parsed before its parent kind is
//! known.

use super::JavaParser;
use crate::parser::syntax_kind::SyntaxKind;

/// Parse an expression, returning true if any tokens were consumed
pub fn parse_expression<P: JavaParser>(p: &mut P) -> bool {
    let start_pos = p.get_pos();
    parse_assignment_expression(p);
    p.get_pos() > start_pos
}

/// AssignmentExpression = ConditionalExpression (AssignOp AssignmentExpression)?
fn parse_assignment_expression<P: JavaParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    parse_conditional_expression(p);

    if p.peek_kind(0).is_assign_op() {
        p.skip_trivia();
        p.start_node_at(checkpoint, SyntaxKind::ASSIGN_EXPR);
        p.bump(); // operator
        p.skip_trivia();
        let start_pos = p.get_pos();
        parse_assignment_expression(p);
        if p.get_pos() == start_pos {
            p.error("expected expression after assignment operator".to_string());
        }
        p.finish_node();
    }
}

/// ConditionalExpression = BinaryExpression ('?' Expression ':' ConditionalExpression)?
fn parse_conditional_expression<P: JavaParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    parse_binary_expression(p, 0);

    if p.peek_kind(0) == SyntaxKind::QUESTION {
        p.skip_trivia();
        p.start_node_at(checkpoint, SyntaxKind::CONDITIONAL_EXPR);
        p.bump(); // ?
        p.skip_trivia();
        parse_expression(p);
        p.skip_trivia();
        p.expect(SyntaxKind::COLON);
        p.skip_trivia();
        parse_conditional_expression(p);
        p.finish_node();
    }
}

/// Binding power of a binary operator, higher binds tighter
fn binary_precedence(kind: SyntaxKind) -> Option<u8> {
    let precedence = match kind {
        SyntaxKind::PIPE_PIPE => 1,
        SyntaxKind::AMP_AMP => 2,
        SyntaxKind::PIPE => 3,
        SyntaxKind::CARET => 4,
        SyntaxKind::AMP => 5,
        SyntaxKind::EQ_EQ | SyntaxKind::BANG_EQ => 6,
        SyntaxKind::LT | SyntaxKind::GT | SyntaxKind::LT_EQ | SyntaxKind::GT_EQ => 7,
        SyntaxKind::SHL | SyntaxKind::SHR | SyntaxKind::USHR => 8,
        SyntaxKind::PLUS | SyntaxKind::MINUS => 9,
        SyntaxKind::STAR | SyntaxKind::SLASH | SyntaxKind::PERCENT => 10,
        _ => return None,
    };
    Some(precedence)
}

/// BinaryExpression = PrefixExpression (BinaryOp PrefixExpression)*
///
/// Left associative; only operators binding at least as tight as
/// `min_precedence` are consumed at this level.
fn parse_binary_expression<P: JavaParser>(p: &mut P, min_precedence: u8) {
    let checkpoint = p.checkpoint();
    parse_prefix_expression(p);

    loop {
        let Some(precedence) = binary_precedence(p.peek_kind(0)) else {
            break;
        };
        if precedence < min_precedence {
            break;
        }
        p.skip_trivia();
        p.start_node_at(checkpoint, SyntaxKind::BINARY_EXPR);
        p.bump(); // operator
        p.skip_trivia();
        parse_binary_expression(p, precedence + 1);
        p.finish_node();
    }
}

/// PrefixExpression = ('!' | '~' | '-' | '+' | '++' | '--') PrefixExpression | PostfixExpression
fn parse_prefix_expression<P: JavaParser>(p: &mut P) {
    if p.at_any(&[
        SyntaxKind::BANG,
        SyntaxKind::TILDE,
        SyntaxKind::MINUS,
        SyntaxKind::PLUS,
        SyntaxKind::PLUS_PLUS,
        SyntaxKind::MINUS_MINUS,
    ]) {
        p.start_node(SyntaxKind::PREFIX_EXPR);
        p.bump();
        p.skip_trivia();
        parse_prefix_expression(p);
        p.finish_node();
    } else {
        parse_postfix_expression(p);
    }
}

/// PostfixExpression = PrimaryExpression (ArgList | '.' IDENT | '[' Expression ']' | '++' | '--')*
fn parse_postfix_expression<P: JavaParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    if !parse_primary_expression(p) {
        return;
    }

    loop {
        match p.peek_kind(0) {
            SyntaxKind::L_PAREN => {
                p.skip_trivia();
                p.start_node_at(checkpoint, SyntaxKind::CALL_EXPR);
                parse_arg_list(p);
                p.finish_node();
            }
            SyntaxKind::DOT => {
                p.skip_trivia();
                p.start_node_at(checkpoint, SyntaxKind::FIELD_EXPR);
                p.bump(); // .
                p.skip_trivia();
                if !p.eat(SyntaxKind::IDENT) {
                    p.error("expected member name after '.'".to_string());
                }
                p.finish_node();
            }
            SyntaxKind::L_BRACKET => {
                p.skip_trivia();
                p.start_node_at(checkpoint, SyntaxKind::INDEX_EXPR);
                p.bump(); // [
                p.skip_trivia();
                parse_expression(p);
                p.skip_trivia();
                p.expect(SyntaxKind::R_BRACKET);
                p.finish_node();
            }
            SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS => {
                p.skip_trivia();
                p.start_node_at(checkpoint, SyntaxKind::POSTFIX_EXPR);
                p.bump();
                p.finish_node();
            }
            _ => break,
        }
    }
}

/// PrimaryExpression = Literal | IDENT | 'this' | '(' Expression ')'
///
/// Returns false (consuming nothing) when no expression starts here.
fn parse_primary_expression<P: JavaParser>(p: &mut P) -> bool {
    match p.current_kind() {
        kind if kind.is_literal() => {
            p.start_node(SyntaxKind::LITERAL);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::IDENT | SyntaxKind::THIS_KW => {
            p.start_node(SyntaxKind::REF_EXPR);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::L_PAREN => {
            p.start_node(SyntaxKind::PAREN_EXPR);
            p.bump(); // (
            p.skip_trivia();
            parse_expression(p);
            p.skip_trivia();
            p.expect(SyntaxKind::R_PAREN);
            p.finish_node();
        }
        kind => {
            p.error(format!("expected expression, found {:?}", kind));
            return false;
        }
    }
    true
}

/// ArgList = '(' (Expression (',' Expression)*)? ')'
///
/// Empty slots (`f(a, , b)`) are tolerated so the argument positions stay
/// aligned with the `COMMA` delimiters.
pub fn parse_arg_list<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::ARG_LIST);

    p.expect(SyntaxKind::L_PAREN);
    p.skip_trivia();

    if !p.at(SyntaxKind::R_PAREN) {
        loop {
            if !p.at(SyntaxKind::COMMA) {
                parse_expression(p);
                p.skip_trivia();
            }
            if p.at(SyntaxKind::COMMA) {
                p.bump();
                p.skip_trivia();
            } else {
                break;
            }
        }
    }

    p.expect(SyntaxKind::R_PAREN);

    p.finish_node();
}
