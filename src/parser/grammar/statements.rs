//! Statement parsing
//!
//! Blocks, local variable declarations, `switch` with its labels, `return`,
//! `if`/`while` and expression statements.

use super::{JavaParser, parse_expression, parse_modifiers, parse_type, parse_variable};
use crate::parser::syntax_kind::SyntaxKind;

/// Block = '{' Statement* '}'
pub fn parse_block<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::BLOCK);
    p.expect(SyntaxKind::L_BRACE);

    loop {
        p.skip_trivia();
        if p.at_eof() || p.at(SyntaxKind::R_BRACE) {
            break;
        }
        parse_statement_with_progress(p);
    }

    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// Parse one statement, forcing progress on junk input
fn parse_statement_with_progress<P: JavaParser>(p: &mut P) {
    let pos_before = p.get_pos();
    parse_statement(p);
    if p.get_pos() != pos_before {
        return;
    }
    if p.at_eof() || p.at(SyntaxKind::R_BRACE) {
        p.error("expected statement".to_string());
    } else {
        p.error_recover(
            format!("unexpected token in statement: {:?}", p.current_kind()),
            &[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE],
        );
        p.eat(SyntaxKind::SEMICOLON);
    }
}

/// Statement = Block | Switch | Return | If | While | Break | Continue
///           | LocalVarDecl | ExprStmt | ';'
pub fn parse_statement<P: JavaParser>(p: &mut P) {
    match p.current_kind() {
        SyntaxKind::L_BRACE => parse_block(p),
        SyntaxKind::SWITCH_KW => parse_switch(p),
        SyntaxKind::RETURN_KW => parse_return(p),
        SyntaxKind::IF_KW => parse_if(p),
        SyntaxKind::WHILE_KW => parse_while(p),
        SyntaxKind::BREAK_KW => parse_jump(p, SyntaxKind::BREAK_STMT),
        SyntaxKind::CONTINUE_KW => parse_jump(p, SyntaxKind::CONTINUE_STMT),
        SyntaxKind::SEMICOLON => {
            p.start_node(SyntaxKind::EMPTY_STMT);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::FINAL_KW | SyntaxKind::AT => parse_local_var_decl(p),
        _ if looks_like_local_var_decl(p) => parse_local_var_decl(p),
        _ => parse_expr_stmt(p),
    }
}

/// Check if the upcoming tokens read `Type name`
fn looks_like_local_var_decl<P: JavaParser>(p: &P) -> bool {
    let first = p.peek_kind(0);
    if first.is_primitive_type() {
        return true;
    }
    if first != SyntaxKind::IDENT {
        return false;
    }

    let mut lookahead = 1;
    while p.peek_kind(lookahead) == SyntaxKind::DOT && p.peek_kind(lookahead + 1) == SyntaxKind::IDENT {
        lookahead += 2;
    }
    while p.peek_kind(lookahead) == SyntaxKind::L_BRACKET
        && p.peek_kind(lookahead + 1) == SyntaxKind::R_BRACKET
    {
        lookahead += 2;
    }
    p.peek_kind(lookahead) == SyntaxKind::IDENT
}

/// LocalVarDecl = MODIFIERS TYPE VARIABLE (',' VARIABLE)* ';'
fn parse_local_var_decl<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::LOCAL_VAR_DECL);

    parse_modifiers(p);
    p.skip_trivia();
    if !parse_type(p) {
        p.error("expected type".to_string());
    }
    p.skip_trivia();
    parse_variable(p);
    while p.peek_kind(0) == SyntaxKind::COMMA {
        p.skip_trivia();
        p.bump(); // ,
        p.skip_trivia();
        parse_variable(p);
    }
    p.skip_trivia();
    p.expect(SyntaxKind::SEMICOLON);

    p.finish_node();
}

/// ExprStmt = Expression ';'
fn parse_expr_stmt<P: JavaParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    if !parse_expression(p) {
        return;
    }
    p.start_node_at(checkpoint, SyntaxKind::EXPR_STMT);
    p.skip_trivia();
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// Switch = 'switch' '(' Expression ')' SwitchBody
fn parse_switch<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::SWITCH_STMT);

    p.bump(); // switch
    p.skip_trivia();
    p.expect(SyntaxKind::L_PAREN);
    p.skip_trivia();
    parse_expression(p);
    p.skip_trivia();
    p.expect(SyntaxKind::R_PAREN);
    p.skip_trivia();

    if p.at(SyntaxKind::L_BRACE) {
        parse_switch_body(p);
    } else {
        p.error("expected switch body".to_string());
    }

    p.finish_node();
}

/// SwitchBody = '{' (SwitchLabel | Statement)* '}'
fn parse_switch_body<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::SWITCH_BODY);
    p.bump(); // {

    loop {
        p.skip_trivia();
        if p.at_eof() || p.at(SyntaxKind::R_BRACE) {
            break;
        }
        if p.at_any(&[SyntaxKind::CASE_KW, SyntaxKind::DEFAULT_KW]) {
            parse_switch_label(p);
        } else {
            parse_statement_with_progress(p);
        }
    }

    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// SwitchLabel = 'case' Expression (',' Expression)* ':' | 'default' ':'
fn parse_switch_label<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::SWITCH_LABEL);

    if p.eat(SyntaxKind::CASE_KW) {
        p.skip_trivia();
        if !parse_expression(p) {
            p.error("expected case value".to_string());
        }
        while p.peek_kind(0) == SyntaxKind::COMMA {
            p.skip_trivia();
            p.bump(); // ,
            p.skip_trivia();
            parse_expression(p);
        }
    } else {
        p.bump(); // default
    }
    p.skip_trivia();
    p.expect(SyntaxKind::COLON);

    p.finish_node();
}

/// Return = 'return' Expression? ';'
fn parse_return<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::RETURN_STMT);

    p.bump(); // return
    p.skip_trivia();
    if !p.at(SyntaxKind::SEMICOLON) {
        parse_expression(p);
        p.skip_trivia();
    }
    p.expect(SyntaxKind::SEMICOLON);

    p.finish_node();
}

/// If = 'if' '(' Expression ')' Statement ('else' Statement)?
fn parse_if<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::IF_STMT);

    p.bump(); // if
    parse_condition(p);
    p.skip_trivia();
    parse_statement_with_progress(p);

    if p.peek_kind(0) == SyntaxKind::ELSE_KW {
        p.skip_trivia();
        p.bump(); // else
        p.skip_trivia();
        parse_statement_with_progress(p);
    }

    p.finish_node();
}

/// While = 'while' '(' Expression ')' Statement
fn parse_while<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::WHILE_STMT);

    p.bump(); // while
    parse_condition(p);
    p.skip_trivia();
    parse_statement_with_progress(p);

    p.finish_node();
}

fn parse_condition<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.expect(SyntaxKind::L_PAREN);
    p.skip_trivia();
    parse_expression(p);
    p.skip_trivia();
    p.expect(SyntaxKind::R_PAREN);
}

/// Break = 'break' ';', Continue = 'continue' ';'
fn parse_jump<P: JavaParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump();
    p.skip_trivia();
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}
