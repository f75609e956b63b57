//! Compilation unit and declaration parsing
//!
//! ```text
//! SourceFile = PackageDecl? ImportDecl* TypeDecl*
//! TypeDecl   = MODIFIERS ('class' | 'interface' | '@' 'interface') NAME
//!              ExtendsClause? ImplementsClause? ClassBody
//! Member     = TypeDecl | FieldDecl | MethodDecl
//! ```

use super::statements::parse_block;
use super::{JavaParser, parse_expression, parse_modifiers, parse_name, parse_path, parse_type, parse_variable};
use crate::parser::syntax_kind::SyntaxKind;

/// SourceFile = (PackageDecl | ImportDecl | TypeDecl | ';')*
pub fn parse_source_file<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::SOURCE_FILE);

    while !p.at_eof() {
        let pos_before = p.get_pos();
        p.skip_trivia();
        if p.at_eof() {
            break;
        }
        match p.current_kind() {
            SyntaxKind::PACKAGE_KW => parse_package_decl(p),
            SyntaxKind::IMPORT_KW => parse_import_decl(p),
            SyntaxKind::SEMICOLON => p.bump(),
            _ => parse_type_decl(p),
        }
        // Safety: if we didn't make progress, force-skip a token
        if p.get_pos() == pos_before && !p.at_eof() {
            p.error(format!("stuck on token: {:?}", p.current_kind()));
            p.bump_any();
        }
    }

    p.finish_node();
}

/// PackageDecl = 'package' PATH ';'
fn parse_package_decl<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::PACKAGE_DECL);
    p.bump(); // package
    p.skip_trivia();
    parse_path(p);
    p.skip_trivia();
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// ImportDecl = 'import' 'static'? PATH ('.' '*')? ';'
fn parse_import_decl<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::IMPORT_DECL);
    p.bump(); // import
    p.skip_trivia();
    if p.eat(SyntaxKind::STATIC_KW) {
        p.skip_trivia();
    }
    if p.at(SyntaxKind::IDENT) {
        parse_path(p);
    } else {
        p.error("expected import path".to_string());
    }
    if p.peek_kind(0) == SyntaxKind::DOT && p.peek_kind(1) == SyntaxKind::STAR {
        p.skip_trivia();
        p.bump(); // .
        p.skip_trivia();
        p.bump(); // *
    }
    p.skip_trivia();
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// TypeDecl with its modifiers; anything else becomes an ERROR node
fn parse_type_decl<P: JavaParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    parse_modifiers(p);
    p.skip_trivia();

    if !parse_type_decl_after_modifiers(p, checkpoint) {
        p.start_node_at(checkpoint, SyntaxKind::ERROR);
        p.error(format!("expected type declaration, found {:?}", p.current_kind()));
        if !p.at_eof() {
            p.bump_any();
        }
        p.finish_node();
    }
}

/// Returns false (after modifiers, consuming nothing more) when no type
/// declaration keyword follows.
fn parse_type_decl_after_modifiers<P: JavaParser>(p: &mut P, checkpoint: rowan::Checkpoint) -> bool {
    match p.current_kind() {
        SyntaxKind::CLASS_KW | SyntaxKind::INTERFACE_KW => {
            p.start_node_at(checkpoint, SyntaxKind::CLASS_DECL);
            p.bump(); // class / interface
            p.skip_trivia();
            parse_name(p);
            p.skip_trivia();
            if p.at(SyntaxKind::EXTENDS_KW) {
                parse_type_list_clause(p, SyntaxKind::EXTENDS_CLAUSE);
                p.skip_trivia();
            }
            if p.at(SyntaxKind::IMPLEMENTS_KW) {
                parse_type_list_clause(p, SyntaxKind::IMPLEMENTS_CLAUSE);
                p.skip_trivia();
            }
            parse_class_body(p);
            p.finish_node();
            true
        }
        SyntaxKind::AT if p.peek_kind(1) == SyntaxKind::INTERFACE_KW => {
            p.start_node_at(checkpoint, SyntaxKind::ANNOTATION_TYPE_DECL);
            p.bump(); // @
            p.skip_trivia();
            p.bump(); // interface
            p.skip_trivia();
            parse_name(p);
            p.skip_trivia();
            parse_class_body(p);
            p.finish_node();
            true
        }
        _ => false,
    }
}

/// ExtendsClause = 'extends' TYPE (',' TYPE)*, ImplementsClause likewise
fn parse_type_list_clause<P: JavaParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump(); // extends / implements
    p.skip_trivia();
    if !parse_type(p) {
        p.error("expected type".to_string());
    }
    while p.peek_kind(0) == SyntaxKind::COMMA {
        p.skip_trivia();
        p.bump(); // ,
        p.skip_trivia();
        if !parse_type(p) {
            p.error("expected type".to_string());
        }
    }
    p.finish_node();
}

/// ClassBody = '{' Member* '}'
fn parse_class_body<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::CLASS_BODY);
    if !p.expect(SyntaxKind::L_BRACE) {
        p.finish_node();
        return;
    }

    loop {
        p.skip_trivia();
        if p.at_eof() || p.at(SyntaxKind::R_BRACE) {
            break;
        }
        if p.eat(SyntaxKind::SEMICOLON) {
            continue;
        }
        let pos_before = p.get_pos();
        parse_member(p);
        if p.get_pos() == pos_before {
            p.error_recover(
                format!("unexpected token in class body: {:?}", p.current_kind()),
                &[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE],
            );
        }
    }

    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// Member = MODIFIERS (TypeDecl | TYPE NAME ParamList (Block | Default? ';') | TYPE VARIABLE (',' VARIABLE)* ';')
fn parse_member<P: JavaParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    parse_modifiers(p);
    p.skip_trivia();

    if parse_type_decl_after_modifiers(p, checkpoint) {
        return;
    }

    if !parse_type(p) {
        p.start_node_at(checkpoint, SyntaxKind::ERROR);
        p.error(format!("expected member declaration, found {:?}", p.current_kind()));
        p.finish_node();
        return;
    }
    p.skip_trivia();

    if p.at(SyntaxKind::IDENT) && p.peek_kind(1) == SyntaxKind::L_PAREN {
        p.start_node_at(checkpoint, SyntaxKind::METHOD_DECL);
        parse_name(p);
        p.skip_trivia();
        parse_param_list(p);
        p.skip_trivia();
        if p.at(SyntaxKind::L_BRACE) {
            parse_block(p);
        } else {
            // Annotation element default value: `int value() default 1;`
            if p.eat(SyntaxKind::DEFAULT_KW) {
                p.skip_trivia();
                parse_expression(p);
                p.skip_trivia();
            }
            p.expect(SyntaxKind::SEMICOLON);
        }
        p.finish_node();
    } else {
        p.start_node_at(checkpoint, SyntaxKind::FIELD_DECL);
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
}

/// ParamList = '(' (Param (',' Param)*)? ')', Param = MODIFIERS TYPE NAME
fn parse_param_list<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::PARAM_LIST);
    p.expect(SyntaxKind::L_PAREN);
    p.skip_trivia();

    while !p.at_eof() && !p.at(SyntaxKind::R_PAREN) {
        let pos_before = p.get_pos();

        p.start_node(SyntaxKind::PARAM);
        parse_modifiers(p);
        p.skip_trivia();
        if parse_type(p) {
            p.skip_trivia();
            parse_name(p);
        } else {
            p.error("expected parameter type".to_string());
        }
        p.finish_node();
        p.skip_trivia();

        if !p.eat(SyntaxKind::COMMA) {
            if p.get_pos() == pos_before && !p.at(SyntaxKind::L_BRACE) {
                p.error_recover(
                    "unexpected token in parameter list".to_string(),
                    &[SyntaxKind::R_PAREN, SyntaxKind::L_BRACE],
                );
            }
            break;
        }
        p.skip_trivia();
    }

    p.expect(SyntaxKind::R_PAREN);
    p.finish_node();
}
