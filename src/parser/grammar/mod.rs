//! Grammar modules for the Java subset
//!
//! This module contains the parsing logic organized by construct:
//! - `items` - compilation unit, imports, type declarations and members
//! - `statements` - blocks, local declarations, switch/return/if/while
//! - `expressions` - the expression precedence chain
//!
//! The parsing functions are generic over [`JavaParser`] so they can be used
//! with any parser implementation.

pub mod expressions;
pub mod items;
pub mod statements;

pub use expressions::{parse_arg_list, parse_expression};
pub use items::parse_source_file;
pub use statements::{parse_block, parse_statement};

use crate::parser::syntax_kind::SyntaxKind;

/// Trait for parser infrastructure operations
///
/// This trait defines the interface between the grammar functions and the
/// main parser. The main parser implements this trait to provide token
/// access and tree building.
pub trait JavaParser {
    // Token inspection
    fn current_kind(&self) -> SyntaxKind;
    fn at(&self, kind: SyntaxKind) -> bool;
    fn at_any(&self, kinds: &[SyntaxKind]) -> bool;
    fn at_eof(&self) -> bool;

    // Position tracking
    fn get_pos(&self) -> usize;

    /// Peek at the kind of the nth token ahead (skipping trivia)
    fn peek_kind(&self, n: usize) -> SyntaxKind;

    // Token consumption
    fn bump(&mut self);
    fn bump_any(&mut self);
    fn eat(&mut self, kind: SyntaxKind) -> bool;
    fn expect(&mut self, kind: SyntaxKind) -> bool;

    // Trivia handling
    fn skip_trivia(&mut self);

    // Node building
    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);
    fn checkpoint(&self) -> rowan::Checkpoint;
    fn start_node_at(&mut self, checkpoint: rowan::Checkpoint, kind: SyntaxKind);

    // Error handling
    fn error(&mut self, message: String);
    fn error_recover(&mut self, message: String, recovery: &[SyntaxKind]);
}

/// NAME = IDENT
pub fn parse_name<P: JavaParser>(p: &mut P) -> bool {
    if p.at(SyntaxKind::IDENT) {
        p.start_node(SyntaxKind::NAME);
        p.bump();
        p.finish_node();
        true
    } else {
        p.error(format!("expected name, found {:?}", p.current_kind()));
        false
    }
}

/// PATH = IDENT ('.' IDENT)*
pub fn parse_path<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::PATH);
    p.expect(SyntaxKind::IDENT);
    while p.peek_kind(0) == SyntaxKind::DOT && p.peek_kind(1) == SyntaxKind::IDENT {
        p.skip_trivia();
        p.bump(); // .
        p.skip_trivia();
        p.bump(); // IDENT
    }
    p.finish_node();
}

/// TYPE = (PrimitiveType | 'void' | PATH) ('[' ']')*
///
/// Returns false (consuming nothing) when no type starts here.
pub fn parse_type<P: JavaParser>(p: &mut P) -> bool {
    let kind = p.current_kind();
    if !(kind.is_primitive_type() || kind == SyntaxKind::VOID_KW || kind == SyntaxKind::IDENT) {
        return false;
    }

    p.start_node(SyntaxKind::TYPE);
    if kind == SyntaxKind::IDENT {
        parse_path(p);
    } else {
        p.bump();
    }
    while p.peek_kind(0) == SyntaxKind::L_BRACKET && p.peek_kind(1) == SyntaxKind::R_BRACKET {
        p.skip_trivia();
        p.bump(); // [
        p.skip_trivia();
        p.bump(); // ]
    }
    p.finish_node();
    true
}

/// MODIFIERS = (Annotation | modifier keyword)*
///
/// Always produces a (possibly empty) MODIFIERS node.
pub fn parse_modifiers<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::MODIFIERS);
    loop {
        let kind = p.current_kind();
        if kind.is_modifier() {
            p.bump();
        } else if kind == SyntaxKind::AT && p.peek_kind(1) != SyntaxKind::INTERFACE_KW {
            parse_annotation(p);
        } else {
            break;
        }
        p.skip_trivia();
    }
    p.finish_node();
}

/// Annotation = '@' PATH ArgList?
fn parse_annotation<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::ANNOTATION);
    p.bump(); // @
    p.skip_trivia();
    if p.at(SyntaxKind::IDENT) {
        parse_path(p);
    } else {
        p.error("expected annotation name".to_string());
    }
    if p.peek_kind(0) == SyntaxKind::L_PAREN {
        p.skip_trivia();
        parse_arg_list(p);
    }
    p.finish_node();
}

/// VARIABLE = NAME ('[' ']')* ('=' Expression)?
pub fn parse_variable<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::VARIABLE);
    parse_name(p);
    while p.peek_kind(0) == SyntaxKind::L_BRACKET && p.peek_kind(1) == SyntaxKind::R_BRACKET {
        p.skip_trivia();
        p.bump(); // [
        p.skip_trivia();
        p.bump(); // ]
    }
    if p.peek_kind(0) == SyntaxKind::EQ {
        p.skip_trivia();
        p.bump(); // =
        p.skip_trivia();
        if !parse_expression(p) {
            p.error("expected initializer".to_string());
        }
    }
    p.finish_node();
}
