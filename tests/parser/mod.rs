//! Parser tests
//!
//! Tests for the lexer and the lossless CST parser, including
//! incomplete input as typed in an editor.

pub mod tests_lexer;
pub mod tests_parser;
