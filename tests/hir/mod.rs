//! HIR layer tests
//!
//! Tests for the semantic model:
//! - Declaration extraction
//! - Name resolution across files
//! - Annotation lookup, including inherited annotations

pub mod tests_annotations;
pub mod tests_name_resolution;
pub mod tests_symbol_extraction;
