//! IDE feature tests
//!
//! Tests for:
//! - Constant-group completion in every recognised context
//! - Completion items (detail, tail, insert text)
//! - AnalysisHost file management and request errors

pub mod tests_analysis;
pub mod tests_const_completion;
