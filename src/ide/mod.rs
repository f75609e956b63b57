//! IDE features — High-level APIs for editor requests.
//!
//! This module provides the interface between the semantic model (HIR)
//! and an editor integration.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the editor boundary
//! 3. **Composable**: Built on top of HIR queries
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use slim_enum::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content("A.java", "class A { @Color int c; void f() { c = ; } }");
//!
//! let analysis = host.analysis();
//! let items = analysis.const_completions("A.java", LineCol::new(0, 39))?;
//! ```

mod analysis;
mod completion;
pub mod const_groups;
mod error;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{
    COMPLETION_MARKER, CompletionConfig, CompletionItem, CompletionKind, const_completions,
};
pub use error::AnalysisError;
