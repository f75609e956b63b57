//! # slim-enum
//!
//! Constant-group ("slim enum") completion engine for Java sources.
//!
//! An annotation type whose fields are constants of one data type acts as a
//! lightweight enumeration. Wherever a symbol carries such an annotation,
//! the engine suggests the matching constants at the cursor, filtered by the
//! values already used in the surrounding context.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → AnalysisHost/Analysis, completion entry, constant-group engine
//!   ↓
//! hir       → Types, declarations, symbol index, name resolution
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan CST, typed AST
//!   ↓
//! base      → Primitives (FileId, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → hir → ide)
// ============================================================================

/// Foundation types: FileId, LineIndex, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// High-level IR: declarations, symbol index and name resolution
pub mod hir;

/// IDE features: constant-group completion
pub mod ide;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, TextRange, TextSize};
