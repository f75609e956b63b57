//! High-level IR (HIR) — declarations, symbol index and name resolution.
//!
//! This module implements the symbol services the constant-group engine
//! consumes through [`SymbolHost`].
//!
//! ## Key Types
//!
//! - [`Type`] — A declared data type, compared structurally
//! - [`DeclId`] / [`Declaration`] — A declaration extracted from source
//! - [`SymbolIndex`] — Index over all files (parallel extraction)
//! - [`Semantics`] — Name resolution for one file of the index
//! - [`SymbolHost`] — The boundary trait, implemented by [`Semantics`]
//!
//! ## Layers
//!
//! ```text
//! parse(text)                ← per-file green tree
//!     │
//!     ▼
//! extract_file(file, root)   ← declarations + static imports (per file)
//!     │
//!     ▼
//! SymbolIndex::build         ← merged index, type names, NAME ranges
//!     │
//!     ▼
//! Semantics::resolve_*       ← query-time name resolution
//! ```

mod host;
mod index;
mod resolve;
mod symbols;
mod types;

pub use host::{AnnotationInstance, Field, SymbolHost, TypeDeclaration};
pub use index::SymbolIndex;
pub use resolve::Semantics;
pub use symbols::{DeclId, DeclKind, Declaration, FileSymbols, StaticImport, extract_file};
pub use types::{PrimitiveType, Type};
