//! Foundation types for the slim-enum toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Identifier of a file owned by the analysis host
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other slim-enum modules.

mod position;

pub use position::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};

/// Interned identifier of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl FileId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}
