//! AnalysisHost and Analysis — Unified state management for IDE features.
//!
//! The `AnalysisHost` owns all mutable state and provides `Analysis` snapshots
//! for querying. This pattern ensures consistent reads across multiple queries.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new();
//!
//! // Apply file changes
//! host.set_file_content("Color.java", "@interface Color { int RED = 0, GREEN = 1; }");
//!
//! // Get a snapshot for queries
//! let analysis = host.analysis();
//! let items = analysis.const_completions("A.java", LineCol::new(3, 12))?;
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::completion::{CompletionConfig, CompletionItem, const_completions};
use super::error::AnalysisError;
use crate::base::{FileId, LineCol, LineIndex};
use crate::hir::SymbolIndex;
use crate::parser::{SyntaxError, parse};

/// Text of one loaded file.
#[derive(Clone, Debug)]
struct FileText {
    text: Arc<str>,
    line_index: LineIndex,
}

/// Owns all mutable state for the IDE layer.
///
/// Apply changes via `set_file_content()` and `remove_file()`,
/// then get a consistent snapshot via `analysis()`.
#[derive(Debug)]
pub struct AnalysisHost {
    files: FxHashMap<FileId, FileText>,
    /// HIR-based symbol index built from parsed files
    symbol_index: SymbolIndex,
    /// Map from file path to FileId, stable for the host's lifetime
    file_id_map: FxHashMap<String, FileId>,
    /// Reverse map from FileId to file path
    file_path_map: FxHashMap<FileId, String>,
    next_file_id: u32,
    config: CompletionConfig,
    /// Whether the index needs rebuilding
    index_dirty: bool,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost.
    pub fn new() -> Self {
        Self {
            files: FxHashMap::default(),
            symbol_index: SymbolIndex::new(),
            file_id_map: FxHashMap::default(),
            file_path_map: FxHashMap::default(),
            next_file_id: 0,
            config: CompletionConfig::default(),
            index_dirty: false,
        }
    }

    /// Set the content of a file.
    ///
    /// Returns the file's parse errors. Parsing never fails; the errors are
    /// informational.
    pub fn set_file_content(&mut self, path: &str, content: &str) -> Vec<SyntaxError> {
        let file_id = match self.file_id_map.get(path) {
            Some(&id) => id,
            None => {
                let id = FileId::new(self.next_file_id);
                self.next_file_id += 1;
                self.file_id_map.insert(path.to_string(), id);
                self.file_path_map.insert(id, path.to_string());
                id
            }
        };
        self.files.insert(
            file_id,
            FileText {
                text: Arc::from(content),
                line_index: LineIndex::new(content),
            },
        );
        self.index_dirty = true;
        parse(content).errors
    }

    /// Remove a file from storage.
    pub fn remove_file(&mut self, path: &str) {
        if let Some(file_id) = self.file_id_map.remove(path) {
            self.file_path_map.remove(&file_id);
            self.files.remove(&file_id);
            self.index_dirty = true;
        }
    }

    /// Check if a file exists in storage.
    pub fn has_file(&self, path: &str) -> bool {
        self.file_id_map.contains_key(path)
    }

    /// Get the number of files loaded.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CompletionConfig) {
        self.config = config;
    }

    /// Rebuild the symbol index from the current files.
    ///
    /// This is called automatically by `analysis()` if the index is dirty.
    pub fn rebuild_index(&mut self) {
        let greens: Vec<_> = self
            .files
            .par_iter()
            .map(|(file_id, file)| (*file_id, parse(&file.text).green))
            .collect();
        self.symbol_index = SymbolIndex::build(greens);
        self.index_dirty = false;
    }

    /// Get a consistent snapshot for querying.
    ///
    /// If the index is dirty, it will be rebuilt first.
    pub fn analysis(&mut self) -> Analysis<'_> {
        if self.index_dirty {
            self.rebuild_index();
        }

        Analysis {
            symbol_index: &self.symbol_index,
            files: &self.files,
            file_id_map: &self.file_id_map,
            config: &self.config,
        }
    }

    /// Get the FileId for a path, if it exists.
    pub fn get_file_id(&self, path: &str) -> Option<FileId> {
        self.file_id_map.get(path).copied()
    }

    /// Get the path for a FileId, if it exists.
    pub fn get_file_path(&self, file_id: FileId) -> Option<&str> {
        self.file_path_map.get(&file_id).map(|s| s.as_str())
    }
}

/// An immutable snapshot of the analysis state.
///
/// All IDE queries go through this struct to ensure consistent results.
pub struct Analysis<'a> {
    symbol_index: &'a SymbolIndex,
    files: &'a FxHashMap<FileId, FileText>,
    file_id_map: &'a FxHashMap<String, FileId>,
    config: &'a CompletionConfig,
}

impl<'a> Analysis<'a> {
    /// Get constant completions at a position.
    pub fn const_completions(
        &self,
        path: &str,
        position: LineCol,
    ) -> Result<Vec<CompletionItem>, AnalysisError> {
        let file_id = self
            .get_file_id(path)
            .ok_or_else(|| AnalysisError::unknown_file(path))?;
        let file = self
            .files
            .get(&file_id)
            .ok_or_else(|| AnalysisError::unknown_file(path))?;
        let offset = file
            .line_index
            .offset(position)
            .ok_or(AnalysisError::PositionOutOfRange {
                line: position.line,
                col: position.col,
            })?;
        Ok(const_completions(
            self.symbol_index,
            file_id,
            &file.text,
            offset,
            self.config,
        ))
    }

    /// Get the symbol index.
    pub fn symbol_index(&self) -> &SymbolIndex {
        self.symbol_index
    }

    /// Get the FileId for a path.
    pub fn get_file_id(&self, path: &str) -> Option<FileId> {
        self.file_id_map.get(path).copied()
    }
}
