//! Workspace-wide symbol index.
//!
//! Built from the green trees of all files. Per-file extraction runs in
//! parallel; the results are merged in `FileId` order so declaration ids and
//! "first declaration wins" lookups are deterministic.

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use std::collections::VecDeque;

use super::symbols::{DeclId, DeclKind, Declaration, StaticImport, extract_file};
use crate::base::{FileId, TextRange};
use crate::parser::{GreenNode, SyntaxNode};

/// Index of every declaration in a set of files.
#[derive(Clone, Debug, Default)]
pub struct SymbolIndex {
    /// The single source of truth for all declarations.
    decls: Vec<Declaration>,
    /// Declaring NAME node → declaration.
    by_name_range: FxHashMap<(FileId, TextRange), DeclId>,
    /// Simple type name → first type declared with that name.
    type_names: IndexMap<SmolStr, DeclId>,
    static_imports: FxHashMap<FileId, Vec<StaticImport>>,
    files: FxHashMap<FileId, GreenNode>,
}

impl SymbolIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from parsed files.
    pub fn build(files: impl IntoIterator<Item = (FileId, GreenNode)>) -> Self {
        let mut files: Vec<_> = files.into_iter().collect();
        files.sort_by_key(|(file, _)| *file);

        let extracted: Vec<_> = files
            .par_iter()
            .map(|(file, green)| extract_file(*file, &SyntaxNode::new_root(green.clone())))
            .collect();

        let mut index = Self::new();
        for ((file, green), symbols) in files.into_iter().zip(extracted) {
            let offset = index.decls.len() as u32;
            for mut decl in symbols.decls {
                decl.rebase(offset);
                let id = DeclId::new(index.decls.len() as u32);
                index.by_name_range.insert((decl.file, decl.name_range), id);
                if decl.kind.is_type() {
                    index.type_names.entry(decl.name.clone()).or_insert(id);
                }
                index.decls.push(decl);
            }
            index.static_imports.insert(file, symbols.static_imports);
            index.files.insert(file, green);
        }

        tracing::debug!(
            files = index.files.len(),
            declarations = index.decls.len(),
            "built symbol index"
        );
        index
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    pub fn declarations(&self) -> impl Iterator<Item = (DeclId, &Declaration)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(i, d)| (DeclId::new(i as u32), d))
    }

    /// The declaration whose NAME node covers `range`.
    pub fn declaration_at(&self, file: FileId, range: TextRange) -> Option<DeclId> {
        self.by_name_range.get(&(file, range)).copied()
    }

    /// The first type declared with this simple name.
    pub fn type_by_name(&self, name: &str) -> Option<DeclId> {
        self.type_names.get(name).copied()
    }

    pub fn static_imports(&self, file: FileId) -> &[StaticImport] {
        self.static_imports
            .get(&file)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The root of a file's syntax tree.
    pub fn file_root(&self, file: FileId) -> Option<SyntaxNode> {
        self.files.get(&file).cloned().map(SyntaxNode::new_root)
    }

    /// The green trees of all indexed files.
    pub fn files(&self) -> impl Iterator<Item = (FileId, &GreenNode)> {
        self.files.iter().map(|(file, green)| (*file, green))
    }

    /// A type and its supertypes, breadth first, each visited once.
    pub fn type_hierarchy(&self, ty: DeclId) -> Vec<DeclId> {
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::from([ty]);
        let mut order = Vec::new();
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            order.push(current);
            let Some(decl) = self.declaration(current) else {
                continue;
            };
            queue.extend(
                decl.supertypes
                    .iter()
                    .filter_map(|name| self.type_by_name(name)),
            );
        }
        order
    }

    /// Find a member of a type or its supertypes.
    ///
    /// For methods, a member with `arity` parameters is preferred; otherwise
    /// the first method with the name wins.
    pub fn find_member(
        &self,
        ty: DeclId,
        name: &str,
        kind: DeclKind,
        arity: Option<usize>,
    ) -> Option<DeclId> {
        let mut fallback = None;
        for current in self.type_hierarchy(ty) {
            let Some(decl) = self.declaration(current) else {
                continue;
            };
            for &member in &decl.members {
                let Some(m) = self.declaration(member) else {
                    continue;
                };
                if m.kind != kind || m.name != name {
                    continue;
                }
                match arity {
                    Some(n) if m.params.len() != n => {
                        fallback.get_or_insert(member);
                    }
                    _ => return Some(member),
                }
            }
        }
        fallback
    }

    /// Methods overridden by `method`: same name and arity, found along the
    /// supertypes of its declaring type.
    pub fn overridden_methods(&self, method: DeclId) -> Vec<DeclId> {
        let Some(decl) = self.declaration(method) else {
            return Vec::new();
        };
        let Some(owner) = decl.container else {
            return Vec::new();
        };
        let arity = decl.params.len();
        self.type_hierarchy(owner)
            .into_iter()
            .skip(1)
            .filter_map(|ty| self.declaration(ty))
            .flat_map(|ty| ty.members.iter().copied())
            .filter(|&member| {
                self.declaration(member).is_some_and(|m| {
                    m.kind == DeclKind::Method && m.name == decl.name && m.params.len() == arity
                })
            })
            .collect()
    }
}
