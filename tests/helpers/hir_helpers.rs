//! HIR test helpers for building symbol indexes.

use slim_enum::base::FileId;
use slim_enum::hir::{DeclId, DeclKind, Declaration, SymbolIndex};
use slim_enum::parser::parse;

/// Build an index over `sources`, file ids in slice order.
pub fn index_from_sources(sources: &[&str]) -> SymbolIndex {
    SymbolIndex::build(sources.iter().enumerate().map(|(i, source)| {
        let parse = parse(source);
        assert!(
            parse.ok(),
            "Parse errors in file {}: {:?}",
            i,
            parse.errors
        );
        (FileId::new(i as u32), parse.green)
    }))
}

/// The first declaration with this name and kind.
pub fn find_decl(index: &SymbolIndex, name: &str, kind: DeclKind) -> DeclId {
    index
        .declarations()
        .find(|(_, d)| d.name == name && d.kind == kind)
        .map(|(id, _)| id)
        .unwrap_or_else(|| panic!("no {kind:?} named '{name}'"))
}

pub fn decl<'a>(index: &'a SymbolIndex, id: DeclId) -> &'a Declaration {
    index.declaration(id).expect("declaration id out of range")
}
