//! Reference collection for exclusion sets.

use rustc_hash::FxHashSet;

use crate::hir::{DeclId, SymbolHost};
use crate::parser::{SyntaxKind, SyntaxNode};

/// Declarations already used in a context.
pub type ExclusionSet = FxHashSet<DeclId>;

/// Resolve every identifier reference inside `root` (the root included).
///
/// An absent root yields an empty set; references that do not resolve are
/// skipped.
pub fn collect_references<H: SymbolHost + ?Sized>(host: &H, root: Option<&SyntaxNode>) -> ExclusionSet {
    let mut set = ExclusionSet::default();
    if let Some(root) = root {
        extend_references(host, root, &mut set);
    }
    set
}

pub(crate) fn extend_references<H: SymbolHost + ?Sized>(
    host: &H,
    root: &SyntaxNode,
    set: &mut ExclusionSet,
) {
    set.extend(
        root.descendants()
            .filter(|n| matches!(n.kind(), SyntaxKind::REF_EXPR | SyntaxKind::FIELD_EXPR))
            .filter_map(|n| host.resolve_reference(&n)),
    );
}
