//! Constant completion at a cursor offset.
//!
//! The request file is reparsed with [`COMPLETION_MARKER`] inserted at the
//! cursor so that an empty position (`x = |;`) still has an identifier token
//! the engine can climb from.

use std::iter;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::const_groups::{ConstCompletion, const_candidates};
use crate::base::{FileId, TextSize};
use crate::hir::{Field, Semantics, SymbolIndex};
use crate::parser::{SyntaxKind, SyntaxNode, parse};

/// Identifier inserted at the cursor before reparsing.
pub const COMPLETION_MARKER: &str = "slimEnumCompletionMarker";

/// Options for constant completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionConfig {
    /// Insert `Annotation.NAME` unless the bare name already resolves.
    pub qualify_insert_text: bool,
    /// Show ` = <initializer>` after the label.
    pub show_initializer: bool,
    /// Maximum number of items returned.
    pub limit: Option<usize>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            qualify_insert_text: true,
            show_initializer: true,
            limit: None,
        }
    }
}

impl CompletionConfig {
    pub fn with_qualify_insert_text(mut self, qualify: bool) -> Self {
        self.qualify_insert_text = qualify;
        self
    }

    pub fn with_show_initializer(mut self, show: bool) -> Self {
        self.show_initializer = show;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Constant,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Constant => 21,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The constant's name.
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Name of the annotation owning the constant.
    pub detail: Option<Arc<str>>,
    /// Text shown after the label (` = 0`).
    pub tail: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            tail: None,
            insert_text: None,
            sort_priority: 100,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_tail(mut self, tail: impl Into<Arc<str>>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// The text an editor inserts when the item is accepted.
    pub fn insert_text(&self) -> &str {
        self.insert_text.as_deref().unwrap_or(&self.label)
    }
}

/// Get constant completions at `offset` in `file`.
///
/// # Arguments
/// * `index` - Index over the workspace; its tree for `file` is replaced
/// * `file` - The file containing the cursor
/// * `text` - Current text of `file`
/// * `offset` - Cursor byte offset into `text`
///
/// # Returns
/// The group's constants in declaration order, or nothing when the cursor
/// is not in a recognised context.
pub fn const_completions(
    index: &SymbolIndex,
    file: FileId,
    text: &str,
    offset: TextSize,
    config: &CompletionConfig,
) -> Vec<CompletionItem> {
    let at = usize::from(offset);
    if !text.is_char_boundary(at) {
        tracing::debug!(?offset, "cursor is not on a character boundary");
        return Vec::new();
    }
    let request = format!("{}{COMPLETION_MARKER}{}", &text[..at], &text[at..]);
    let parse = parse(&request);

    let files = index
        .files()
        .filter(|(other, _)| *other != file)
        .map(|(other, green)| (other, green.clone()))
        .chain(iter::once((file, parse.green)));
    let request_index = SymbolIndex::build(files);
    let sema = Semantics::new(&request_index, file);

    let Some(root) = sema.root() else {
        return Vec::new();
    };
    let marker_end = offset + TextSize::of(COMPLETION_MARKER);
    let Some(token) = root
        .token_at_offset(marker_end)
        .left_biased()
        .filter(|token| token.kind() == SyntaxKind::IDENT)
    else {
        tracing::trace!(?offset, "no identifier at cursor");
        return Vec::new();
    };

    let Some(candidates) = const_candidates(&sema, &token) else {
        return Vec::new();
    };
    let items = to_items(&sema, token.parent().as_ref(), &candidates, config);
    tracing::debug!(
        annotation = %candidates.annotation,
        items = items.len(),
        "constant completions"
    );
    items
}

fn to_items(
    sema: &Semantics<'_>,
    scope: Option<&SyntaxNode>,
    candidates: &ConstCompletion,
    config: &CompletionConfig,
) -> Vec<CompletionItem> {
    let mut seen = FxHashSet::default();
    candidates
        .fields
        .iter()
        .filter(|field| seen.insert(field.decl))
        .take(config.limit.unwrap_or(usize::MAX))
        .map(|field| {
            let mut item = CompletionItem::new(field.name.as_str(), CompletionKind::Constant)
                .with_detail(candidates.annotation.as_str())
                .with_priority(field.ordinal);
            if config.show_initializer {
                if let Some(init) = &field.initializer {
                    item = item.with_tail(format!(" = {init}"));
                }
            }
            if config.qualify_insert_text && !resolves_bare(sema, scope, field) {
                item = item.with_insert_text(format!("{}.{}", candidates.annotation, field.name));
            }
            item
        })
        .collect()
}

/// Whether the unqualified name already refers to `field` at the cursor.
fn resolves_bare(sema: &Semantics<'_>, scope: Option<&SyntaxNode>, field: &Field) -> bool {
    scope.is_some_and(|scope| sema.resolve_name(scope, &field.name) == Some(field.decl))
}
