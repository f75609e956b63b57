//! Constant-group completion engine.
//!
//! Given the token under the cursor, climb its ancestors until one of them
//! determines a completion context (see [`classify`]), find the annotated
//! declaration that context targets, and offer the constants of the
//! annotation's group minus the ones already used nearby.
//!
//! ```text
//! cursor token
//!     │ parent_ancestors()
//!     ▼
//! classify ──► ConstContext ──► evaluate
//!                                  │ annotations(target)
//!                                  ▼
//!                        resolve_group ──► FilterPolicy::apply
//! ```

mod collect;
mod context;
mod filter;
mod group;

pub use collect::{ExclusionSet, collect_references};
pub use context::{Classified, ClimbState, ConstContext, classify};
pub use filter::FilterPolicy;
pub use group::{FieldGroup, GroupSemantics, resolve_group};

use smol_str::SmolStr;

use crate::hir::{DeclId, Field, SymbolHost, Type};
use crate::parser::SyntaxToken;

/// Candidates offered at a cursor position.
///
/// `fields` may be empty: the context was recognised and its group found,
/// but every constant was filtered out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstCompletion {
    pub annotation: SmolStr,
    pub semantics: GroupSemantics,
    pub fields: Vec<Field>,
}

/// Compute the constant candidates for `cursor`.
pub fn const_candidates<H: SymbolHost + ?Sized>(
    host: &H,
    cursor: &SyntaxToken,
) -> Option<ConstCompletion> {
    let range = cursor.text_range();
    let mut state = ClimbState::default();
    for node in cursor.parent_ancestors() {
        let ctx = match classify(host, &node, range, &mut state) {
            Classified::Continue => continue,
            Classified::Stop => {
                tracing::trace!(kind = ?node.kind(), "context stops without candidates");
                return None;
            }
            Classified::Context(ctx) => ctx,
        };
        tracing::debug!(kind = ?node.kind(), ?ctx, "completion context");
        match evaluate(host, &ctx) {
            Some(completion) => return Some(completion),
            None if ctx.falls_through() => continue,
            None => return None,
        }
    }
    None
}

/// Evaluate a recognised context.
pub fn evaluate<H: SymbolHost + ?Sized>(host: &H, ctx: &ConstContext) -> Option<ConstCompletion> {
    let policy = ctx.policy();
    match ctx {
        ConstContext::Switch {
            discriminants,
            case_values,
        } => {
            let mut exclusions = ExclusionSet::default();
            for value in case_values {
                collect::extend_references(host, value, &mut exclusions);
            }
            discriminants.iter().find_map(|&discriminant| {
                fill(host, discriminant, host.declared_type(discriminant), &exclusions, policy)
            })
        }
        ConstContext::CallArgument {
            parameter: target,
            argument: root,
        }
        | ConstContext::Assignment { target, rhs: root }
        | ConstContext::Declaration {
            variable: target,
            initializer: root,
        }
        | ConstContext::Comparison {
            operand: target,
            rhs: root,
        } => {
            let exclusions = collect_references(host, root.as_ref());
            fill(host, *target, host.declared_type(*target), &exclusions, policy)
        }
        ConstContext::ArrayElement { array } => {
            let element = host
                .declared_type(*array)
                .and_then(|ty| ty.element_type().cloned());
            fill(host, *array, element, &ExclusionSet::default(), policy)
        }
        ConstContext::Return { method, statement } => {
            let exclusions = collect_references(host, Some(statement));
            fill(host, *method, host.declared_type(*method), &exclusions, policy)
        }
    }
}

/// Offer the group of `decl`'s annotations holding constants of `target`.
///
/// Returns `None` when the declaration has no type or no usable group.
pub fn fill<H: SymbolHost + ?Sized>(
    host: &H,
    decl: DeclId,
    target: Option<Type>,
    exclusions: &ExclusionSet,
    policy: FilterPolicy,
) -> Option<ConstCompletion> {
    let target = target?;
    let annotations = host.annotations(decl);
    if annotations.is_empty() {
        return None;
    }
    let declaring: Vec<_> = annotations
        .iter()
        .filter_map(|instance| host.annotation_declaring_type(instance))
        .collect();
    let group = resolve_group(&declaring, &target)?;
    let fields = policy.apply(&group, exclusions);
    tracing::debug!(
        annotation = %group.annotation,
        offered = fields.len(),
        total = group.fields.len(),
        "constant group"
    );
    Some(ConstCompletion {
        annotation: group.annotation.clone(),
        semantics: group.semantics(),
        fields,
    })
}
