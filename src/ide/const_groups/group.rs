//! Constant-group resolution.

use smol_str::SmolStr;

use crate::hir::{Field, Type, TypeDeclaration};

/// How the constants of a group may be used together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupSemantics {
    /// Enum-like: each value is meaningful once in a context
    Exclusive,
    /// Flag-like: values may be repeated and combined
    Combinable,
}

/// The fields of one annotation type sharing the target data type.
///
/// Always holds at least two fields, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldGroup {
    /// Name of the annotation type declaring the fields
    pub annotation: SmolStr,
    pub fields: Vec<Field>,
}

impl FieldGroup {
    /// Derive the group's semantics from its first two fields.
    ///
    /// Reference-typed groups are always exclusive. Primitive groups are
    /// exclusive when the first field's name sorts before the second's, and
    /// combinable otherwise.
    pub fn semantics(&self) -> GroupSemantics {
        match self.fields.as_slice() {
            [first, second, ..] if first.ty.is_primitive() => {
                if first.name.as_str() < second.name.as_str() {
                    GroupSemantics::Exclusive
                } else {
                    GroupSemantics::Combinable
                }
            }
            _ => GroupSemantics::Exclusive,
        }
    }
}

/// Find the first annotation type holding at least two constants of
/// exactly `target` type.
///
/// Annotation types declaring any method are skipped.
pub fn resolve_group(declaring_types: &[TypeDeclaration], target: &Type) -> Option<FieldGroup> {
    declaring_types.iter().find_map(|declaring| {
        if !declaring.methods.is_empty() {
            tracing::trace!(annotation = %declaring.name, "skipped: declares methods");
            return None;
        }
        let fields: Vec<_> = declaring
            .fields
            .iter()
            .filter(|f| &f.ty == target)
            .cloned()
            .collect();
        if fields.len() < 2 {
            tracing::trace!(annotation = %declaring.name, %target, "skipped: fewer than two fields");
            return None;
        }
        Some(FieldGroup {
            annotation: declaring.name.clone(),
            fields,
        })
    })
}
