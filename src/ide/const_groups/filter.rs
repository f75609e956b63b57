//! Candidate filtering against an exclusion set.

use super::collect::ExclusionSet;
use super::group::{FieldGroup, GroupSemantics};
use crate::hir::Field;

/// How an exclusive group is filtered by the values already in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterPolicy {
    /// Single-slot contexts: any used field suppresses the whole group
    StrictAbort,
    /// Switch contexts: only the used fields are dropped
    PerFieldSkip,
}

impl FilterPolicy {
    /// The fields of `group` to offer.
    ///
    /// Combinable groups and empty exclusion sets always yield every field.
    pub fn apply(self, group: &FieldGroup, exclusions: &ExclusionSet) -> Vec<Field> {
        if group.semantics() == GroupSemantics::Combinable || exclusions.is_empty() {
            return group.fields.clone();
        }
        match self {
            FilterPolicy::StrictAbort => {
                if group.fields.iter().any(|f| exclusions.contains(&f.decl)) {
                    tracing::trace!(annotation = %group.annotation, "group already used");
                    Vec::new()
                } else {
                    group.fields.clone()
                }
            }
            FilterPolicy::PerFieldSkip => group
                .fields
                .iter()
                .filter(|f| !exclusions.contains(&f.decl))
                .cloned()
                .collect(),
        }
    }
}
