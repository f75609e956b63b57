//! The symbol services consumed by the IDE layer.
//!
//! [`SymbolHost`] is the boundary between the constant-group engine and
//! whatever provides syntax and symbol resolution. [`Semantics`] implements
//! it over a [`SymbolIndex`](super::SymbolIndex).

use smol_str::SmolStr;

use super::resolve::Semantics;
use super::symbols::{DeclId, DeclKind, Declaration};
use super::types::Type;
use crate::parser::{CallExpr, SyntaxNode};

/// An annotation attached to a declaration, resolved to its annotation type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnnotationInstance {
    pub name: SmolStr,
    pub declaring_type: DeclId,
}

/// A field of an annotation type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub decl: DeclId,
    pub name: SmolStr,
    pub ty: Type,
    pub ordinal: u32,
    /// Source text of the constant initializer
    pub initializer: Option<SmolStr>,
}

/// The members of an annotation's declaring type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub decl: DeclId,
    pub name: SmolStr,
    pub methods: Vec<DeclId>,
    /// Typed fields in declaration order
    pub fields: Vec<Field>,
}

/// Syntax and symbol services required by the constant-group engine.
pub trait SymbolHost {
    /// Resolve an identifier reference (`REF_EXPR` or `FIELD_EXPR`).
    fn resolve_reference(&self, node: &SyntaxNode) -> Option<DeclId>;

    /// The declaration introduced by a declaring node.
    fn declaration_of(&self, node: &SyntaxNode) -> Option<DeclId>;

    fn declaration(&self, id: DeclId) -> Option<&Declaration>;

    /// All annotations visible on a declaration, own annotations first,
    /// then inherited ones.
    fn annotations(&self, id: DeclId) -> Vec<AnnotationInstance>;

    fn annotation_declaring_type(&self, instance: &AnnotationInstance) -> Option<TypeDeclaration>;

    fn resolve_call(&self, call: &CallExpr) -> Option<DeclId>;

    fn enclosing_method(&self, node: &SyntaxNode) -> Option<DeclId>;

    /// Declared type of a variable, or return type of a method.
    fn declared_type(&self, id: DeclId) -> Option<Type> {
        self.declaration(id)?.ty.clone()
    }
}

impl SymbolHost for Semantics<'_> {
    fn resolve_reference(&self, node: &SyntaxNode) -> Option<DeclId> {
        Semantics::resolve_reference(self, node)
    }

    fn declaration_of(&self, node: &SyntaxNode) -> Option<DeclId> {
        Semantics::declaration_of(self, node)
    }

    fn declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.index().declaration(id)
    }

    fn annotations(&self, id: DeclId) -> Vec<AnnotationInstance> {
        let index = self.index();
        let Some(decl) = index.declaration(id) else {
            return Vec::new();
        };

        let mut sources = vec![id];
        match decl.kind {
            DeclKind::Method => sources.extend(index.overridden_methods(id)),
            DeclKind::Parameter => {
                let overridden = decl
                    .container
                    .map(|method| index.overridden_methods(method))
                    .unwrap_or_default();
                sources.extend(overridden.into_iter().filter_map(|method| {
                    index
                        .declaration(method)?
                        .params
                        .get(decl.ordinal as usize)
                        .copied()
                }));
            }
            _ => {}
        }

        sources
            .into_iter()
            .filter_map(|source| index.declaration(source))
            .flat_map(|source| source.annotations.iter())
            .filter_map(|name| {
                let declaring_type = index.type_by_name(name)?;
                let is_annotation = index
                    .declaration(declaring_type)
                    .is_some_and(|d| d.kind == DeclKind::AnnotationType);
                if !is_annotation {
                    tracing::trace!(annotation = %name, "not an annotation type");
                    return None;
                }
                Some(AnnotationInstance {
                    name: name.clone(),
                    declaring_type,
                })
            })
            .collect()
    }

    fn annotation_declaring_type(&self, instance: &AnnotationInstance) -> Option<TypeDeclaration> {
        let index = self.index();
        let decl = index.declaration(instance.declaring_type)?;
        let mut methods = Vec::new();
        let mut fields = Vec::new();
        for &member in &decl.members {
            let Some(m) = index.declaration(member) else {
                continue;
            };
            match m.kind {
                DeclKind::Method => methods.push(member),
                DeclKind::Field => {
                    let Some(ty) = m.ty.clone() else {
                        continue;
                    };
                    fields.push(Field {
                        decl: member,
                        name: m.name.clone(),
                        ty,
                        ordinal: m.ordinal,
                        initializer: m.initializer.clone(),
                    });
                }
                _ => {}
            }
        }
        Some(TypeDeclaration {
            decl: instance.declaring_type,
            name: decl.name.clone(),
            methods,
            fields,
        })
    }

    fn resolve_call(&self, call: &CallExpr) -> Option<DeclId> {
        Semantics::resolve_call(self, call)
    }

    fn enclosing_method(&self, node: &SyntaxNode) -> Option<DeclId> {
        Semantics::enclosing_method(self, node)
    }
}
