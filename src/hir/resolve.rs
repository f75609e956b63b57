//! Name resolution — resolving references to their declarations.
//!
//! [`Semantics`] answers resolution queries for one file of a
//! [`SymbolIndex`]. Syntax nodes passed in must come from that file's tree
//! (see [`Semantics::root`]); declarations are matched by the range of their
//! NAME node.
//!
//! A simple name is looked up, in order, among:
//! 1. locals declared before the reference in enclosing blocks,
//! 2. parameters of the enclosing method,
//! 3. fields of the enclosing types and their supertypes, innermost first,
//! 4. static imports of the file,
//! 5. type names.

use super::index::SymbolIndex;
use super::symbols::{DeclId, DeclKind, StaticImport};
use super::types::Type;
use crate::base::FileId;
use crate::parser::{
    AstNode, CallExpr, Expr, FieldExpr, LocalVarDecl, MethodDecl, Name, RefExpr, SyntaxKind,
    SyntaxNode,
};

/// Resolution queries over one file of a [`SymbolIndex`].
#[derive(Clone, Copy, Debug)]
pub struct Semantics<'db> {
    index: &'db SymbolIndex,
    file: FileId,
}

impl<'db> Semantics<'db> {
    pub fn new(index: &'db SymbolIndex, file: FileId) -> Self {
        Self { index, file }
    }

    pub fn index(&self) -> &'db SymbolIndex {
        self.index
    }

    pub fn file(&self) -> FileId {
        self.file
    }

    /// The root of this file's syntax tree.
    pub fn root(&self) -> Option<SyntaxNode> {
        self.index.file_root(self.file)
    }

    /// The declaration introduced by a declaring node (type, method,
    /// parameter or variable).
    pub fn declaration_of(&self, node: &SyntaxNode) -> Option<DeclId> {
        let name = node.children().find_map(Name::cast)?;
        self.index.declaration_at(self.file, name.syntax().text_range())
    }

    /// Resolve a `REF_EXPR` or `FIELD_EXPR` node.
    ///
    /// A reference in callee position resolves to the called method.
    pub fn resolve_reference(&self, node: &SyntaxNode) -> Option<DeclId> {
        if let Some(call) = callee_of(node) {
            return self.resolve_call(&call);
        }
        let resolved = match node.kind() {
            SyntaxKind::REF_EXPR => {
                let reference = RefExpr::cast(node.clone())?;
                let name = reference.name_token()?;
                self.resolve_name(node, name.text())
            }
            SyntaxKind::FIELD_EXPR => {
                let field = FieldExpr::cast(node.clone())?;
                let name = field.name_token()?;
                match field.qualifier().and_then(|q| self.qualifier_type(&q)) {
                    Some(ty) => self
                        .index
                        .find_member(ty, name.text(), DeclKind::Field, None)
                        .or_else(|| self.nested_type(ty, name.text())),
                    // `pkg.Type`: an unresolvable qualifier is a package
                    None => self.index.type_by_name(name.text()),
                }
            }
            _ => None,
        };
        if resolved.is_none() {
            tracing::trace!(reference = %node.text(), "unresolved reference");
        }
        resolved
    }

    /// Resolve a simple variable or type name as seen from `scope`.
    pub fn resolve_name(&self, scope: &SyntaxNode, name: &str) -> Option<DeclId> {
        self.resolve_local(scope, name)
            .or_else(|| self.resolve_param(scope, name))
            .or_else(|| {
                self.enclosing_types(scope)
                    .into_iter()
                    .find_map(|ty| self.index.find_member(ty, name, DeclKind::Field, None))
            })
            .or_else(|| self.resolve_static_import(name, DeclKind::Field, None))
            .or_else(|| self.index.type_by_name(name))
    }

    /// Resolve the method invoked by a call expression.
    pub fn resolve_call(&self, call: &CallExpr) -> Option<DeclId> {
        let arity = call.arg_list().map(|args| args.args().count());
        match call.callee()? {
            Expr::Ref(callee) => {
                let name = callee.name_token()?;
                self.enclosing_types(call.syntax())
                    .into_iter()
                    .find_map(|ty| {
                        self.index
                            .find_member(ty, name.text(), DeclKind::Method, arity)
                    })
                    .or_else(|| self.resolve_static_import(name.text(), DeclKind::Method, arity))
            }
            Expr::Field(callee) => {
                let name = callee.name_token()?;
                let ty = self.qualifier_type(&callee.qualifier()?)?;
                self.index
                    .find_member(ty, name.text(), DeclKind::Method, arity)
            }
            _ => None,
        }
    }

    /// The method whose declaration contains `node`.
    pub fn enclosing_method(&self, node: &SyntaxNode) -> Option<DeclId> {
        let method = node.ancestors().find(|n| n.kind() == SyntaxKind::METHOD_DECL)?;
        self.declaration_of(&method)
    }

    /// Types whose declaration contains `node`, innermost first.
    pub fn enclosing_types(&self, node: &SyntaxNode) -> Vec<DeclId> {
        node.ancestors()
            .filter(|n| {
                matches!(
                    n.kind(),
                    SyntaxKind::CLASS_DECL | SyntaxKind::ANNOTATION_TYPE_DECL
                )
            })
            .filter_map(|n| self.declaration_of(&n))
            .collect()
    }

    /// The type whose members a qualified access `q.name` looks into.
    fn qualifier_type(&self, qualifier: &Expr) -> Option<DeclId> {
        let decl = match qualifier {
            Expr::Ref(r) if r.is_this() => {
                return self.enclosing_types(r.syntax()).into_iter().next();
            }
            Expr::Ref(_) | Expr::Field(_) => self.resolve_reference(qualifier.syntax())?,
            Expr::Call(call) => self.resolve_call(call)?,
            Expr::Paren(paren) => return self.qualifier_type(&paren.expr()?),
            _ => return None,
        };
        let declaration = self.index.declaration(decl)?;
        if declaration.kind.is_type() {
            return Some(decl);
        }
        match declaration.ty.as_ref()? {
            Type::Named(name) => self.index.type_by_name(name),
            _ => None,
        }
    }

    fn nested_type(&self, outer: DeclId, name: &str) -> Option<DeclId> {
        let candidate = self.index.type_by_name(name)?;
        let decl = self.index.declaration(candidate)?;
        (decl.container == Some(outer)).then_some(candidate)
    }

    fn resolve_local(&self, scope: &SyntaxNode, name: &str) -> Option<DeclId> {
        let position = scope.text_range().start();
        for ancestor in scope.ancestors() {
            match ancestor.kind() {
                SyntaxKind::BLOCK | SyntaxKind::SWITCH_BODY => {
                    let declared = ancestor
                        .children()
                        .filter_map(LocalVarDecl::cast)
                        .flat_map(|decl| decl.variables().collect::<Vec<_>>())
                        .filter_map(|var| var.name())
                        .filter(|n| {
                            n.syntax().text_range().end() <= position
                                && n.text().as_deref() == Some(name)
                        })
                        .last();
                    if let Some(local) = declared {
                        return self
                            .index
                            .declaration_at(self.file, local.syntax().text_range());
                    }
                }
                SyntaxKind::METHOD_DECL => break,
                _ => {}
            }
        }
        None
    }

    fn resolve_param(&self, scope: &SyntaxNode, name: &str) -> Option<DeclId> {
        let method = scope.ancestors().find_map(MethodDecl::cast)?;
        let param = method
            .params()
            .filter_map(|p| p.name())
            .find(|n| n.text().as_deref() == Some(name))?;
        self.index
            .declaration_at(self.file, param.syntax().text_range())
    }

    fn resolve_static_import(
        &self,
        name: &str,
        kind: DeclKind,
        arity: Option<usize>,
    ) -> Option<DeclId> {
        self.index
            .static_imports(self.file)
            .iter()
            .filter_map(|import| match import {
                StaticImport::Member { type_name, member } if member == name => {
                    Some(type_name)
                }
                StaticImport::Wildcard { type_name } => Some(type_name),
                StaticImport::Member { .. } => None,
            })
            .filter_map(|type_name| self.index.type_by_name(type_name))
            .find_map(|ty| self.index.find_member(ty, name, kind, arity))
    }
}

/// The call expression of which `node` is the callee.
fn callee_of(node: &SyntaxNode) -> Option<CallExpr> {
    let call = CallExpr::cast(node.parent()?)?;
    (call.callee()?.syntax() == node).then_some(call)
}
