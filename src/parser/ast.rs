//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for Java syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.

use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

fn child_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens().filter_map(|e| e.into_token())
}

fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    child_tokens(node).any(|t| t.kind() == kind)
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn imports(&self) -> impl Iterator<Item = ImportDecl> + '_ {
        self.0.children().filter_map(ImportDecl::cast)
    }

    pub fn type_decls(&self) -> impl Iterator<Item = TypeDecl> + '_ {
        self.0.children().filter_map(TypeDecl::cast)
    }
}

ast_node!(ImportDecl, IMPORT_DECL);

impl ImportDecl {
    /// Check if this is an `import static`
    pub fn is_static(&self) -> bool {
        has_token(&self.0, SyntaxKind::STATIC_KW)
    }

    /// Check if this is a wildcard import (`.*`)
    pub fn is_wildcard(&self) -> bool {
        has_token(&self.0, SyntaxKind::STAR)
    }

    pub fn path(&self) -> Option<Path> {
        self.0.children().find_map(Path::cast)
    }
}

// ============================================================================
// Type declarations
// ============================================================================

/// A class, interface or annotation type declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDecl {
    Class(ClassDecl),
    AnnotationType(AnnotationTypeDecl),
}

impl AstNode for TypeDecl {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, SyntaxKind::CLASS_DECL | SyntaxKind::ANNOTATION_TYPE_DECL)
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::CLASS_DECL => Some(Self::Class(ClassDecl(node))),
            SyntaxKind::ANNOTATION_TYPE_DECL => Some(Self::AnnotationType(AnnotationTypeDecl(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Class(n) => n.syntax(),
            Self::AnnotationType(n) => n.syntax(),
        }
    }
}

impl TypeDecl {
    pub fn name(&self) -> Option<Name> {
        self.syntax().children().find_map(Name::cast)
    }

    pub fn modifiers(&self) -> Option<Modifiers> {
        self.syntax().children().find_map(Modifiers::cast)
    }

    pub fn body(&self) -> Option<ClassBody> {
        self.syntax().children().find_map(ClassBody::cast)
    }
}

ast_node!(ClassDecl, CLASS_DECL);

impl ClassDecl {
    pub fn is_interface(&self) -> bool {
        has_token(&self.0, SyntaxKind::INTERFACE_KW)
    }

    pub fn extends(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.clause_types(SyntaxKind::EXTENDS_CLAUSE)
    }

    pub fn implements(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.clause_types(SyntaxKind::IMPLEMENTS_CLAUSE)
    }

    fn clause_types(&self, kind: SyntaxKind) -> impl Iterator<Item = TypeRef> + '_ {
        self.0
            .children()
            .filter(move |n| n.kind() == kind)
            .flat_map(|clause| clause.children().filter_map(TypeRef::cast))
    }
}

ast_node!(AnnotationTypeDecl, ANNOTATION_TYPE_DECL);

ast_node!(ClassBody, CLASS_BODY);

impl ClassBody {
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

/// Any member of a class body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Type(TypeDecl),
}

impl AstNode for Member {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, SyntaxKind::FIELD_DECL | SyntaxKind::METHOD_DECL) || TypeDecl::can_cast(kind)
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::FIELD_DECL => Some(Self::Field(FieldDecl(node))),
            SyntaxKind::METHOD_DECL => Some(Self::Method(MethodDecl(node))),
            _ => TypeDecl::cast(node).map(Self::Type),
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Field(n) => n.syntax(),
            Self::Method(n) => n.syntax(),
            Self::Type(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Modifiers and annotations
// ============================================================================

ast_node!(Modifiers, MODIFIERS);

impl Modifiers {
    pub fn annotations(&self) -> impl Iterator<Item = Annotation> + '_ {
        self.0.children().filter_map(Annotation::cast)
    }

    pub fn is_static(&self) -> bool {
        has_token(&self.0, SyntaxKind::STATIC_KW)
    }

    pub fn is_final(&self) -> bool {
        has_token(&self.0, SyntaxKind::FINAL_KW)
    }
}

ast_node!(Annotation, ANNOTATION);

impl Annotation {
    pub fn path(&self) -> Option<Path> {
        self.0.children().find_map(Path::cast)
    }
}

// ============================================================================
// Members
// ============================================================================

ast_node!(FieldDecl, FIELD_DECL);

impl FieldDecl {
    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.0.children().filter_map(Variable::cast)
    }
}

ast_node!(MethodDecl, METHOD_DECL);

impl MethodDecl {
    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    /// The declared return type (`void` included)
    pub fn ret_type(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::PARAM_LIST)
            .flat_map(|list| list.children().filter_map(Param::cast))
    }

    pub fn body(&self) -> Option<Block> {
        self.0.children().find_map(Block::cast)
    }
}

ast_node!(Param, PARAM);

impl Param {
    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

ast_node!(Variable, VARIABLE);

impl Variable {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    /// Extra array dimensions written after the name (`int a[]`)
    pub fn dims(&self) -> usize {
        child_tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::L_BRACKET)
            .count()
    }

    pub fn initializer(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

// ============================================================================
// Names and types
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        child_tokens(&self.0).find(|t| t.kind() == SyntaxKind::IDENT)
    }

    pub fn text(&self) -> Option<SmolStr> {
        self.ident_token().map(|t| SmolStr::new(t.text()))
    }
}

ast_node!(Path, PATH);

impl Path {
    /// Get all name segments
    pub fn segments(&self) -> Vec<SmolStr> {
        child_tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| SmolStr::new(t.text()))
            .collect()
    }

    pub fn last_segment(&self) -> Option<SmolStr> {
        self.segments().pop()
    }
}

ast_node!(TypeRef, TYPE);

impl TypeRef {
    /// The primitive or `void` keyword, if this is not a named type
    pub fn keyword(&self) -> Option<SyntaxKind> {
        child_tokens(&self.0)
            .map(|t| t.kind())
            .find(|k| k.is_primitive_type() || *k == SyntaxKind::VOID_KW)
    }

    pub fn path(&self) -> Option<Path> {
        self.0.children().find_map(Path::cast)
    }

    pub fn dims(&self) -> usize {
        child_tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::L_BRACKET)
            .count()
    }
}

// ============================================================================
// Statements
// ============================================================================

ast_node!(Block, BLOCK);

ast_node!(LocalVarDecl, LOCAL_VAR_DECL);

impl LocalVarDecl {
    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.0.children().filter_map(Variable::cast)
    }
}

ast_node!(SwitchStmt, SWITCH_STMT);

impl SwitchStmt {
    /// The discriminant between the parentheses
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn body(&self) -> Option<SwitchBody> {
        self.0.children().find_map(SwitchBody::cast)
    }
}

ast_node!(SwitchBody, SWITCH_BODY);

impl SwitchBody {
    pub fn labels(&self) -> impl Iterator<Item = SwitchLabel> + '_ {
        self.0.children().filter_map(SwitchLabel::cast)
    }
}

ast_node!(SwitchLabel, SWITCH_LABEL);

impl SwitchLabel {
    pub fn is_default(&self) -> bool {
        has_token(&self.0, SyntaxKind::DEFAULT_KW)
    }

    /// Every value of `case a, b:`
    pub fn values(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

ast_node!(ReturnStmt, RETURN_STMT);

impl ReturnStmt {
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// Any expression node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Assign(AssignExpr),
    Conditional(ConditionalExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Postfix(PostfixExpr),
    Call(CallExpr),
    Index(IndexExpr),
    Field(FieldExpr),
    Ref(RefExpr),
    Literal(Literal),
    Paren(ParenExpr),
}

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::ASSIGN_EXPR
                | SyntaxKind::CONDITIONAL_EXPR
                | SyntaxKind::BINARY_EXPR
                | SyntaxKind::PREFIX_EXPR
                | SyntaxKind::POSTFIX_EXPR
                | SyntaxKind::CALL_EXPR
                | SyntaxKind::INDEX_EXPR
                | SyntaxKind::FIELD_EXPR
                | SyntaxKind::REF_EXPR
                | SyntaxKind::LITERAL
                | SyntaxKind::PAREN_EXPR
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::ASSIGN_EXPR => Some(Self::Assign(AssignExpr(node))),
            SyntaxKind::CONDITIONAL_EXPR => Some(Self::Conditional(ConditionalExpr(node))),
            SyntaxKind::BINARY_EXPR => Some(Self::Binary(BinaryExpr(node))),
            SyntaxKind::PREFIX_EXPR => Some(Self::Prefix(PrefixExpr(node))),
            SyntaxKind::POSTFIX_EXPR => Some(Self::Postfix(PostfixExpr(node))),
            SyntaxKind::CALL_EXPR => Some(Self::Call(CallExpr(node))),
            SyntaxKind::INDEX_EXPR => Some(Self::Index(IndexExpr(node))),
            SyntaxKind::FIELD_EXPR => Some(Self::Field(FieldExpr(node))),
            SyntaxKind::REF_EXPR => Some(Self::Ref(RefExpr(node))),
            SyntaxKind::LITERAL => Some(Self::Literal(Literal(node))),
            SyntaxKind::PAREN_EXPR => Some(Self::Paren(ParenExpr(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Assign(n) => n.syntax(),
            Self::Conditional(n) => n.syntax(),
            Self::Binary(n) => n.syntax(),
            Self::Prefix(n) => n.syntax(),
            Self::Postfix(n) => n.syntax(),
            Self::Call(n) => n.syntax(),
            Self::Index(n) => n.syntax(),
            Self::Field(n) => n.syntax(),
            Self::Ref(n) => n.syntax(),
            Self::Literal(n) => n.syntax(),
            Self::Paren(n) => n.syntax(),
        }
    }
}

/// Split the expression children of an operator node around its operator.
///
/// Error recovery can produce operator nodes with a missing operand, so
/// operands are located by position rather than by child index.
fn operands(node: &SyntaxNode, is_op: impl Fn(SyntaxKind) -> bool) -> (Option<Expr>, Option<Expr>) {
    let Some(op) = child_tokens(node).find(|t| is_op(t.kind())) else {
        return (None, None);
    };
    let op_start = op.text_range().start();
    let mut lhs = None;
    let mut rhs = None;
    for expr in node.children().filter_map(Expr::cast) {
        if expr.syntax().text_range().end() <= op_start {
            lhs = Some(expr);
        } else if rhs.is_none() {
            rhs = Some(expr);
        }
    }
    (lhs, rhs)
}

ast_node!(AssignExpr, ASSIGN_EXPR);

impl AssignExpr {
    pub fn op_kind(&self) -> Option<SyntaxKind> {
        child_tokens(&self.0).map(|t| t.kind()).find(|k| k.is_assign_op())
    }

    pub fn lhs(&self) -> Option<Expr> {
        operands(&self.0, SyntaxKind::is_assign_op).0
    }

    pub fn rhs(&self) -> Option<Expr> {
        operands(&self.0, SyntaxKind::is_assign_op).1
    }
}

ast_node!(ConditionalExpr, CONDITIONAL_EXPR);

ast_node!(BinaryExpr, BINARY_EXPR);

impl BinaryExpr {
    pub fn op_kind(&self) -> Option<SyntaxKind> {
        child_tokens(&self.0)
            .map(|t| t.kind())
            .find(|k| k.is_punct())
    }

    pub fn lhs(&self) -> Option<Expr> {
        operands(&self.0, SyntaxKind::is_punct).0
    }

    pub fn rhs(&self) -> Option<Expr> {
        operands(&self.0, SyntaxKind::is_punct).1
    }
}

ast_node!(PrefixExpr, PREFIX_EXPR);

ast_node!(PostfixExpr, POSTFIX_EXPR);

ast_node!(CallExpr, CALL_EXPR);

impl CallExpr {
    pub fn callee(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        self.0.children().find_map(ArgList::cast)
    }
}

ast_node!(ArgList, ARG_LIST);

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

ast_node!(IndexExpr, INDEX_EXPR);

impl IndexExpr {
    pub fn base(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn index(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

ast_node!(FieldExpr, FIELD_EXPR);

impl FieldExpr {
    pub fn qualifier(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn name_token(&self) -> Option<SyntaxToken> {
        child_tokens(&self.0).find(|t| t.kind() == SyntaxKind::IDENT)
    }
}

ast_node!(RefExpr, REF_EXPR);

impl RefExpr {
    pub fn is_this(&self) -> bool {
        has_token(&self.0, SyntaxKind::THIS_KW)
    }

    pub fn name_token(&self) -> Option<SyntaxToken> {
        child_tokens(&self.0).find(|t| t.kind() == SyntaxKind::IDENT)
    }
}

ast_node!(Literal, LITERAL);

ast_node!(ParenExpr, PAREN_EXPR);

impl ParenExpr {
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

// ============================================================================
// Tests
// ============================================================================
