//! Declaration extraction from AST — pure functions that return declarations.
//!
//! Extraction runs per file and produces file-local declaration ids. The
//! [`SymbolIndex`](super::SymbolIndex) rebases them when files are merged.

use smol_str::SmolStr;

use super::types::Type;
use crate::base::{FileId, TextRange};
use crate::parser::{
    AstNode, ClassDecl, LocalVarDecl, Member, MethodDecl, Modifiers, Name, SourceFile, SyntaxNode,
    TypeDecl, Variable,
};

/// Identifier of a declaration in a [`SymbolIndex`](super::SymbolIndex).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeclId(u32);

impl DeclId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn shifted(self, offset: u32) -> Self {
        Self(self.0 + offset)
    }
}

/// The kind of a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Interface,
    AnnotationType,
    Field,
    Method,
    Parameter,
    Local,
}

impl DeclKind {
    pub fn is_type(self) -> bool {
        matches!(self, Self::Class | Self::Interface | Self::AnnotationType)
    }

    /// Fields, parameters and locals
    pub fn is_variable(self) -> bool {
        matches!(self, Self::Field | Self::Parameter | Self::Local)
    }

    pub fn display(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::AnnotationType => "annotation type",
            Self::Field => "field",
            Self::Method => "method",
            Self::Parameter => "parameter",
            Self::Local => "local variable",
        }
    }
}

/// A declaration extracted from source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: SmolStr,
    pub kind: DeclKind,
    /// Declared type of a variable, return type of a method, `None` for types
    pub ty: Option<Type>,
    /// Simple names of the annotations written on the declaration, in order
    pub annotations: Vec<SmolStr>,
    /// Enclosing type of a member or nested type, enclosing method of a
    /// parameter or local
    pub container: Option<DeclId>,
    /// Fields and methods of a type, in declaration order
    pub members: Vec<DeclId>,
    /// Parameters of a method, in declaration order
    pub params: Vec<DeclId>,
    /// Simple names of the `extends`/`implements` types
    pub supertypes: Vec<SmolStr>,
    /// Position of a field among its type's fields, or of a parameter in
    /// its method
    pub ordinal: u32,
    /// Source text of a variable initializer
    pub initializer: Option<SmolStr>,
    pub file: FileId,
    /// Range of the declaring NAME node
    pub name_range: TextRange,
}

impl Declaration {
    fn new(name: SmolStr, kind: DeclKind, file: FileId, name_range: TextRange) -> Self {
        Self {
            name,
            kind,
            ty: None,
            annotations: Vec::new(),
            container: None,
            members: Vec::new(),
            params: Vec::new(),
            supertypes: Vec::new(),
            ordinal: 0,
            initializer: None,
            file,
            name_range,
        }
    }

    pub(crate) fn rebase(&mut self, offset: u32) {
        self.container = self.container.map(|id| id.shifted(offset));
        for id in self.members.iter_mut().chain(self.params.iter_mut()) {
            *id = id.shifted(offset);
        }
    }
}

/// A single-static-import or static-import-on-demand of a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StaticImport {
    /// `import static a.b.Type.MEMBER;`
    Member { type_name: SmolStr, member: SmolStr },
    /// `import static a.b.Type.*;`
    Wildcard { type_name: SmolStr },
}

/// Everything extracted from one file.
#[derive(Clone, Debug, Default)]
pub struct FileSymbols {
    /// Declarations with file-local ids
    pub decls: Vec<Declaration>,
    pub static_imports: Vec<StaticImport>,
}

/// Extract all declarations and static imports of a parsed file.
pub fn extract_file(file: FileId, root: &SyntaxNode) -> FileSymbols {
    let mut extractor = Extractor {
        file,
        out: FileSymbols::default(),
    };
    if let Some(source) = SourceFile::cast(root.clone()) {
        for import in source.imports() {
            extractor.extract_import(&import);
        }
        for decl in source.type_decls() {
            extractor.extract_type(&decl, None);
        }
    }
    extractor.out
}

struct Extractor {
    file: FileId,
    out: FileSymbols,
}

impl Extractor {
    fn push(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId::new(self.out.decls.len() as u32);
        self.out.decls.push(decl);
        id
    }

    fn new_decl(&self, name: &Name, kind: DeclKind) -> Option<Declaration> {
        let text = name.text()?;
        Some(Declaration::new(text, kind, self.file, name.syntax().text_range()))
    }

    fn extract_import(&mut self, import: &crate::parser::ImportDecl) {
        if !import.is_static() {
            return;
        }
        let Some(mut segments) = import.path().map(|p| p.segments()) else {
            return;
        };
        let static_import = if import.is_wildcard() {
            let Some(type_name) = segments.pop() else {
                return;
            };
            StaticImport::Wildcard { type_name }
        } else {
            let (Some(member), Some(type_name)) = (segments.pop(), segments.pop()) else {
                return;
            };
            StaticImport::Member { type_name, member }
        };
        self.out.static_imports.push(static_import);
    }

    fn extract_type(&mut self, decl: &TypeDecl, container: Option<DeclId>) {
        let kind = match decl {
            TypeDecl::Class(class) if class.is_interface() => DeclKind::Interface,
            TypeDecl::Class(_) => DeclKind::Class,
            TypeDecl::AnnotationType(_) => DeclKind::AnnotationType,
        };
        let Some(mut declaration) = decl.name().and_then(|n| self.new_decl(&n, kind)) else {
            return;
        };
        declaration.container = container;
        declaration.annotations = annotation_names(decl.modifiers());
        if let TypeDecl::Class(class) = decl {
            declaration.supertypes = supertype_names(class);
        }
        let type_id = self.push(declaration);

        let Some(body) = decl.body() else {
            return;
        };
        let mut members = Vec::new();
        let mut field_ordinal = 0;
        for member in body.members() {
            match member {
                Member::Field(field) => {
                    let annotations = annotation_names(field.modifiers());
                    for variable in field.variables() {
                        let Some(mut declaration) =
                            self.variable_decl(&variable, field.ty(), DeclKind::Field)
                        else {
                            continue;
                        };
                        declaration.annotations = annotations.clone();
                        declaration.container = Some(type_id);
                        declaration.ordinal = field_ordinal;
                        field_ordinal += 1;
                        members.push(self.push(declaration));
                    }
                }
                Member::Method(method) => {
                    if let Some(id) = self.extract_method(&method, type_id) {
                        members.push(id);
                    }
                }
                Member::Type(nested) => self.extract_type(&nested, Some(type_id)),
            }
        }
        self.out.decls[type_id.index()].members = members;
    }

    fn extract_method(&mut self, method: &MethodDecl, type_id: DeclId) -> Option<DeclId> {
        let mut declaration = self.new_decl(&method.name()?, DeclKind::Method)?;
        declaration.ty = method.ret_type().and_then(|t| Type::from_ast(&t, 0));
        declaration.annotations = annotation_names(method.modifiers());
        declaration.container = Some(type_id);
        let method_id = self.push(declaration);

        let mut params = Vec::new();
        for (ordinal, param) in method.params().enumerate() {
            let Some(mut declaration) = param
                .name()
                .and_then(|n| self.new_decl(&n, DeclKind::Parameter))
            else {
                continue;
            };
            declaration.ty = param.ty().and_then(|t| Type::from_ast(&t, 0));
            declaration.annotations = annotation_names(param.modifiers());
            declaration.container = Some(method_id);
            declaration.ordinal = ordinal as u32;
            params.push(self.push(declaration));
        }
        self.out.decls[method_id.index()].params = params;

        if let Some(body) = method.body() {
            for local in body.syntax().descendants().filter_map(LocalVarDecl::cast) {
                let annotations = annotation_names(local.modifiers());
                for variable in local.variables() {
                    let Some(mut declaration) =
                        self.variable_decl(&variable, local.ty(), DeclKind::Local)
                    else {
                        continue;
                    };
                    declaration.annotations = annotations.clone();
                    declaration.container = Some(method_id);
                    self.push(declaration);
                }
            }
        }
        Some(method_id)
    }

    fn variable_decl(
        &self,
        variable: &Variable,
        ty: Option<crate::parser::TypeRef>,
        kind: DeclKind,
    ) -> Option<Declaration> {
        let mut declaration = self.new_decl(&variable.name()?, kind)?;
        declaration.ty = ty.and_then(|t| Type::from_ast(&t, variable.dims()));
        declaration.initializer = variable
            .initializer()
            .map(|e| SmolStr::new(e.syntax().text().to_string().trim()));
        Some(declaration)
    }
}

fn annotation_names(modifiers: Option<Modifiers>) -> Vec<SmolStr> {
    modifiers
        .map(|m| {
            m.annotations()
                .filter_map(|a| a.path()?.last_segment())
                .collect()
        })
        .unwrap_or_default()
}

fn supertype_names(class: &ClassDecl) -> Vec<SmolStr> {
    class
        .extends()
        .chain(class.implements())
        .filter_map(|t| t.path()?.last_segment())
        .collect()
}
