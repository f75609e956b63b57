//! Declared data types.
//!
//! Types are compared structurally: two types are the same type exactly when
//! they are equal as values. Named types are compared by their simple name,
//! so `java.lang.String` and `String` denote the same type.

use std::fmt;

use smol_str::SmolStr;

use crate::parser::{SyntaxKind, TypeRef};

/// A primitive Java type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn from_keyword(kind: SyntaxKind) -> Option<Self> {
        let ty = match kind {
            SyntaxKind::BOOLEAN_KW => Self::Boolean,
            SyntaxKind::BYTE_KW => Self::Byte,
            SyntaxKind::SHORT_KW => Self::Short,
            SyntaxKind::CHAR_KW => Self::Char,
            SyntaxKind::INT_KW => Self::Int,
            SyntaxKind::LONG_KW => Self::Long,
            SyntaxKind::FLOAT_KW => Self::Float,
            SyntaxKind::DOUBLE_KW => Self::Double,
            _ => return None,
        };
        Some(ty)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Char => "char",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

/// A declared data type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(PrimitiveType),
    /// A class, interface or annotation type, by simple name
    Named(SmolStr),
    Array(Box<Type>),
    Void,
}

impl Type {
    /// Lower a syntactic type, applying `extra_dims` array dimensions on top
    /// of the ones written in the type itself.
    pub fn from_ast(ty: &TypeRef, extra_dims: usize) -> Option<Self> {
        let base = match ty.keyword() {
            Some(SyntaxKind::VOID_KW) => Type::Void,
            Some(kind) => Type::Primitive(PrimitiveType::from_keyword(kind)?),
            None => Type::Named(ty.path()?.last_segment()?),
        };
        Some((0..ty.dims() + extra_dims).fold(base, |inner, _| Type::Array(Box::new(inner))))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    /// The component type of an array type
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::Array(inner) => Some(inner),
            _ => None,
        }
    }

    /// The simple name of a named type
    pub fn name(&self) -> Option<&SmolStr> {
        match self {
            Type::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(p) => f.write_str(p.as_str()),
            Type::Named(name) => f.write_str(name),
            Type::Array(inner) => write!(f, "{inner}[]"),
            Type::Void => f.write_str("void"),
        }
    }
}
