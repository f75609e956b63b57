//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! of the supported Java subset.

/// All syntax kinds (tokens and nodes)
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (declarations, statements, expressions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier
    INTEGER, // 42, 0x2A, 42L
    FLOAT,   // 3.14, 1e3f
    STRING,  // "hello"
    CHAR,    // 'c'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_BRACKET,   // [
    R_BRACKET,   // ]
    L_PAREN,     // (
    R_PAREN,     // )
    SEMICOLON,   // ;
    COLON,       // :
    COMMA,       // ,
    DOT,         // .
    AT,          // @
    QUESTION,    // ?
    EQ,          // =
    EQ_EQ,       // ==
    BANG_EQ,     // !=
    LT,          // <
    GT,          // >
    LT_EQ,       // <=
    GT_EQ,       // >=
    PLUS,        // +
    MINUS,       // -
    STAR,        // *
    SLASH,       // /
    PERCENT,     // %
    AMP,         // &
    PIPE,        // |
    CARET,       // ^
    TILDE,       // ~
    BANG,        // !
    AMP_AMP,     // &&
    PIPE_PIPE,   // ||
    PLUS_PLUS,   // ++
    MINUS_MINUS, // --
    SHL,         // <<
    SHR,         // >>
    USHR,        // >>>
    PLUS_EQ,     // +=
    MINUS_EQ,    // -=
    STAR_EQ,     // *=
    SLASH_EQ,    // /=
    PERCENT_EQ,  // %=
    AMP_EQ,      // &=
    PIPE_EQ,     // |=
    CARET_EQ,    // ^=
    SHL_EQ,      // <<=
    SHR_EQ,      // >>=
    USHR_EQ,     // >>>=
    ARROW,       // ->

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    // Declarations
    PACKAGE_KW,
    IMPORT_KW,
    CLASS_KW,
    INTERFACE_KW,
    EXTENDS_KW,
    IMPLEMENTS_KW,
    DEFAULT_KW,

    // Modifiers
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    STATIC_KW,
    FINAL_KW,
    ABSTRACT_KW,

    // Primitive types
    BOOLEAN_KW,
    BYTE_KW,
    SHORT_KW,
    CHAR_KW,
    INT_KW,
    LONG_KW,
    FLOAT_KW,
    DOUBLE_KW,
    VOID_KW,

    // Statements
    SWITCH_KW,
    CASE_KW,
    RETURN_KW,
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    BREAK_KW,
    CONTINUE_KW,

    // Expression keywords
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
    THIS_KW,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    // Root
    SOURCE_FILE,
    PACKAGE_DECL,
    IMPORT_DECL,

    // Type declarations
    CLASS_DECL,
    ANNOTATION_TYPE_DECL,
    CLASS_BODY,
    EXTENDS_CLAUSE,
    IMPLEMENTS_CLAUSE,

    // Members
    MODIFIERS,
    ANNOTATION,
    FIELD_DECL,
    METHOD_DECL,
    PARAM_LIST,
    PARAM,
    VARIABLE,

    // Names and types
    NAME,
    PATH,
    TYPE,

    // Statements
    BLOCK,
    LOCAL_VAR_DECL,
    EXPR_STMT,
    SWITCH_STMT,
    SWITCH_BODY,
    SWITCH_LABEL,
    RETURN_STMT,
    IF_STMT,
    WHILE_STMT,
    BREAK_STMT,
    CONTINUE_STMT,
    EMPTY_STMT,

    // Expressions
    ASSIGN_EXPR,
    CONDITIONAL_EXPR,
    BINARY_EXPR,
    PREFIX_EXPR,
    POSTFIX_EXPR,
    CALL_EXPR,
    ARG_LIST,
    INDEX_EXPR,
    FIELD_EXPR,
    REF_EXPR,
    LITERAL,
    PAREN_EXPR,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::PACKAGE_KW as u16) && (self as u16) <= (Self::THIS_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::ARROW as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INTEGER
                | Self::FLOAT
                | Self::STRING
                | Self::CHAR
                | Self::TRUE_KW
                | Self::FALSE_KW
                | Self::NULL_KW
        )
    }

    /// Check if this keyword names a primitive type (`void` excluded)
    pub fn is_primitive_type(self) -> bool {
        (self as u16) >= (Self::BOOLEAN_KW as u16) && (self as u16) <= (Self::DOUBLE_KW as u16)
    }

    /// Check if this keyword is a declaration modifier
    pub fn is_modifier(self) -> bool {
        (self as u16) >= (Self::PUBLIC_KW as u16) && (self as u16) <= (Self::ABSTRACT_KW as u16)
    }

    /// Check if this token is an assignment operator (`=` or compound)
    pub fn is_assign_op(self) -> bool {
        matches!(self, Self::EQ)
            || ((self as u16) >= (Self::PLUS_EQ as u16) && (self as u16) <= (Self::USHR_EQ as u16))
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JavaLanguage {}

impl rowan::Language for JavaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<JavaLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<JavaLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<JavaLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<JavaLanguage>;
