//! Logos-based lexer for the Java subset
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*[lL]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    #[regex(r"0[bB][01_]+[lL]?")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fFdD]?")]
    #[regex(r"[0-9]+[fFdD]")]
    Float,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    Char,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token(">>>=")]
    UshrEq,

    #[token(">>>")]
    Ushr,

    #[token("<<=")]
    ShlEq,

    #[token(">>=")]
    ShrEq,

    #[token("<<")]
    Shl,

    #[token(">>")]
    Shr,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

    #[token("+=")]
    PlusEq,

    #[token("-=")]
    MinusEq,

    #[token("*=")]
    StarEq,

    #[token("/=")]
    SlashEq,

    #[token("%=")]
    PercentEq,

    #[token("&=")]
    AmpEq,

    #[token("|=")]
    PipeEq,

    #[token("^=")]
    CaretEq,

    #[token("->")]
    Arrow,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("@")]
    At,

    #[token("?")]
    Question,

    #[token("=")]
    Eq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("~")]
    Tilde,

    #[token("!")]
    Bang,

    // =========================================================================
    // KEYWORDS (alphabetical)
    // =========================================================================
    #[token("abstract")]
    AbstractKw,
    #[token("boolean")]
    BooleanKw,
    #[token("break")]
    BreakKw,
    #[token("byte")]
    ByteKw,
    #[token("case")]
    CaseKw,
    #[token("char")]
    CharKw,
    #[token("class")]
    ClassKw,
    #[token("continue")]
    ContinueKw,
    #[token("default")]
    DefaultKw,
    #[token("double")]
    DoubleKw,
    #[token("else")]
    ElseKw,
    #[token("extends")]
    ExtendsKw,
    #[token("false")]
    FalseKw,
    #[token("final")]
    FinalKw,
    #[token("float")]
    FloatKw,
    #[token("if")]
    IfKw,
    #[token("implements")]
    ImplementsKw,
    #[token("import")]
    ImportKw,
    #[token("int")]
    IntKw,
    #[token("interface")]
    InterfaceKw,
    #[token("long")]
    LongKw,
    #[token("null")]
    NullKw,
    #[token("package")]
    PackageKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("public")]
    PublicKw,
    #[token("return")]
    ReturnKw,
    #[token("short")]
    ShortKw,
    #[token("static")]
    StaticKw,
    #[token("switch")]
    SwitchKw,
    #[token("this")]
    ThisKw,
    #[token("true")]
    TrueKw,
    #[token("void")]
    VoidKw,
    #[token("while")]
    WhileKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Float => SyntaxKind::FLOAT,
            String => SyntaxKind::STRING,
            Char => SyntaxKind::CHAR,

            UshrEq => SyntaxKind::USHR_EQ,
            Ushr => SyntaxKind::USHR,
            ShlEq => SyntaxKind::SHL_EQ,
            ShrEq => SyntaxKind::SHR_EQ,
            Shl => SyntaxKind::SHL,
            Shr => SyntaxKind::SHR,
            EqEq => SyntaxKind::EQ_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            AmpAmp => SyntaxKind::AMP_AMP,
            PipePipe => SyntaxKind::PIPE_PIPE,
            PlusPlus => SyntaxKind::PLUS_PLUS,
            MinusMinus => SyntaxKind::MINUS_MINUS,
            PlusEq => SyntaxKind::PLUS_EQ,
            MinusEq => SyntaxKind::MINUS_EQ,
            StarEq => SyntaxKind::STAR_EQ,
            SlashEq => SyntaxKind::SLASH_EQ,
            PercentEq => SyntaxKind::PERCENT_EQ,
            AmpEq => SyntaxKind::AMP_EQ,
            PipeEq => SyntaxKind::PIPE_EQ,
            CaretEq => SyntaxKind::CARET_EQ,
            Arrow => SyntaxKind::ARROW,

            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            At => SyntaxKind::AT,
            Question => SyntaxKind::QUESTION,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Amp => SyntaxKind::AMP,
            Pipe => SyntaxKind::PIPE,
            Caret => SyntaxKind::CARET,
            Tilde => SyntaxKind::TILDE,
            Bang => SyntaxKind::BANG,

            AbstractKw => SyntaxKind::ABSTRACT_KW,
            BooleanKw => SyntaxKind::BOOLEAN_KW,
            BreakKw => SyntaxKind::BREAK_KW,
            ByteKw => SyntaxKind::BYTE_KW,
            CaseKw => SyntaxKind::CASE_KW,
            CharKw => SyntaxKind::CHAR_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            ContinueKw => SyntaxKind::CONTINUE_KW,
            DefaultKw => SyntaxKind::DEFAULT_KW,
            DoubleKw => SyntaxKind::DOUBLE_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            ExtendsKw => SyntaxKind::EXTENDS_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            FinalKw => SyntaxKind::FINAL_KW,
            FloatKw => SyntaxKind::FLOAT_KW,
            IfKw => SyntaxKind::IF_KW,
            ImplementsKw => SyntaxKind::IMPLEMENTS_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            IntKw => SyntaxKind::INT_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            LongKw => SyntaxKind::LONG_KW,
            NullKw => SyntaxKind::NULL_KW,
            PackageKw => SyntaxKind::PACKAGE_KW,
            PrivateKw => SyntaxKind::PRIVATE_KW,
            ProtectedKw => SyntaxKind::PROTECTED_KW,
            PublicKw => SyntaxKind::PUBLIC_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            ShortKw => SyntaxKind::SHORT_KW,
            StaticKw => SyntaxKind::STATIC_KW,
            SwitchKw => SyntaxKind::SWITCH_KW,
            ThisKw => SyntaxKind::THIS_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            VoidKw => SyntaxKind::VOID_KW,
            WhileKw => SyntaxKind::WHILE_KW,
        }
    }
}
