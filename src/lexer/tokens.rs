use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("void", TokenKind::Void);
        map.insert("return", TokenKind::Return);
        map
    };
}

/// Parsed value of a numeric constant. Literals with a decimal point are
/// floats, everything else is an integer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NumericValue {
    Integer(i64),
    Float(f64),
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericValue::Integer(value) => write!(f, "{}", value),
            NumericValue::Float(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Identifier(String),
    Constant(NumericValue),

    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Semicolon,

    // Reserved
    Int,
    Void,
    Return,
}

impl TokenKind {
    /// Source text for tokens whose lexeme is fixed.
    pub fn lexeme(&self) -> Option<&'static str> {
        match self {
            TokenKind::Identifier(_) | TokenKind::Constant(_) => None,
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::OpenBrace => Some("{"),
            TokenKind::CloseBrace => Some("}"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Int => Some("int"),
            TokenKind::Void => Some("void"),
            TokenKind::Return => Some("return"),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "Identifier ({})", name),
            TokenKind::Constant(value) => write!(f, "Constant ({})", value),
            TokenKind::OpenParen => write!(f, "OpenParen"),
            TokenKind::CloseParen => write!(f, "CloseParen"),
            TokenKind::OpenBrace => write!(f, "OpenBrace"),
            TokenKind::CloseBrace => write!(f, "CloseBrace"),
            TokenKind::Semicolon => write!(f, "Semicolon"),
            TokenKind::Int => write!(f, "Int"),
            TokenKind::Void => write!(f, "Void"),
            TokenKind::Return => write!(f, "Return"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}..{}", self.kind, self.span.start.0, self.span.end.0)
    }
}
