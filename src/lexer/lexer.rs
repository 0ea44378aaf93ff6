use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl, MalformedNumberReason, Stage},
    Position, Span, DEBUG_LOG, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{NumericValue, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \\t\\n\\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBrace, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBrace, "}") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^_[a-zA-Z0-9_]*").unwrap(), handler: invalid_identifier_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\.[0-9]+").unwrap(), handler: leading_decimal_handler },
    ];

    // Everything that could belong to a broken numeric literal, used for error messages.
    static ref MALFORMED_NUMBER: Regex = Regex::new("^[a-zA-Z0-9_.]+").unwrap();
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Character `offset` bytes past the cursor, without consuming anything.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.remainder()
            .get(offset..)
            .and_then(|rest| rest.chars().next())
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Text matched by `regex` at the cursor, empty if it does not match.
    pub fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    // The whole word is consumed before the keyword lookup, so `integer` never becomes `int`.
    let value = lexer.matched(regex);
    let span = lexer.span_of(value.len());

    let kind = match RESERVED_LOOKUP.get(value.as_str()) {
        Some(kind) => kind.clone(),
        None => TokenKind::Identifier(value.clone()),
    };

    lexer.push(MK_TOKEN!(kind, span));
    lexer.advance_n(value.len());
    Ok(())
}

fn invalid_identifier_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    Err(Error::lex(
        ErrorImpl::InvalidIdentifier {
            identifier: lexer.matched(regex),
        },
        lexer.position(),
    ))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let literal = lexer.matched(regex);
    let is_float = literal.contains('.');

    let malformed = match lexer.peek(literal.len()) {
        Some('.') if is_float => Some(MalformedNumberReason::DoubleDecimalPoint),
        Some('.') => Some(MalformedNumberReason::TrailingDecimalPoint),
        Some(c) if is_identifier_char(c) => Some(MalformedNumberReason::InvalidSuffix),
        _ => None,
    };

    if let Some(reason) = malformed {
        return Err(Error::lex(
            ErrorImpl::MalformedNumber {
                literal: lexer.matched(&MALFORMED_NUMBER),
                reason,
            },
            lexer.position(),
        ));
    }

    // Integers too wide for i64 are kept as floats. The span is digits with at
    // most one decimal point, which f64 always accepts.
    let value = match literal.parse::<i64>() {
        Ok(value) => NumericValue::Integer(value),
        Err(_) => NumericValue::Float(literal.parse::<f64>().unwrap_or(f64::INFINITY)),
    };

    let span = lexer.span_of(literal.len());
    lexer.push(MK_TOKEN!(TokenKind::Constant(value), span));
    lexer.advance_n(literal.len());
    Ok(())
}

fn leading_decimal_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    Err(Error::lex(
        ErrorImpl::MalformedNumber {
            literal: lexer.matched(&MALFORMED_NUMBER),
            reason: MalformedNumberReason::MissingIntegerPart,
        },
        lexer.position(),
    ))
}

/// Converts `source` into tokens whose spans refer to `file` (or `shell`).
///
/// Stops at the first lexical error; no partial token list is returned.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::lex(
                    ErrorImpl::UnrecognisedToken { token },
                    lex.position(),
                ));
            }
        }
    }

    DEBUG_LOG!(Stage::Lex, "lexing source text complete");
    Ok(lex.tokens)
}

/// Token kinds of `source`, without positions.
pub fn scan(source: &str) -> Result<Vec<TokenKind>, Error> {
    let tokens = tokenize(source.to_string(), None)?;
    Ok(tokens.into_iter().map(|token| token.kind).collect())
}
