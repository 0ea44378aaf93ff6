//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the compiler:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//! - `DEBUG_LOG!` - Emits a stage-prefixed debug log line
//!
//! These macros reduce boilerplate in the lexer and the driver.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Semicolon, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for simple single-token patterns.
///
/// Generates a handler function that creates a token with the given kind
/// and advances the lexer position by the token's length.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^;").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, span));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}

/// Emits a debug log line prefixed with the bracketed stage tag, e.g.
/// `[lex] lexing source text complete`.
///
/// Output only appears once the driver has enabled debugging through
/// `logging::init`.
///
/// # Example
///
/// ```ignore
/// DEBUG_LOG!(Stage::Lex, "scanned {} tokens", tokens.len());
/// ```
#[macro_export]
macro_rules! DEBUG_LOG {
    ($stage:expr, $($arg:tt)+) => {
        tracing::debug!("[{}] {}", $stage, format_args!($($arg)+))
    };
}
