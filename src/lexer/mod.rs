//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts C source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, constants and punctuation
//! - Token position tracking for error reporting
//! - Rejection of malformed identifiers and numeric literals

pub mod lexer;
pub mod tokens;
