//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - The `Stage` tag naming which phase raised an error
//! - Error structures with source position information
//! - Specific error variants for the lexer and the command line driver
//! - Helpful error messages and suggestions

pub mod errors;
