use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The compiler phase an error was raised in.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Stage {
    CliArgs,
    Lex,
    Parse,
    Codegen,
    CodeEmission,
}

impl Stage {
    /// Human readable name of the phase, used in fatal error prefixes.
    pub fn describe(&self) -> &'static str {
        match self {
            Stage::CliArgs => "command line argument parsing",
            Stage::Lex => "lexing",
            Stage::Parse => "parsing",
            Stage::Codegen => "code generation",
            Stage::CodeEmission => "code emission",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Stage::CliArgs => "cliArgs",
            Stage::Lex => "lex",
            Stage::Parse => "parse",
            Stage::Codegen => "codegen",
            Stage::CodeEmission => "codeEmission",
        };

        write!(f, "{}", tag)
    }
}

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    stage: Stage,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, stage: Stage, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            stage,
            position,
        }
    }

    /// Shorthand for errors raised by the tokenizer.
    pub fn lex(error_impl: ErrorImpl, position: Position) -> Self {
        Error::new(error_impl, Stage::Lex, position)
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_stage(&self) -> Stage {
        self.stage
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::MissingOption { .. } => "MissingOption",
            ErrorImpl::FileReadError { .. } => "FileReadError",
            ErrorImpl::NotImplementedError => "NotImplementedError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidIdentifier { identifier } => ErrorTip::Suggestion(format!(
                "Identifiers must start with a letter, `{}` does not",
                identifier
            )),
            ErrorImpl::MalformedNumber { reason, .. } => match reason {
                MalformedNumberReason::TrailingDecimalPoint => ErrorTip::Suggestion(
                    String::from("Add at least one digit after the decimal point"),
                ),
                MalformedNumberReason::DoubleDecimalPoint => ErrorTip::Suggestion(
                    String::from("A number may contain at most one decimal point"),
                ),
                MalformedNumberReason::MissingIntegerPart => ErrorTip::Suggestion(
                    String::from("Add a leading digit, e.g. `0.5` instead of `.5`"),
                ),
                MalformedNumberReason::InvalidSuffix => ErrorTip::Suggestion(String::from(
                    "Separate the number from the following name, names cannot start with a digit",
                )),
            },
            ErrorImpl::MissingOption { flag } => {
                ErrorTip::Suggestion(format!("Pass `--{}` on the command line", flag))
            }
            ErrorImpl::FileReadError { .. } => ErrorTip::None,
            ErrorImpl::NotImplementedError => ErrorTip::Suggestion(String::from(
                "This stage is expected to be handled, but has not yet been implemented",
            )),
        }
    }

    /// The line the driver prints before exiting.
    pub fn report(&self) -> String {
        format!("Fatal error during {}: {}", self.stage.describe(), self)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MalformedNumberReason {
    TrailingDecimalPoint,
    DoubleDecimalPoint,
    MissingIntegerPart,
    InvalidSuffix,
}

impl Display for MalformedNumberReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedNumberReason::TrailingDecimalPoint => {
                write!(f, "decimal point is not followed by a digit")
            }
            MalformedNumberReason::DoubleDecimalPoint => write!(f, "more than one decimal point"),
            MalformedNumberReason::MissingIntegerPart => {
                write!(f, "decimal point is not preceded by a digit")
            }
            MalformedNumberReason::InvalidSuffix => {
                write!(f, "number is immediately followed by a name character")
            }
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unknown character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("invalid identifier {identifier:?}")]
    InvalidIdentifier { identifier: String },
    #[error("invalid number {literal:?}: {reason}")]
    MalformedNumber {
        literal: String,
        reason: MalformedNumberReason,
    },
    #[error("No {flag} path provided. Use --{flag} to specify the {flag} file path.")]
    MissingOption { flag: String },
    #[error("could not read {path:?}: {message}")]
    FileReadError { path: String, message: String },
    #[error("not implemented error")]
    NotImplementedError,
}
