//! Command line arguments for the compiler driver.

use std::{fs, path::{Path, PathBuf}};

use clap::Parser;

use crate::{
    errors::errors::{Error, ErrorImpl, Stage},
    Position, DEBUG_LOG,
};

/// Compiler for a small subset of C
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Stop after lexing
    #[arg(long)]
    pub lex: bool,

    /// Stop after parsing
    #[arg(long)]
    pub parse: bool,

    /// Stop after code generation
    #[arg(long)]
    pub codegen: bool,

    /// Output file path
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Input C source file
    #[arg(short, long, value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Print stage-prefixed debug logs to stdout
    #[arg(long)]
    pub debug: bool,
}

/// Validated driver configuration, built once before any stage runs.
///
/// `--debug` is not part of it: the driver installs logging from `Args`
/// before validation so that validation itself can log.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    stop_after: Option<Stage>,
    output: PathBuf,
    input: PathBuf,
}

fn cli_error(error_impl: ErrorImpl) -> Error {
    Error::new(error_impl, Stage::CliArgs, Position::null())
}

impl Args {
    /// Checks the required paths and resolves the stop-after flags.
    pub fn validate(self) -> Result<Options, Error> {
        let output = self.output.ok_or_else(|| {
            cli_error(ErrorImpl::MissingOption {
                flag: String::from("output"),
            })
        })?;

        let input = self.input.ok_or_else(|| {
            cli_error(ErrorImpl::MissingOption {
                flag: String::from("input"),
            })
        })?;

        if self.debug {
            DEBUG_LOG!(Stage::CliArgs, "CLI argument --debug provided. Enabling debugging");
        }
        if self.lex {
            DEBUG_LOG!(Stage::CliArgs, "CLI argument --lex provided. Stopping after lex");
        }
        if self.parse {
            DEBUG_LOG!(Stage::CliArgs, "CLI argument --parse provided. Stopping after parse");
        }
        if self.codegen {
            DEBUG_LOG!(Stage::CliArgs, "CLI argument --codegen provided. Stopping after codegen");
        }

        // The earliest requested stage wins
        let stop_after = if self.lex {
            Some(Stage::Lex)
        } else if self.parse {
            Some(Stage::Parse)
        } else if self.codegen {
            Some(Stage::Codegen)
        } else {
            None
        };

        DEBUG_LOG!(Stage::CliArgs, "Finished parsing command line arguments");

        Ok(Options {
            stop_after,
            output,
            input,
        })
    }
}

impl Options {
    pub fn stop_after(&self) -> Option<Stage> {
        self.stop_after
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Name used for token positions, the last component of the input path.
    pub fn input_name(&self) -> String {
        self.input
            .file_name()
            .unwrap_or(self.input.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    pub fn read_source(&self) -> Result<String, Error> {
        fs::read_to_string(&self.input).map_err(|err| {
            cli_error(ErrorImpl::FileReadError {
                path: self.input.to_string_lossy().into_owned(),
                message: err.to_string(),
            })
        })
    }
}
