use std::{path::Path, process::exit, time::Instant};

use ccfront::{
    cli::{Args, Options},
    display_error,
    errors::errors::{Error, ErrorImpl, Stage},
    lexer::lexer::tokenize,
    logging, Position, DEBUG_LOG,
};
use clap::Parser;

fn main() {
    let args = Args::parse();

    // Before validation, so argument handling can already log
    logging::init(args.debug);

    let options = match args.validate() {
        Ok(options) => options,
        Err(error) => fail(&error, "", Path::new("")),
    };

    let source = match options.read_source() {
        Ok(source) => source,
        Err(error) => fail(&error, "", options.input()),
    };

    if let Err(error) = run(&options, &source) {
        fail(&error, &source, options.input());
    }
}

fn run(options: &Options, source: &str) -> Result<(), Error> {
    let start = Instant::now();
    let tokens = tokenize(source.to_string(), Some(options.input_name()))?;

    DEBUG_LOG!(Stage::Lex, "Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());
    for token in &tokens {
        DEBUG_LOG!(Stage::Lex, "{}", token);
    }

    if options.stop_after() == Some(Stage::Lex) {
        return Ok(());
    }

    DEBUG_LOG!(
        Stage::Parse,
        "Output would be written to {}",
        options.output().display()
    );

    Err(Error::new(
        ErrorImpl::NotImplementedError,
        Stage::Parse,
        Position::null(),
    ))
}

fn fail(error: &Error, source: &str, file: &Path) -> ! {
    display_error(error, source, file);
    exit(1);
}
