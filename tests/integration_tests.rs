//! Integration tests for the compiler front end.
//!
//! These tests drive the public API the way the command line driver does:
//! argument validation, reading the source file and tokenization.

use ccfront::{
    cli::Args,
    errors::errors::Stage,
    lexer::{
        lexer::{scan, tokenize},
        tokens::{NumericValue, TokenKind},
    },
    render_error,
};
use clap::Parser;
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

const PROGRAM: &str = "int main(void) {\n    return 2;\n}\n";

fn write_source(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("ccfront_tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run_driver(input: &Path, flags: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ccfront"))
        .args(flags)
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(std::env::temp_dir().join("ccfront_tests").join("out.s"))
        .output()
        .unwrap()
}

#[test]
fn test_lex_file_from_command_line() {
    let input = write_source("return_2.c", PROGRAM);
    let args = Args::try_parse_from([
        "ccfront",
        "--lex",
        "--input",
        input.to_str().unwrap(),
        "--output",
        "return_2.s",
    ])
    .unwrap();

    let options = args.validate().unwrap();
    let source = options.read_source().unwrap();
    let tokens = tokenize(source, Some(options.input_name())).unwrap();

    assert_eq!(options.stop_after(), Some(Stage::Lex));
    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[7].kind, TokenKind::Constant(NumericValue::Integer(2)));
    assert_eq!(tokens[7].span.start.1.as_str(), "return_2.c");
}

#[test]
fn test_lex_error_rendering() {
    let input = write_source("bad_number.c", "int main(void) {\n    return 1.;\n}\n");
    let source = fs::read_to_string(&input).unwrap();
    let error = tokenize(source.clone(), Some("bad_number.c".to_string())).unwrap_err();

    let rendered = render_error(&error, &source, std::path::Path::new("bad_number.c"));
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Fatal error during lexing: invalid number \"1.\": decimal point is not followed by a digit"
    );
    assert!(lines[1].starts_with("note: "));
    assert_eq!(lines[2], "-> bad_number.c:2:12");
    assert_eq!(lines[4], "2 | return 1.;");
    assert_eq!(lines[5], "  | -------^");
}

#[test]
fn test_whitespace_invariance() {
    let programs = [
        "int main(void) { return 42; }",
        "int integer(void){return 4.25;}",
        "void f() { return; } int g() { return 0; }",
    ];
    let separators = [" ", "\n", "\t\t", " \r\n ", "\n\n    "];

    for program in programs {
        let tokens = tokenize(program.to_string(), None).unwrap();
        let expected = scan(program).unwrap();

        for separator in separators {
            let padded = tokens
                .iter()
                .map(|token| &program[token.span.start.0 as usize..token.span.end.0 as usize])
                .collect::<Vec<_>>()
                .join(separator);

            assert_eq!(scan(&padded).unwrap(), expected, "padded with {:?}", separator);
        }
    }
}

#[test]
fn test_spans_cover_lexemes() {
    let tokens = tokenize(PROGRAM.to_string(), None).unwrap();

    let lexemes: Vec<&str> = tokens
        .iter()
        .map(|token| &PROGRAM[token.span.start.0 as usize..token.span.end.0 as usize])
        .collect();

    assert_eq!(
        lexemes,
        vec!["int", "main", "(", "void", ")", "{", "return", "2", ";", "}"]
    );

    for pair in tokens.windows(2) {
        assert!(pair[0].span.end.0 <= pair[1].span.start.0);
    }
}

#[test]
fn test_scan_terminates_on_arbitrary_input() {
    let alphabet: Vec<char> = "int void return main_1 (){};.0123456789 \t\n_@#é"
        .chars()
        .collect();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;

    for length in 0..200 {
        let input: String = (0..length)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                alphabet[(state % alphabet.len() as u64) as usize]
            })
            .collect();

        if let Ok(tokens) = tokenize(input.clone(), None) {
            assert!(tokens.len() <= input.len());
            assert!(tokens
                .iter()
                .all(|token| token.span.end.0 > token.span.start.0));
        }
    }
}

#[test]
fn test_token_examples() {
    let ident = |name: &str| TokenKind::Identifier(name.to_string());

    assert_eq!(scan("integer").unwrap(), vec![ident("integer")]);
    assert_eq!(scan("int").unwrap(), vec![TokenKind::Int]);
    assert_eq!(scan("int1").unwrap(), vec![ident("int1")]);
    assert_eq!(
        scan("42").unwrap(),
        vec![TokenKind::Constant(NumericValue::Integer(42))]
    );
    assert_eq!(
        scan("42.0").unwrap(),
        vec![TokenKind::Constant(NumericValue::Float(42.0))]
    );
    assert_eq!(scan("main_123").unwrap(), vec![ident("main_123")]);
    assert!(scan("").unwrap().is_empty());

    for bad in ["42.0.0", ".42", "0.", "1foobar", "_foobar"] {
        let error = scan(bad).unwrap_err();
        assert_eq!(error.get_stage(), Stage::Lex, "{:?}", bad);
    }
}

#[test]
fn test_driver_lex_error_exits_with_failure() {
    let input = write_source("driver_bad.c", "int main(void) {\n    return @;\n}\n");
    let output = run_driver(&input, &["--lex"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Fatal error during lexing:"), "{}", stderr);
    assert!(stderr.contains("2 | return @;"), "{}", stderr);
}

#[test]
fn test_driver_lex_with_debug_log() {
    let input = write_source("driver_good.c", PROGRAM);
    let output = run_driver(&input, &["--lex", "--debug"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("[lex] lexing source text complete"), "{}", stdout);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_driver_lex_without_debug_is_silent() {
    let input = write_source("driver_quiet.c", PROGRAM);
    let output = run_driver(&input, &["--lex"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_driver_without_stop_flag_fails_at_parse() {
    let input = write_source("driver_parse.c", PROGRAM);
    let output = run_driver(&input, &[]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Fatal error during parsing"), "{}", stderr);
}
