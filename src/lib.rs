#![allow(clippy::module_inception)]

use std::{fmt::Write, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod cli;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn is_null(&self) -> bool {
        self.1.as_str() == "<null>"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the text of that line and the byte
/// offset of `position` within it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}


/// Formats `error` the way the driver prints it: the fatal line, then an
/// excerpt of `source` pointing at the error when its position is known.
pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    /*
        Fatal error during lexing: message
        note: suggestion
        -> main.c:4:12
          |
        4 | return @;
          | -------^
    */

    let mut out = String::new();

    let _ = writeln!(out, "{}", error.report());
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        let _ = writeln!(out, "note: {}", tip);
    }

    let position = error.get_position();
    if position.is_null() {
        return out;
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let _ = writeln!(
        out,
        "-> {}:{}:{}",
        file.as_os_str().to_string_lossy(),
        line,
        line_pos + 1
    );
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

/// Prints `error` to stderr, see `render_error`.
pub fn display_error(error: &Error, source: &str, file: &Path) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
