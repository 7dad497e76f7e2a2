use std::fmt;

pub type Result<T> = std::result::Result<T, GrammarError>;

/// One thing the parser would have accepted at the failure offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expectation {
    Literal(char),
    Class(&'static str),
    EndOfInput,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(c) => write!(f, "\"{c}\""),
            Self::Class(class) => f.write_str(class),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// The input does not match the SVG path grammar.
///
/// `offset` is the byte offset of the furthest position the parser reached before giving up;
/// `expected` lists every alternative that was tried there (sorted by description, no duplicates).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected {} but {} found at line {line}, column {column}.", describe_expected(.expected), describe_found(.found))]
pub struct GrammarError {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub expected: Vec<Expectation>,
    pub found: Option<char>,
}

impl GrammarError {
    pub(crate) fn new(input: &str, offset: usize, mut expected: Vec<Expectation>) -> Self {
        expected.sort_by_key(|e| e.to_string());
        expected.dedup();

        let mut line = 1;
        let mut column = 1;
        for ch in input.get(..offset).unwrap_or(input).chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        Self {
            offset,
            line,
            column,
            expected,
            found: input.get(offset..).and_then(|rest| rest.chars().next()),
        }
    }
}

fn describe_expected(expected: &[Expectation]) -> String {
    let descriptions: Vec<String> = expected.iter().map(ToString::to_string).collect();
    match descriptions.as_slice() {
        [] => "nothing".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("\"{}\"", c.escape_default()),
        None => "end of input".to_string(),
    }
}
