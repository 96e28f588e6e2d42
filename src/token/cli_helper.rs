use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::builtins::BUILTINS;
use crate::primitive::Symbol;


// Rustyline Helper for CliStream; completes builtin names.
#[derive(Default)]
pub struct CliHelper {}

pub struct CliCandidate {
    name: &'static str,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {}
    }

    fn builtin_prefix(&self, prefix: &str) -> Vec<&'static str> {
        let mut res = BUILTINS
            .keys()
            .copied()
            .filter(|name| name.starts_with(prefix))
            .collect::<Vec<_>>();
        res.sort_unstable();
        res
    }

    /// Byte range of the identifier around `pos`.
    fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if !Symbol::is_continue_char(c) && c != '+' {
                if i < pos {
                    start = i + c.len_utf8();
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, end) = self.word_bounds(line, pos);
        let names = self.builtin_prefix(&line[start..end]);
        Ok((
            start,
            names
                .into_iter()
                .map(|name| CliCandidate { name })
                .collect(),
        ))
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = CliCandidate;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn replacement(&self) -> &str {
        self.name
    }
}

impl Hint for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn completion(&self) -> Option<&str> {
        Some(self.name)
    }
}


#[cfg(test)]
#[path = "./cli_helper_test.rs"]
mod cli_helper_test;
