use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::cli_helper::CliHelper;
use super::token::Token;
use super::tokenizer::{TokenizeError, Tokenizer};


/// Reads expressions from the terminal, one per item.
///
/// Lines are joined until every paren opened so far is closed, so a single
/// expression may span several lines.
pub struct CliStream {
    editor: Editor<CliHelper>,
    depth: usize,

    curr_expr: String,
}

impl CliStream {
    pub fn new() -> CliStream {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new()));

        CliStream {
            editor,
            depth: 0,

            curr_expr: String::default(),
        }
    }

    fn clear(&mut self) {
        self.depth = 0;
        self.curr_expr.clear();
    }
}

impl Default for CliStream {
    fn default() -> Self {
        Self::new()
    }
}


/// Paren depth after `line`, starting from `depth`.
///
/// Extra closing parens bottom out at 0; the parser reports them.
pub fn paren_depth(depth: usize, line: &str) -> Result<usize, TokenizeError> {
    let mut depth = depth;
    for info in Tokenizer::new(line)? {
        match info?.token() {
            Token::LeftParen => depth += 1,
            Token::RightParen => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(depth)
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let line = if self.depth == 0 {
                self.editor.readline("> ")
            } else {
                self.editor
                    .readline(&format!("..{}", "  ".repeat(self.depth)))
            };

            match line {
                Ok(line) => {
                    self.depth = match paren_depth(self.depth, &line) {
                        Ok(depth) => depth,
                        Err(err) => {
                            println!("{}", err);
                            println!();
                            self.clear();
                            continue;
                        }
                    };
                    if !self.curr_expr.is_empty() {
                        self.curr_expr.push('\n');
                    }
                    self.curr_expr += &line;

                    if self.depth > 0 {
                        continue;
                    }
                    if self.curr_expr.trim().is_empty() {
                        self.clear();
                        continue;
                    }
                    let expr = std::mem::take(&mut self.curr_expr);
                    self.editor.add_history_entry(expr.as_str());
                    return Some(expr);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Enable ^C to cancel an expression mid-parse.
                    self.clear();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    self.clear();
                    return None;
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!();
                    self.clear();
                    continue;
                }
            }
        }
    }
}


#[cfg(test)]
#[path = "./cli_stream_test.rs"]
mod cli_stream_test;
