//! Basic REPL over schemelet::run.
//!
//! Run as:                     `RUST_LOG=info cargo run --example repl`.
//! Evaluate one expression as: `cargo run --example repl -- -e "(+ 1 2)"`.
//!
//! Each expression is evaluated on its own; nothing carries over between
//! inputs. Pass --echo to print each parsed datum before its value.

use clap::{Arg, Command};
use colored::Colorize;
use log::LevelFilter;

use schemelet::error::Error;
use schemelet::parser::parse;
use schemelet::token::cli_stream::CliStream;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("schemelet REPL")
        .version("0.1")
        .about("Evaluates Scheme-subset expressions one at a time")
        .arg(
            Arg::new("eval")
                .short('e')
                .long("eval")
                .takes_value(true)
                .value_name("EXPR")
                .help("Evaluate EXPR, print the result and exit"),
        )
        .arg(
            Arg::new("echo")
                .long("echo")
                .help("Print each parsed datum before its value"),
        )
        .get_matches();
    let echo = matches.is_present("echo");

    if let Some(expr) = matches.value_of("eval") {
        return match evaluate(expr, echo) {
            Ok(val) => {
                println!("{}", val);
                Ok(())
            }
            Err(err) => Err(format!("{}: {}", err.kind(), err)),
        };
    }

    for expr in CliStream::new() {
        print_result(&evaluate(&expr, echo));
    }
    Ok(())
}

fn evaluate(expr: &str, echo: bool) -> Result<String, Error> {
    if echo {
        let datum = parse(expr)?;
        println!("{} {}", "=>".dimmed(), datum.colored());
    }
    schemelet::run(expr)
}

fn print_result(result: &Result<String, Error>) {
    match result {
        Ok(val) => {
            println!("-> {}", val);
        }
        Err(err) => {
            println!("{} {}", err.kind().to_string().red().bold(), err);
        }
    };
    println!();
}
