use anyhow::{bail, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use rpn_calculator::interpreter::evaluator::evaluate_postfix;
use rpn_calculator::interpreter::lexer::tokenize;
use rpn_calculator::interpreter::{convert, tokens_to_string};
use std::io;
use std::io::BufRead;

/// Evaluates arithmetic expressions such as "(7-2)*(4+1)/3"
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. If omitted, every line of standard input
    /// is evaluated as a separate expression
    expression: Option<String>,

    /// Also print the expression in postfix (reverse polish) notation
    #[clap(short, long)]
    postfix: bool,

    /// Also print the tokens the expression was split into
    #[clap(short, long)]
    tokens: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    match &args.expression {
        Some(expression) => {
            let value = calculate(expression, &args)?;
            println!("{}", value);
            Ok(())
        }
        None => calculate_lines(&args),
    }
}

fn calculate_lines(args: &Arguments) -> Result<()> {
    let mut evaluated = 0;
    let mut failed = 0;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        evaluated += 1;
        match calculate(&line, args) {
            Ok(value) => println!("{}", value),
            Err(error) => {
                failed += 1;
                eprintln!("{}: {}", line, error);
            }
        }
    }

    info!("Evaluated {} expressions, {} failed", evaluated, failed);
    if failed > 0 {
        bail!(
            "{} of {} expressions could not be evaluated",
            failed,
            evaluated
        );
    }
    Ok(())
}

fn calculate(expression: &str, args: &Arguments) -> Result<f64> {
    if args.tokens {
        let tokens = tokenize(expression)?;
        println!("tokens: {}", tokens_to_string(&tokens)?);
    }

    let postfix_tokens = convert(expression)?;
    if args.postfix {
        println!("postfix: {}", tokens_to_string(&postfix_tokens)?);
    }

    evaluate_postfix(&postfix_tokens)
}
