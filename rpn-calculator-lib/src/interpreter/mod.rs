pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

pub use crate::interpreter::error::ExpressionError;
pub use crate::interpreter::operator::BinaryOperator;

/// Calculates the value of the given arithmetic expression.
///
/// Every call starts from a clean slate, so calls are independent of each other
/// and may run concurrently.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, without whitespace.
///
/// returns: The value of the expression, or the first error any stage reported.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::{evaluate, ExpressionError};
///
/// assert_eq!(evaluate("(7-2)*4").unwrap(), 20.0);
///
/// let error = evaluate("(5+5))").unwrap_err();
/// let error = error.downcast_ref::<ExpressionError>().unwrap();
/// assert!(error.is_syntax());
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    let postfix_tokens = convert(expression)?;
    let value = evaluate_postfix(&postfix_tokens)?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Converts the given input string into an equivalent sequence of tokens in
/// postfix order, which is easier to evaluate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent tokens in postfix order.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::{convert, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = convert("5+4-3")?;
/// assert_eq!(tokens_to_string(&postfix_tokens)?, "5 4 + 3 -");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = parser::parse(tokens)?;
    Ok(postfix_tokens)
}

/// Pretty-prints the given tokens, separated by whitespace.
/// A unary minus is kept next to the number it negates.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::tokens_to_string;
/// use rpn_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::unary_minus(),
///     Token::integer("3"),
///     Token::integer("2"),
///     Token::operator('^'),
/// ];
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "-3 2 ^");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        builder.append(token.lexeme.as_str());
        let is_last = index + 1 == tokens.len();
        if token.kind != TokenKind::UnaryOperator && !is_last {
            builder.append(" ");
        }
    }

    builder.string().context("Failed to build token string")
}
