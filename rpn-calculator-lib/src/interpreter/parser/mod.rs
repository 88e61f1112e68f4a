mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use anyhow::Result;
use log::debug;

/// Parses the given infix tokens into an equivalent sequence in postfix order,
/// which can be evaluated in a single pass without looking at precedence.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent tokens in postfix format, without any parentheses.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::parser::parse;
/// use rpn_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::integer("2"),
///     Token::operator('^'),
///     Token::integer("3"),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens[2], Token::operator('^'));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("Postfix tokens: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
