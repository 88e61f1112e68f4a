use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::priority;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{bail, Context, Result};
use log::{trace, warn};

const EXTRA_RIGHT_PARENTHESIS: &str = "extra right parenthesis";
const LEFT_PARENTHESIS_MISSING: &str = "left parenthesis missing";
const RIGHT_PARENTHESIS_MISSING: &str = "right parenthesis missing";

/// Converts infix tokens into postfix order using the shunting-yard algorithm.
///
/// Operators of equal priority are popped before the new one is pushed,
/// which makes every operator left-associative, `^` included.
pub(super) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    if infix_tokens.is_empty() {
        warn!("Conversion error: input is empty");
        bail!(ExpressionError::EmptyInput);
    }

    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());
    for token in infix_tokens {
        match token.kind {
            TokenKind::Integer | TokenKind::FloatingPoint | TokenKind::UnaryOperator => {
                trace!("Operand or unary minus: {}", token);
                output.push(token)
            }
            TokenKind::Operator => {
                trace!("Operator: {}", token);
                parse_operator_token(&mut operators, &mut output, token)
            }
            TokenKind::LeftParenthesis => {
                trace!("Left parenthesis");
                operators.push(token)
            }
            TokenKind::RightParenthesis => {
                trace!("Right parenthesis");
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    trace!("End of input tokens");
    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        if operator.kind == TokenKind::LeftParenthesis {
            return unbalanced(RIGHT_PARENTHESIS_MISSING);
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    if operators.is_empty() {
        return unbalanced(EXTRA_RIGHT_PARENTHESIS);
    }

    loop {
        match operators.last() {
            None => {
                return unbalanced(LEFT_PARENTHESIS_MISSING);
            }
            Some(top_of_operator_stack) => {
                if top_of_operator_stack.kind == TokenKind::LeftParenthesis {
                    break;
                }
                let operator = operators.pop().context("No operators left.")?;
                output.push(operator);
            }
        }
    }

    // Discard the left parenthesis.
    operators.pop();
    Ok(())
}

fn parse_operator_token(operators: &mut Vec<Token>, output: &mut Vec<Token>, token: Token) {
    let current_priority = priority(&token);
    while let Some(top_of_operator_stack) = operators.last() {
        if priority(top_of_operator_stack) < current_priority {
            break;
        }
        if let Some(other_operator) = operators.pop() {
            output.push(other_operator);
        }
    }

    operators.push(token);
}

fn unbalanced(message: &'static str) -> Result<()> {
    warn!("Conversion error: {}", message);
    bail!(ExpressionError::UnbalancedParenthesis { message })
}
