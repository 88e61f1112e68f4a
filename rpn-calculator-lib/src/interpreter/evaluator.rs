use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{anyhow, Result};
use itertools::Itertools;
use log::warn;

/// Evaluates a sequence of tokens in postfix order.
///
/// A unary minus negates the number that directly follows it. Arithmetic is
/// plain IEEE-754, so dividing by zero yields an infinity and invalid powers
/// yield NaN instead of an error. A sequence that does not reduce to exactly
/// one value is rejected.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::evaluator::evaluate_postfix;
/// use rpn_calculator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::unary_minus(),
///     Token::integer("3"),
///     Token::floating_point("0.5"),
///     Token::operator('*'),
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens)?, -1.5);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix_tokens.len());
    let mut sign = 1.0;

    for token in postfix_tokens {
        match token.kind {
            TokenKind::Integer | TokenKind::FloatingPoint => {
                let value = parse_number(token)?;
                operands.push(value * sign);
                sign = 1.0;
            }
            TokenKind::UnaryOperator => sign = -1.0,
            TokenKind::Operator => {
                let operator = token
                    .as_binary_operator()
                    .ok_or_else(|| malformed(format!("unknown operator '{}'", token)))?;
                let second_operand = pop_operand(&mut operands, token)?;
                let first_operand = pop_operand(&mut operands, token)?;
                operands.push(operator.evaluate(first_operand, second_operand));
            }
            TokenKind::LeftParenthesis | TokenKind::RightParenthesis => {
                return Err(malformed(format!(
                    "unexpected parenthesis '{}' in postfix expression",
                    token
                )));
            }
        }
    }

    operands.into_iter().exactly_one().map_err(|remaining| {
        malformed(format!(
            "expression should reduce to exactly one value, but {} remained",
            remaining.count()
        ))
    })
}

fn parse_number(token: &Token) -> Result<f64> {
    token
        .lexeme
        .parse::<f64>()
        .map_err(|_| malformed(format!("'{}' is not a number", token)))
}

fn pop_operand(operands: &mut Vec<f64>, operator: &Token) -> Result<f64> {
    operands
        .pop()
        .ok_or_else(|| malformed(format!("missing operand for '{}'", operator)))
}

fn malformed(message: String) -> anyhow::Error {
    warn!("Evaluation error: {}", message);
    anyhow!(ExpressionError::Evaluation { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn evaluation_error_of(postfix: &[Token]) -> ExpressionError {
        let error = evaluate_postfix(postfix).expect_err("Should return Err");
        error
            .downcast_ref::<ExpressionError>()
            .cloned()
            .expect("Should be an ExpressionError")
    }

    #[test]
    fn evaluate_simple_postfix() {
        // 5 4 + 3 -
        let postfix = [
            Token::integer("5"),
            Token::integer("4"),
            Token::operator('+'),
            Token::integer("3"),
            Token::operator('-'),
        ];

        assert_eq!(evaluate_postfix(&postfix).unwrap(), 6.0)
    }

    #[test]
    fn first_operand_is_left_hand_side() {
        // 8 2 /
        let postfix = [
            Token::integer("8"),
            Token::integer("2"),
            Token::operator('/'),
        ];

        assert_eq!(evaluate_postfix(&postfix).unwrap(), 4.0)
    }

    #[test]
    fn unary_minus_only_negates_next_number() {
        // -4 2.5 *  2 +
        let postfix = [
            Token::unary_minus(),
            Token::integer("4"),
            Token::floating_point("2.5"),
            Token::operator('*'),
            Token::integer("2"),
            Token::operator('+'),
        ];

        assert_eq!(evaluate_postfix(&postfix).unwrap(), -8.0)
    }

    #[test]
    fn exponents_are_applied_in_sequence_order() {
        // 2 3 ^ 2 ^
        let postfix = [
            Token::integer("2"),
            Token::integer("3"),
            Token::operator('^'),
            Token::integer("2"),
            Token::operator('^'),
        ];

        assert_eq!(evaluate_postfix(&postfix).unwrap(), 64.0)
    }

    #[test]
    fn division_by_zero_follows_ieee_754() {
        let postfix = [
            Token::integer("1"),
            Token::integer("0"),
            Token::operator('/'),
        ];

        assert_eq!(evaluate_postfix(&postfix).unwrap(), f64::INFINITY)
    }

    #[test]
    fn zero_divided_by_zero_is_nan() {
        let postfix = [
            Token::integer("0"),
            Token::integer("0"),
            Token::operator('/'),
        ];

        assert!(evaluate_postfix(&postfix).unwrap().is_nan())
    }

    #[test]
    fn operator_without_operands_should_return_err() {
        let postfix = [Token::integer("1"), Token::operator('+')];

        let error = evaluation_error_of(&postfix);

        assert_eq!(
            error,
            ExpressionError::Evaluation {
                message: "missing operand for '+'".to_string()
            }
        )
    }

    #[parameterized(
        count = { 0, 2, 3 }
    )]
    fn postfix_not_reducing_to_one_value_should_return_err(count: usize) {
        let postfix = vec![Token::integer("1"); count];

        let error = evaluation_error_of(&postfix);

        assert_eq!(
            error,
            ExpressionError::Evaluation {
                message: format!(
                    "expression should reduce to exactly one value, but {} remained",
                    count
                )
            }
        )
    }

    #[test]
    fn parenthesis_in_postfix_should_return_err() {
        let postfix = [Token::left_parenthesis(), Token::integer("1")];

        assert!(evaluation_error_of(&postfix).is_evaluation())
    }

    #[test]
    fn unknown_operator_should_return_err() {
        let postfix = [
            Token::integer("1"),
            Token::integer("2"),
            Token::new("%", TokenKind::Operator),
        ];

        assert!(evaluation_error_of(&postfix).is_evaluation())
    }
}
