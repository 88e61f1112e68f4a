use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// Priority given to anything on the operator stack that is not a binary operator,
/// i.e. a left parenthesis. It is lower than every operator's precedence.
pub(crate) const NO_PRIORITY: i8 = -1;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
        match symbol {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Subtract),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            "^" => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub(crate) fn precedence(&self) -> i8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    /// Applies the operator with `a` as the left-hand side.
    /// Division by zero and invalid powers follow IEEE-754 (infinity or NaN).
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => a / b,
            BinaryOperator::Exponentiate => f64::powf(a, b),
        }
    }
}

/// The priority a token has when resolving operators on the operator stack.
pub(crate) fn priority(token: &Token) -> i8 {
    token
        .as_binary_operator()
        .map_or(NO_PRIORITY, |operator| operator.precedence())
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert_eq!(equal1.precedence(), equal2.precedence())
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = BinaryOperator::Exponentiate;
        let lesser = BinaryOperator::Multiply;
        assert!(greater.precedence() > lesser.precedence())
    }

    #[test]
    fn left_parenthesis_has_lower_priority_than_every_operator() {
        let parenthesis = priority(&Token::left_parenthesis());
        assert!(parenthesis < priority(&Token::operator('+')))
    }

    #[parameterized(
        symbol = { "+", "-", "*", "/", "^" },
        expected = { 7.0, 3.0, 10.0, 2.5, 25.0 }
    )]
    fn operator_evaluates_with_first_operand_on_left_hand_side(symbol: &str, expected: f64) {
        let operator = BinaryOperator::from_symbol(symbol).unwrap();
        assert_eq!(operator.evaluate(5.0, 2.0), expected)
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(BinaryOperator::Divide.evaluate(1.0, 0.0), f64::INFINITY)
    }

    #[test]
    fn operator_displays_as_its_symbol() {
        let operator = BinaryOperator::Divide;
        assert_eq!(BinaryOperator::from_symbol(&operator.to_string()), Some(operator))
    }

    #[test]
    fn unknown_symbol_is_not_an_operator() {
        assert_eq!(BinaryOperator::from_symbol("%"), None)
    }
}
