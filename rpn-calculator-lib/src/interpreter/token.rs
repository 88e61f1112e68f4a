use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// The grammatical category of a lexeme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    FloatingPoint,
    LeftParenthesis,
    RightParenthesis,
    /// A minus sign directly after a left parenthesis.
    UnaryOperator,
    Operator,
}

/// A discrete part of an expression: the exact text that was recognized,
/// together with what kind of text it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind) -> Token {
        Token {
            lexeme: lexeme.into(),
            kind,
        }
    }

    pub fn integer(lexeme: impl Into<String>) -> Token {
        Token::new(lexeme, TokenKind::Integer)
    }

    pub fn floating_point(lexeme: impl Into<String>) -> Token {
        Token::new(lexeme, TokenKind::FloatingPoint)
    }

    pub fn operator(symbol: char) -> Token {
        Token::new(symbol, TokenKind::Operator)
    }

    pub fn unary_minus() -> Token {
        Token::new('-', TokenKind::UnaryOperator)
    }

    pub fn left_parenthesis() -> Token {
        Token::new('(', TokenKind::LeftParenthesis)
    }

    pub fn right_parenthesis() -> Token {
        Token::new(')', TokenKind::RightParenthesis)
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::LeftParenthesis | TokenKind::RightParenthesis
        )
    }

    /// The binary operator this token stands for, if it is an operator token.
    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self.kind {
            TokenKind::Operator => BinaryOperator::from_symbol(&self.lexeme),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_with_same_lexeme_but_different_kind_are_not_equal() {
        assert_ne!(Token::operator('-'), Token::unary_minus())
    }

    #[test]
    fn operator_token_is_converted_to_binary_operator() {
        assert_eq!(
            Token::operator('^').as_binary_operator(),
            Some(BinaryOperator::Exponentiate)
        )
    }

    #[test]
    fn unary_minus_is_not_a_binary_operator() {
        assert_eq!(Token::unary_minus().as_binary_operator(), None)
    }

    #[test]
    fn token_displays_as_its_lexeme() {
        assert_eq!(Token::floating_point("3.14").to_string(), "3.14")
    }
}
