use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Why an expression could not be evaluated.
///
/// Every stage of the interpreter reports its failures as one of these,
/// wrapped in an [`anyhow::Error`]. Use `downcast_ref::<ExpressionError>()`
/// to find out which stage rejected the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// The scanner found a character it has no transition for,
    /// or the input ended too early.
    Lexical {
        message: &'static str,
        /// Zero-based index of the offending character,
        /// or the length of the input if it ended too early.
        position: usize,
    },
    /// There were no tokens to convert.
    EmptyInput,
    /// A right parenthesis without a matching left one, or the other way around.
    UnbalancedParenthesis { message: &'static str },
    /// The postfix sequence could not be reduced to a single value.
    Evaluation { message: String },
}

impl ExpressionError {
    pub fn is_lexical(&self) -> bool {
        matches!(self, ExpressionError::Lexical { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            ExpressionError::EmptyInput | ExpressionError::UnbalancedParenthesis { .. }
        )
    }

    pub fn is_evaluation(&self) -> bool {
        matches!(self, ExpressionError::Evaluation { .. })
    }
}

impl Display for ExpressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::Lexical { message, position } => {
                write!(f, "Lexical error at position {}: {}", position, message)
            }
            ExpressionError::EmptyInput => write!(f, "Syntax error: input is empty"),
            ExpressionError::UnbalancedParenthesis { message } => {
                write!(f, "Syntax error: {}", message)
            }
            ExpressionError::Evaluation { message } => write!(f, "Evaluation error: {}", message),
        }
    }
}

impl Error for ExpressionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_error_message_contains_position() {
        let error = ExpressionError::Lexical {
            message: "after point can be only digit",
            position: 2,
        };
        assert_eq!(
            error.to_string(),
            "Lexical error at position 2: after point can be only digit"
        )
    }

    #[test]
    fn parenthesis_errors_belong_to_syntax_stage() {
        let error = ExpressionError::UnbalancedParenthesis {
            message: "extra right parenthesis",
        };
        assert!(error.is_syntax());
        assert!(!error.is_lexical());
        assert!(!error.is_evaluation());
    }
}
