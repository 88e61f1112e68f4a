use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{bail, Result};
use log::{debug, trace, warn};
use std::mem;

/// The states of the scanner's finite state machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ScanState {
    Init,
    AfterLeftParenthesis,
    AfterRightParenthesis,
    AfterUnary,
    InDigits,
    AfterPoint,
    InFraction,
    AfterOperator,
    Error,
    End,
}

impl ScanState {
    /// Why a character was rejected while in this state.
    fn rejection_message(&self) -> &'static str {
        match self {
            ScanState::Init => "expression must start with a left parenthesis or a digit",
            ScanState::AfterLeftParenthesis => {
                "after a left parenthesis there can only be a unary minus, a digit or a left parenthesis"
            }
            ScanState::AfterRightParenthesis => {
                "after a right parenthesis there can only be an operator or a right parenthesis"
            }
            ScanState::AfterUnary => "after a unary minus there can only be a digit",
            ScanState::InDigits => {
                "after a digit there can only be a digit, a point, an operator or a right parenthesis"
            }
            ScanState::AfterPoint => "after a point there can only be a digit",
            ScanState::InFraction => {
                "after a fractional digit there can only be a digit, an operator or a right parenthesis"
            }
            ScanState::AfterOperator => {
                "after an operator there can only be a digit or a left parenthesis"
            }
            ScanState::Error | ScanState::End => "no input is accepted after scanning has stopped",
        }
    }

    /// Why the input was not allowed to end while in this state.
    fn end_of_input_message(&self) -> &'static str {
        match self {
            ScanState::Init => "expression is empty",
            ScanState::AfterPoint => self.rejection_message(),
            _ => "expression should end only on a digit or a right parenthesis",
        }
    }
}

fn is_operator(symbol: char) -> bool {
    matches!(symbol, '+' | '-' | '*' | '/' | '^')
}

/// Splits the given expression into tokens.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::lexer::tokenize;
/// use rpn_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("(-2.5)*4")?;
/// assert_eq!(tokens[1], Token::unary_minus());
/// assert_eq!(tokens[2], Token::floating_point("2.5"));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let tokens = Scanner::new(expression.chars()).run()?;
    debug!("Tokens of {:?}: {:?}", expression, tokens);
    Ok(tokens)
}

/// Drives the state machine over a lazily produced stream of characters.
/// A scanner is consumed by [`Scanner::run`] and cannot be restarted.
struct Scanner<I>
where
    I: Iterator<Item = char>,
{
    symbols: I,
    position: usize,
    state: ScanState,
    number: String,
    number_kind: TokenKind,
    tokens: Vec<Token>,
}

impl<I> Scanner<I>
where
    I: Iterator<Item = char>,
{
    fn new(symbols: I) -> Scanner<I> {
        Scanner {
            symbols,
            position: 0,
            state: ScanState::Init,
            number: String::new(),
            number_kind: TokenKind::Integer,
            tokens: vec![],
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while let Some(symbol) = self.symbols.next() {
            let next_state = self.transition(symbol);
            trace!("{:?} --{:?}--> {:?}", self.state, symbol, next_state);

            if next_state == ScanState::Error {
                let message = self.state.rejection_message();
                self.state = next_state;
                return self.fail(message);
            }

            self.state = next_state;
            self.position += 1;
        }
        self.finish()
    }

    fn transition(&mut self, symbol: char) -> ScanState {
        match (self.state, symbol) {
            (
                ScanState::Init | ScanState::AfterLeftParenthesis | ScanState::AfterOperator,
                '(',
            ) => self.emit(symbol, TokenKind::LeftParenthesis, ScanState::AfterLeftParenthesis),
            (
                ScanState::Init
                | ScanState::AfterLeftParenthesis
                | ScanState::AfterUnary
                | ScanState::AfterOperator,
                '0'..='9',
            ) => {
                self.number_kind = TokenKind::Integer;
                self.append(symbol, ScanState::InDigits)
            }
            (ScanState::AfterLeftParenthesis, '-') => {
                self.emit(symbol, TokenKind::UnaryOperator, ScanState::AfterUnary)
            }
            (ScanState::InDigits, '0'..='9') => self.append(symbol, ScanState::InDigits),
            (ScanState::InDigits, '.') => {
                self.number_kind = TokenKind::FloatingPoint;
                self.append(symbol, ScanState::AfterPoint)
            }
            (ScanState::AfterPoint | ScanState::InFraction, '0'..='9') => {
                self.append(symbol, ScanState::InFraction)
            }
            (
                ScanState::InDigits | ScanState::InFraction | ScanState::AfterRightParenthesis,
                ')',
            ) => {
                self.flush_number();
                self.emit(symbol, TokenKind::RightParenthesis, ScanState::AfterRightParenthesis)
            }
            (
                ScanState::InDigits | ScanState::InFraction | ScanState::AfterRightParenthesis,
                symbol,
            ) if is_operator(symbol) => {
                self.flush_number();
                self.emit(symbol, TokenKind::Operator, ScanState::AfterOperator)
            }
            _ => ScanState::Error,
        }
    }

    fn append(&mut self, symbol: char, next_state: ScanState) -> ScanState {
        self.number.push(symbol);
        next_state
    }

    fn emit(&mut self, symbol: char, kind: TokenKind, next_state: ScanState) -> ScanState {
        self.tokens.push(Token::new(symbol, kind));
        next_state
    }

    /// Turns the buffered digits, if any, into a single number token.
    fn flush_number(&mut self) {
        if self.number.is_empty() {
            return;
        }
        let lexeme = mem::take(&mut self.number);
        self.tokens.push(Token::new(lexeme, self.number_kind));
    }

    fn finish(mut self) -> Result<Vec<Token>> {
        match self.state {
            ScanState::InDigits | ScanState::InFraction => self.flush_number(),
            ScanState::AfterRightParenthesis => {}
            state => {
                let message = state.end_of_input_message();
                self.state = ScanState::Error;
                return self.fail(message);
            }
        }
        self.state = ScanState::End;
        Ok(self.tokens)
    }

    fn fail(&self, message: &'static str) -> Result<Vec<Token>> {
        warn!("Tokenization error at position {}: {}", self.position, message);
        bail!(ExpressionError::Lexical {
            message,
            position: self.position,
        })
    }
}
