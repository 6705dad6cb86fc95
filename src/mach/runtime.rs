use super::saturate::{saturate, MIN};
use super::stack::Stack;
use super::state::ProgramState;
use crate::error;
use crate::lang::{lex, Error, Operator, Token};

type Result<T> = std::result::Result<T, Error>;

/// ## Output of one evaluated line

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PrintLn(String),
    Error(Error),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::PrintLn(s) => write!(f, "{}", s),
            Event::Error(e) => write!(f, "{}", e),
        }
    }
}

/// ## Stack machine
///
/// Owns the operand stack and everything carried from one line to the
/// next. Lines are evaluated one at a time through `&mut self`.

#[derive(Debug, Default)]
pub struct Runtime {
    stack: Stack<f64>,
    state: ProgramState,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn stack(&self) -> &Stack<f64> {
        &self.stack
    }

    pub fn state(&self) -> &ProgramState {
        &self.state
    }

    /// Evaluates a line and renders its output, one event per line with no
    /// trailing line break. An empty string means nothing to print.
    pub fn enter(&mut self, line: &str) -> String {
        self.execute(line)
            .iter()
            .map(|event| event.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn execute(&mut self, line: &str) -> Vec<Event> {
        let tokens = lex(line, &mut self.state.comment);
        let mut events = vec![];
        for token in tokens.iter() {
            match self.step(token, &mut events) {
                Ok(()) => {}
                Err(error) if error.aborts_line() => {
                    log::debug!("rest of line dropped at `{}`: {}", token, error);
                    break;
                }
                Err(error) => events.push(Event::Error(error)),
            }
        }
        events
    }

    fn step(&mut self, token: &Token, events: &mut Vec<Event>) -> Result<()> {
        match token {
            Token::Comment(_) => Ok(()),
            Token::Unknown(ch) => Err(error!(UnrecognisedOperator, ch)),
            Token::Number(n) => self.stack.push(saturate(*n)),
            Token::LegacyOctal(s) => {
                let n = parse_octal(s)?;
                self.stack.push(saturate(n))
            }
            Token::RandomDraw { negate } => self.random(*negate),
            Token::Operator(op) => self.arithmetic(*op),
            Token::Equals => match self.stack.last() {
                Some(n) => {
                    events.push(Event::PrintLn(integer(*n)));
                    Ok(())
                }
                None => Err(error!(StackEmpty)),
            },
            Token::Display => {
                if self.stack.is_empty() {
                    events.push(Event::PrintLn(integer(MIN)));
                }
                for n in self.stack.iter() {
                    events.push(Event::PrintLn(integer(*n)));
                }
                Ok(())
            }
        }
    }

    fn random(&mut self, negate: bool) -> Result<()> {
        let n = self.state.random.current();
        self.stack.push(if negate { -n } else { n })?;
        self.state.random.advance();
        Ok(())
    }

    fn arithmetic(&mut self, op: Operator) -> Result<()> {
        if self.stack.len() < 2 {
            return Err(error!(StackUnderflow));
        }
        let y = self.stack.last().copied().unwrap_or_default();
        match op {
            Operator::Divide | Operator::Modulus if y == 0.0 => return Err(error!(DivideByZero)),
            Operator::Caret if y < 1.0 => return Err(error!(NegativePower)),
            _ => {}
        }
        let (x, y) = self.stack.pop_2()?;
        let result = match op {
            Operator::Plus => x + y,
            Operator::Minus => x - y,
            Operator::Multiply => x * y,
            Operator::Divide => x / y,
            Operator::Modulus => floored_rem(x, y),
            Operator::Caret => x.powf(y),
        };
        // NaN and overflowed powers abandon the line; finite results clamp.
        if !result.is_finite() {
            return Err(error!(ArithmeticFault, format!("{} {} {}", x, op, y)));
        }
        self.stack.push(saturate(result))
    }
}

/// Truncates toward zero for display.
fn integer(n: f64) -> String {
    (n.trunc() as i64).to_string()
}

/// Remainder with the sign of the divisor.
fn floored_rem(x: f64, y: f64) -> f64 {
    let r = x % y;
    if r != 0.0 && (r < 0.0) != (y < 0.0) {
        r + y
    } else {
        r
    }
}

/// Leading-zero literal, optionally negative. Any `8` or `9` makes the
/// whole literal invalid.
fn parse_octal(text: &str) -> Result<f64> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => (-1.0, digits),
        None => (1.0, text),
    };
    let magnitude = digits.chars().try_fold(0.0, |acc: f64, ch| match ch.to_digit(8) {
        Some(d) => Ok(acc * 8.0 + d as f64),
        None => Err(error!(InvalidOctal, text)),
    })?;
    Ok(sign * magnitude)
}
