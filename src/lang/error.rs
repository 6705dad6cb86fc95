use thiserror::Error as ThisError;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    operand: Option<String>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $operand:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).with_operand($operand)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            operand: None,
        }
    }

    pub fn with_operand<T: ToString>(&self, operand: T) -> Error {
        debug_assert!(self.operand.is_none());
        Error {
            code: self.code,
            operand: Some(operand.to_string()),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn operand(&self) -> Option<&str> {
        self.operand.as_deref()
    }

    /// True for the conditions that abandon the rest of the current line
    /// instead of being reported.
    pub fn aborts_line(&self) -> bool {
        matches!(self.code, ErrorCode::InvalidOctal | ErrorCode::ArithmeticFault)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum ErrorCode {
    #[error("Stack overflow.")]
    StackOverflow,
    #[error("Stack underflow.")]
    StackUnderflow,
    #[error("Stack empty.")]
    StackEmpty,
    #[error("Divide by 0.")]
    DivideByZero,
    #[error("Negative power.")]
    NegativePower,
    #[error("Unrecognised operator or operand")]
    UnrecognisedOperator,
    #[error("Invalid octal literal")]
    InvalidOctal,
    #[error("Arithmetic fault")]
    ArithmeticFault,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.code, &self.operand) {
            (ErrorCode::UnrecognisedOperator, Some(operand)) => {
                write!(f, "{} \"{}\".", self.code, operand)
            }
            (_, Some(operand)) => write!(f, "{} {}", self.code, operand),
            (_, None) => write!(f, "{}", self.code),
        }
    }
}

impl std::error::Error for Error {}
