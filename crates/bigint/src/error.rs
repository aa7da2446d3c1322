use thiserror::Error;

pub type Result<T, E = BigIntError> = std::result::Result<T, E>;

/// Failures of big integer construction, arithmetic and conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    #[error("Attempted conversion from non-numeric token '{0}'")]
    InvalidDigits(String),

    #[error("Negative results unsupported '{lhs} - {rhs}'")]
    NegativeResult { lhs: String, rhs: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result of '{base} ^ {exponent}' undefined")]
    UndefinedPower { base: String, exponent: String },

    #[error("Value {value} out of range for {target}")]
    Overflow { value: String, target: &'static str },
}

/// Failures of reading a big integer token from a stream
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] BigIntError),
}
