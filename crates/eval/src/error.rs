use bigcalc_bigint::BigIntError;
use thiserror::Error;

pub type Result<T, E = EvalError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error(transparent)]
    Arithmetic(#[from] BigIntError),

    #[error("Token '{0}' went unhandled")]
    Unhandled(String),

    #[error("'{token}' requires {needed} operand(s), found {found}")]
    MissingOperands {
        token: String,
        needed: usize,
        found: usize,
    },

    #[error("No operands remaining on stack after evaluation, expected one")]
    EmptyStack,

    #[error("{0} operands remaining on stack after evaluation, expected one")]
    Imbalanced(usize),

    #[error("No previous result to recall")]
    NoAnswer,
}
