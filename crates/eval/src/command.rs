//! Token handlers for the evaluator
//!
//! A command looks at a token and either declines it (`Ok(false)`) or
//! applies its effect to the operand stack (`Ok(true)`). Operand counts are
//! checked before anything is removed, and failing operations leave the
//! stack as it was.

use bigcalc_bigint::BigInt;

use crate::error::{EvalError, Result};
use crate::log::{Level, Logger};

/// Evaluator state visible to commands. The top of the stack is the last
/// element of `operands`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub operands: Vec<BigInt>,
    pub answer: Option<BigInt>,
}

pub type ArbitraryFn = fn(&mut State) -> Result<()>;
pub type UnaryFn = fn(&BigInt) -> bigcalc_bigint::Result<BigInt>;
pub type BinaryFn = fn(BigInt, &BigInt) -> bigcalc_bigint::Result<BigInt>;

#[derive(Clone, Debug)]
pub enum Command {
    /// Pushes any all-digit token as a number
    ParseNum,
    /// Runs against the evaluator state without operands
    Arbitrary { token: String, op: ArbitraryFn },
    /// Replaces the top operand with `op(top)`
    Unary { token: String, op: UnaryFn },
    /// Pops `rhs` then `lhs`, pushes `op(lhs, rhs)`
    Binary { token: String, op: BinaryFn },
    /// Folds the whole stack into one value, top of stack as the left operand
    Fold { token: String, op: BinaryFn },
}

impl Command {
    pub fn arbitrary(token: impl Into<String>, op: ArbitraryFn) -> Self {
        Command::Arbitrary {
            token: token.into(),
            op,
        }
    }

    pub fn unary(token: impl Into<String>, op: UnaryFn) -> Self {
        Command::Unary {
            token: token.into(),
            op,
        }
    }

    pub fn binary(token: impl Into<String>, op: BinaryFn) -> Self {
        Command::Binary {
            token: token.into(),
            op,
        }
    }

    pub fn fold(token: impl Into<String>, op: BinaryFn) -> Self {
        Command::Fold {
            token: token.into(),
            op,
        }
    }

    /// The token this command answers to; `None` for number literals
    pub fn token(&self) -> Option<&str> {
        match self {
            Command::ParseNum => None,
            Command::Arbitrary { token, .. }
            | Command::Unary { token, .. }
            | Command::Binary { token, .. }
            | Command::Fold { token, .. } => Some(token),
        }
    }

    pub fn execute(&self, state: &mut State, token: &str, log: &Logger) -> Result<bool> {
        match self {
            Command::ParseNum => {
                if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                    return Ok(false);
                }
                log.log(
                    Level::Debug,
                    &format!("[ParseNum] token:'{}' stack:{{ {} }}", token, stack_dump(&state.operands)),
                );
                state.operands.push(BigInt::parse(token)?);
                Ok(true)
            }
            Command::Arbitrary { token: own, op } => {
                if own.as_str() != token {
                    return Ok(false);
                }
                log.log(Level::Debug, &format!("[Arbitrary] token:'{}'", token));
                op(state)?;
                Ok(true)
            }
            Command::Unary { token: own, op } => {
                if own.as_str() != token {
                    return Ok(false);
                }
                let trace = format!("[Unary] token:'{}' stack:{{ {} }}", token, stack_dump(&state.operands));
                require(state, token, 1)?;
                let top = state.operands.len() - 1;
                let result = op(&state.operands[top])?;
                log.log(Level::Debug, &format!("{} -> {}", trace, result));
                state.operands[top] = result;
                Ok(true)
            }
            Command::Binary { token: own, op } => {
                if own.as_str() != token {
                    return Ok(false);
                }
                let trace = format!("[Binary] token:'{}' stack:{{ {} }}", token, stack_dump(&state.operands));
                require(state, token, 2)?;
                let n = state.operands.len();
                let result = op(state.operands[n - 2].clone(), &state.operands[n - 1])?;
                log.log(Level::Debug, &format!("{} -> {}", trace, result));
                state.operands.truncate(n - 2);
                state.operands.push(result);
                Ok(true)
            }
            Command::Fold { token: own, op } => {
                if own.as_str() != token {
                    return Ok(false);
                }
                let trace = format!("[Fold] token:'{}' stack:{{ {} }}", token, stack_dump(&state.operands));
                require(state, token, 2)?;
                let mut remaining = state.operands.clone();
                let mut acc = remaining.pop().unwrap_or_default();
                while let Some(next) = remaining.pop() {
                    acc = op(acc, &next)?;
                }
                log.log(Level::Debug, &format!("{} -> {}", trace, acc));
                state.operands.clear();
                state.operands.push(acc);
                Ok(true)
            }
        }
    }
}

fn require(state: &State, token: &str, needed: usize) -> Result<()> {
    let found = state.operands.len();
    if found < needed {
        return Err(EvalError::MissingOperands {
            token: token.to_string(),
            needed,
            found,
        });
    }
    Ok(())
}

/// Renders operands top to bottom, e.g. `(T..B) 3, 2, 1`
pub fn stack_dump(operands: &[BigInt]) -> String {
    let values: Vec<String> = operands.iter().rev().map(ToString::to_string).collect();
    format!("(T..B) {}", values.join(", "))
}
