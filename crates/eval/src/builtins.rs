//! Standard operations and the default command set

use bigcalc_bigint::{BigInt, Result};

use crate::command::{Command, State};
use crate::error::EvalError;

pub fn add(lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    Ok(lhs + rhs)
}

pub fn subtract(mut lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    lhs.try_sub_assign(rhs)?;
    Ok(lhs)
}

pub fn multiply(lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    Ok(lhs * rhs)
}

pub fn divide(mut lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    lhs.try_div_assign(rhs)?;
    Ok(lhs)
}

pub fn modulus(mut lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    lhs.try_rem_assign(rhs)?;
    Ok(lhs)
}

pub fn exponentiate(mut lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    lhs.try_pow_assign(rhs)?;
    Ok(lhs)
}

pub fn min(lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    Ok(if lhs <= *rhs { lhs } else { rhs.clone() })
}

pub fn max(lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    Ok(if lhs >= *rhs { lhs } else { rhs.clone() })
}

/// Greatest common factor by Euclid's algorithm; `gcf(a, 0) == a`
pub fn gcf(lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    let mut a = lhs;
    let mut b = rhs.clone();
    while !b.is_zero() {
        let r = a.checked_rem(&b)?;
        a = b;
        b = r;
    }
    Ok(a)
}

/// Least common multiple; zero when either operand is zero
pub fn lcm(lhs: BigInt, rhs: &BigInt) -> Result<BigInt> {
    if lhs.is_zero() || rhs.is_zero() {
        return Ok(BigInt::zero());
    }
    let factor = gcf(lhs.clone(), rhs)?;
    Ok(lhs.checked_div(&factor)? * rhs)
}

/// `n!`, with `0! == 1`
pub fn factorial(n: &BigInt) -> Result<BigInt> {
    let one = BigInt::one();
    let mut result = BigInt::one();
    let mut i = n.clone();
    while i > one {
        result *= &i;
        i.decrement()?;
    }
    Ok(result)
}

/// Pushes the result of the last successful evaluation
pub fn answer(state: &mut State) -> crate::Result<()> {
    let previous = state.answer.clone().ok_or(EvalError::NoAnswer)?;
    state.operands.push(previous);
    Ok(())
}

/// Binary operators, also registered as folds with a trailing `.`
const BINARY: [(&str, crate::BinaryFn); 10] = [
    ("+", add),
    ("-", subtract),
    ("*", multiply),
    ("/", divide),
    ("%", modulus),
    ("^", exponentiate),
    ("min", min),
    ("max", max),
    ("lcm", lcm),
    ("gcf", gcf),
];

/// The default command chain, in dispatch order
pub fn standard_commands() -> Vec<Command> {
    let mut commands = vec![Command::ParseNum, Command::arbitrary("ans", answer)];
    commands.extend(BINARY.iter().map(|&(token, op)| Command::binary(token, op)));
    commands.push(Command::unary("!", factorial));
    commands.extend(
        BINARY
            .iter()
            .map(|&(token, op)| Command::fold(format!("{}.", token), op)),
    );
    commands
}
