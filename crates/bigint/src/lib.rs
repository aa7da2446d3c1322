//! Arbitrary precision non-negative integers in base ten
//!
//! A [`BigInt`] keeps its value as a vector of decimal digits, least
//! significant first. Arithmetic is done digit by digit:
//!
//! - addition with a single carry pass
//! - subtraction by the method of complements
//! - schoolbook multiplication (acyclic convolution)
//! - division by repeated subtraction
//! - exponentiation by squaring
//!
//! Operations that can fail (subtraction below zero, division by zero,
//! `0 ^ 0`) return a [`Result`] and never leave the receiver half-updated.
//!
//! ```
//! use bigcalc_bigint::BigInt;
//!
//! let mut n: BigInt = "3".parse().unwrap();
//! n *= &BigInt::from(2u32);
//! n.try_pow_assign(&BigInt::from(4u32)).unwrap();
//! assert_eq!(n.to_string(), "1296");
//! ```

mod error;
mod integer;
mod ops;
mod parse;

pub use error::{BigIntError, ReadError, Result};
pub use integer::BigInt;
pub use parse::read_token;
