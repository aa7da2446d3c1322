//! BigInt storage, construction, conversion and ordering

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

use crate::error::{BigIntError, Result};

/// One decimal digit. Only exceeds 9 inside a single operator call.
pub(crate) type Digit = u8;

/// Arbitrary precision non-negative integer
///
/// Digits are stored least significant first and kept in canonical form:
/// no most significant zeros, except for zero itself which is `[0]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) digits: Vec<Digit>,
}

impl BigInt {
    /// Creates a BigInt with value 0
    pub fn zero() -> Self {
        BigInt { digits: vec![0] }
    }

    /// Creates a BigInt with value 1
    pub fn one() -> Self {
        BigInt { digits: vec![1] }
    }

    /// Returns the decimal digits, least significant first
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the number of decimal digits
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true for the empty (falsy) digit sequence.
    ///
    /// No constructor or operator produces one, so well-formed values are
    /// never empty.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }

    /// Checks the least significant digit
    pub fn is_odd(&self) -> bool {
        self.digits.first().map_or(false, |d| d % 2 == 1)
    }

    /// Converts to f64 through the u64 conversion.
    ///
    /// Values above `u64::MAX` fail with [`BigIntError::Overflow`] instead of
    /// losing precision, so this is not a general purpose float conversion.
    pub fn to_f64(&self) -> Result<f64> {
        u64::try_from(self).map(|n| n as f64)
    }

    /// Removes most significant zero digits, keeping at least one digit
    pub(crate) fn trim(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    /// Zero-extends the digits to `n` positions
    pub(crate) fn pad(&mut self, n: usize) {
        if n > self.digits.len() {
            self.digits.resize(n, 0);
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.pad(&rendered)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both sides are canonical, so more digits means a larger value
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(mut n: $t) -> Self {
                    let mut digits = Vec::new();
                    loop {
                        digits.push((n % 10) as Digit);
                        n /= 10;
                        if n == 0 {
                            break;
                        }
                    }
                    BigInt { digits }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_try_into_unsigned {
    ($($t:ty),*) => {
        $(
            impl TryFrom<&BigInt> for $t {
                type Error = BigIntError;

                fn try_from(val: &BigInt) -> Result<Self> {
                    let rendered = val.to_string();
                    rendered.parse::<$t>().map_err(|_| BigIntError::Overflow {
                        value: rendered,
                        target: stringify!($t),
                    })
                }
            }

            impl TryFrom<BigInt> for $t {
                type Error = BigIntError;

                fn try_from(val: BigInt) -> Result<Self> {
                    <$t>::try_from(&val)
                }
            }
        )*
    };
}

impl_try_into_unsigned!(u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsigned() {
        assert_eq!(BigInt::from(0u64).digits(), &[0]);
        assert_eq!(BigInt::from(12345u32).digits(), &[5, 4, 3, 2, 1]);
        assert_eq!(BigInt::from(10u8).digits(), &[0, 1]);
        assert_eq!(
            BigInt::from(u64::MAX).to_string(),
            u64::MAX.to_string()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(BigInt::zero().to_string(), "0");
        assert_eq!(BigInt::from(907u32).to_string(), "907");
        assert_eq!(format!("{:>5}", BigInt::from(42u32)), "   42");
    }

    #[test]
    fn test_ordering() {
        let small = BigInt::from(99u32);
        let large = BigInt::from(100u32);
        assert!(small < large);
        assert!(large > small);
        assert!(small <= small.clone());
        assert!(large >= small);

        let a = BigInt::from(1234u32);
        let b = BigInt::from(1243u32);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_predicates() {
        assert!(BigInt::zero().is_zero());
        assert!(BigInt::one().is_one());
        assert!(BigInt::from(7u32).is_odd());
        assert!(!BigInt::from(10u32).is_odd());
        assert!(!BigInt::default().is_empty());
        assert!(BigInt { digits: vec![] }.is_empty());
    }

    #[test]
    fn test_trim_is_idempotent() {
        let mut n = BigInt {
            digits: vec![4, 2, 0, 0],
        };
        n.trim();
        assert_eq!(n.digits(), &[4, 2]);
        n.trim();
        assert_eq!(n.digits(), &[4, 2]);

        let mut zero = BigInt {
            digits: vec![0, 0, 0],
        };
        zero.trim();
        assert_eq!(zero, BigInt::zero());
    }

    #[test]
    fn test_narrowing_conversions() {
        let n = BigInt::from(4_000_000_000u64);
        assert_eq!(u64::try_from(&n), Ok(4_000_000_000));
        assert_eq!(
            u32::try_from(&n),
            Err(BigIntError::Overflow {
                value: "4000000000".to_string(),
                target: "u32",
            })
        );
        assert_eq!(n.to_f64(), Ok(4e9));

        let huge: BigInt = "18446744073709551616".parse().unwrap();
        assert!(u64::try_from(huge.clone()).is_err());
        assert!(huge.to_f64().is_err());
    }
}
