//! Arithmetic operations for BigInt
//!
//! The private `*_raw` helpers work on un-normalized digits. Each public
//! operator calls them and trims once at the very end, so subtraction can
//! reuse addition without resizing in between.

use std::ops::{Add, AddAssign, Mul, MulAssign};

use crate::error::{BigIntError, Result};
use crate::integer::{BigInt, Digit};

impl BigInt {
    /// Replaces every digit with its nines' complement
    fn to_nines_complement(digits: &mut [Digit]) {
        for d in digits.iter_mut() {
            *d = 9 - *d;
        }
    }

    /// Resolves digits above 9 into carries, least significant first.
    /// A carry out of the last position is dropped; callers size the buffer.
    fn carry(digits: &mut [Digit]) {
        let mut carry = 0;
        for d in digits.iter_mut() {
            let sum = *d + carry;
            *d = sum % 10;
            carry = sum / 10;
        }
    }

    fn add_raw(&mut self, other: &BigInt) {
        // One extra position for the final carry
        self.pad(self.len().max(other.len()) + 1);
        for (lhs, rhs) in self.digits.iter_mut().zip(&other.digits) {
            *lhs += rhs;
        }
        Self::carry(&mut self.digits);
    }

    fn sub_raw(&mut self, other: &BigInt) -> Result<()> {
        if *other > *self {
            return Err(BigIntError::NegativeResult {
                lhs: self.to_string(),
                rhs: other.to_string(),
            });
        }
        Self::to_nines_complement(&mut self.digits);
        self.add_raw(other);
        Self::to_nines_complement(&mut self.digits);
        // The complement/add cycle leaves a 9 in the padded position
        self.digits.pop();
        Ok(())
    }

    fn mul_raw(&mut self, other: &BigInt) {
        if self.is_zero() || other.is_zero() {
            self.digits = vec![0];
            return;
        }
        if other.is_one() {
            return;
        }
        if self.is_one() {
            self.digits = other.digits.clone();
            return;
        }
        // Acyclic convolution: multiplicand is self, multiplier is other
        let mut product: Vec<Digit> = vec![0; 2 * self.len().max(other.len())];
        for (m, &multiplier) in other.digits.iter().enumerate() {
            for (slot, &digit) in product[m..].iter_mut().zip(&self.digits) {
                *slot += digit * multiplier;
            }
            Self::carry(&mut product);
        }
        self.digits = product;
    }

    /// Adds one in place
    pub fn increment(&mut self) {
        *self += &BigInt::one();
    }

    /// Subtracts one in place, failing on zero
    pub fn decrement(&mut self) -> Result<()> {
        self.try_sub_assign(&BigInt::one())
    }

    /// In-place subtraction using the method of complements.
    ///
    /// Fails with [`BigIntError::NegativeResult`] when `other > self`; the
    /// receiver is untouched in that case.
    pub fn try_sub_assign(&mut self, other: &BigInt) -> Result<()> {
        self.sub_raw(other)?;
        self.trim();
        Ok(())
    }

    /// In-place integer division by repeated subtraction.
    ///
    /// Runs in time linear in the quotient, not in its number of digits.
    pub fn try_div_assign(&mut self, other: &BigInt) -> Result<()> {
        let (quotient, _) = self.div_rem(other)?;
        *self = quotient;
        Ok(())
    }

    /// In-place remainder, computed as `self - (self / other) * other`
    pub fn try_rem_assign(&mut self, other: &BigInt) -> Result<()> {
        let multiple = self.checked_div(other)? * other;
        self.try_sub_assign(&multiple)
    }

    /// In-place exponentiation by squaring.
    ///
    /// The exponent is decimal, so an odd exponent is decremented before it
    /// is halved with a full division.
    pub fn try_pow_assign(&mut self, exponent: &BigInt) -> Result<()> {
        match (self.is_zero(), exponent.is_zero()) {
            (true, true) => {
                return Err(BigIntError::UndefinedPower {
                    base: self.to_string(),
                    exponent: exponent.to_string(),
                })
            }
            (true, false) => return Ok(()),
            (false, true) => {
                *self = BigInt::one();
                return Ok(());
            }
            (false, false) => {}
        }

        let two = BigInt::from(2u8);
        let mut base = self.clone();
        let mut n = exponent.clone();
        let mut result = BigInt::one();
        while !n.is_zero() {
            if n.is_odd() {
                result *= &base;
                n.decrement()?;
            }
            base = &base * &base;
            n.try_div_assign(&two)?;
        }
        *self = result;
        Ok(())
    }

    /// Quotient and remainder from a single repeated-subtraction pass
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }
        let mut remainder = self.clone();
        let mut quotient = BigInt::zero();
        while remainder >= *divisor {
            remainder.try_sub_assign(divisor)?;
            quotient.increment();
        }
        Ok((quotient, remainder))
    }

    pub fn checked_sub(&self, other: &BigInt) -> Result<BigInt> {
        let mut result = self.clone();
        result.try_sub_assign(other)?;
        Ok(result)
    }

    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt> {
        let mut result = self.clone();
        result.try_div_assign(other)?;
        Ok(result)
    }

    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt> {
        let mut result = self.clone();
        result.try_rem_assign(other)?;
        Ok(result)
    }

    pub fn checked_pow(&self, exponent: &BigInt) -> Result<BigInt> {
        let mut result = self.clone();
        result.try_pow_assign(exponent)?;
        Ok(result)
    }
}

// Addition
impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        self.add_raw(rhs);
        self.trim();
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self += &rhs;
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;
    fn add(mut self, rhs: &BigInt) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add for BigInt {
    type Output = BigInt;
    fn add(self, rhs: BigInt) -> Self::Output {
        self + &rhs
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> Self::Output {
        self.clone() + rhs
    }
}

// Multiplication
impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.mul_raw(rhs);
        self.trim();
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self *= &rhs;
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;
    fn mul(mut self, rhs: &BigInt) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: BigInt) -> Self::Output {
        self * &rhs
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> Self::Output {
        self.clone() * rhs
    }
}
