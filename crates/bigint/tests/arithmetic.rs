use bigcalc_bigint::{BigInt, BigIntError};
use num_bigint::BigUint;
use pretty_assertions::assert_eq;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

fn reference(s: &str) -> BigUint {
    s.parse().unwrap()
}

const FIFTY_A: &str = "73167176531330624919225119674426574742355349194934";
const FIFTY_B: &str = "96983520312774506326239578318016984801869478851843";

#[test]
fn test_small_operands_match_native() {
    for a in 0u64..60 {
        for b in 0u64..60 {
            let (x, y) = (BigInt::from(a), BigInt::from(b));
            assert_eq!(&x + &y, BigInt::from(a + b), "{} + {}", a, b);
            assert_eq!(&x * &y, BigInt::from(a * b), "{} * {}", a, b);
            if a >= b {
                assert_eq!(x.checked_sub(&y), Ok(BigInt::from(a - b)), "{} - {}", a, b);
            } else {
                assert!(
                    matches!(x.checked_sub(&y), Err(BigIntError::NegativeResult { .. })),
                    "{} - {}",
                    a,
                    b
                );
            }
            if b != 0 {
                assert_eq!(x.checked_div(&y), Ok(BigInt::from(a / b)), "{} / {}", a, b);
                assert_eq!(x.checked_rem(&y), Ok(BigInt::from(a % b)), "{} % {}", a, b);
            }
            assert_eq!(x < y, a < b);
            assert_eq!(x == y, a == b);
        }
    }
}

#[test]
fn test_pow_matches_native() {
    for base in 0u64..12 {
        for exp in 0u32..15 {
            let result = BigInt::from(base).checked_pow(&BigInt::from(exp));
            if base == 0 && exp == 0 {
                assert!(matches!(result, Err(BigIntError::UndefinedPower { .. })));
            } else {
                assert_eq!(result, Ok(BigInt::from(base.pow(exp))), "{} ^ {}", base, exp);
            }
        }
    }
}

#[test]
fn test_fifty_digit_addition() {
    let expected = reference(FIFTY_A) + reference(FIFTY_B);
    assert_eq!((big(FIFTY_A) + big(FIFTY_B)).to_string(), expected.to_string());
}

#[test]
fn test_fifty_digit_subtraction() {
    let expected = reference(FIFTY_B) - reference(FIFTY_A);
    assert_eq!(
        big(FIFTY_B).checked_sub(&big(FIFTY_A)).unwrap().to_string(),
        expected.to_string()
    );
    assert!(big(FIFTY_A).checked_sub(&big(FIFTY_B)).is_err());
}

#[test]
fn test_fifty_digit_multiplication() {
    let expected = reference(FIFTY_A) * reference(FIFTY_B);
    assert_eq!((big(FIFTY_A) * big(FIFTY_B)).to_string(), expected.to_string());
}

#[test]
fn test_fifty_digit_pow() {
    let expected = reference(FIFTY_A).pow(7);
    assert_eq!(
        big(FIFTY_A).checked_pow(&BigInt::from(7u32)).unwrap().to_string(),
        expected.to_string()
    );
}

#[test]
fn test_division_identity_with_small_quotients() {
    // Division is repeated subtraction, so keep quotients small
    let divisor = big(FIFTY_A);
    let dividend = &(&divisor * &BigInt::from(37u32)) + &big("123456789");
    let quotient = dividend.checked_div(&divisor).unwrap();
    let remainder = dividend.checked_rem(&divisor).unwrap();
    assert_eq!(quotient, BigInt::from(37u32));
    assert_eq!(remainder, big("123456789"));
    assert_eq!(quotient * &divisor + &remainder, dividend);
}

#[test]
fn test_round_trip_canonical_strings() {
    let cases = [
        ("00042", "42"),
        ("0", "0"),
        ("000", "0"),
        ("10", "10"),
        (FIFTY_A, FIFTY_A),
    ];
    for (input, canonical) in cases {
        assert_eq!(big(input).to_string(), canonical);
    }
}

#[test]
fn test_scenarios() {
    let mut n = big("3") * big("2");
    n.try_pow_assign(&big("4")).unwrap();
    assert_eq!(n.to_string(), "1296");

    assert_eq!(big("1000").checked_sub(&big("1")).unwrap().to_string(), "999");
    assert_eq!((big("999") + big("1")).to_string(), "1000");
    assert_eq!(big("7").checked_div(&big("2")).unwrap().to_string(), "3");
    assert_eq!(big("7").checked_rem(&big("2")).unwrap().to_string(), "1");
    assert!(matches!(
        big("5").checked_sub(&big("9")),
        Err(BigIntError::NegativeResult { .. })
    ));
    assert!(matches!(
        "12a".parse::<BigInt>(),
        Err(BigIntError::InvalidDigits(_))
    ));
}
