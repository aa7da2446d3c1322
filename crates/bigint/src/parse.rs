//! Parsing support for BigInt
//!
//! Accepts plain ASCII decimal digits only: no sign, no radix prefix and no
//! surrounding whitespace.

use std::io::{self, BufRead};
use std::str::FromStr;

use crate::error::{BigIntError, ReadError, Result};
use crate::integer::BigInt;

impl BigInt {
    /// Parses a string of decimal digits, stripping leading zeros
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigIntError::InvalidDigits(s.to_string()));
        }
        let significant = match s.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };
        let digits = significant.bytes().rev().map(|b| b - b'0').collect();
        Ok(BigInt { digits })
    }

    /// Reads the next whitespace-delimited token and parses it.
    ///
    /// Returns `Ok(None)` once the reader is exhausted.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Option<Self>, ReadError> {
        match read_token(reader)? {
            Some(token) => Ok(Some(BigInt::parse(&token)?)),
            None => Ok(None),
        }
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::parse(s)
    }
}

/// Reads one whitespace-delimited token, skipping leading whitespace.
///
/// The delimiter following the token is consumed. Returns `None` at end of
/// input.
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let (consumed, complete) = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut complete = false;
            for &b in buf {
                consumed += 1;
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(b);
                }
            }
            (consumed, complete)
        };
        reader.consume(consumed);
        if complete {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
