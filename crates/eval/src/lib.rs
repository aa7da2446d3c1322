//! Postfix expression evaluator
//!
//! Tokens are whitespace delimited and evaluated left to right against an
//! ordered list of [`Command`]s. Each command either declines a token or
//! applies its effect to the operand stack. There is no operator precedence:
//! `"3 2 * 4 ^"` is `(3 * 2) ^ 4`.
//!
//! ```
//! use bigcalc_eval::Calc;
//!
//! let mut calc = Calc::new();
//! assert_eq!(calc.evaluate("3 2 * 4 ^").unwrap().to_string(), "1296");
//! assert_eq!(calc.evaluate("ans 4 +").unwrap().to_string(), "1300");
//! ```

pub mod builtins;
mod calc;
mod command;
mod error;
pub mod log;

pub use calc::Calc;
pub use command::{stack_dump, ArbitraryFn, BinaryFn, Command, State, UnaryFn};
pub use error::{EvalError, Result};
pub use log::{file_sink, forward_to_tracing, Level, LevelMask, Logger, SinkId};

pub use bigcalc_bigint::{BigInt, BigIntError};
