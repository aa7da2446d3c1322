use bigcalc_eval::{BigInt, EvalError, Level};
use colored::*;

/// Color mode options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => Self::Always,
            "never" => Self::Never,
            "auto" => Self::Auto,
            _ => Self::Auto,
        }
    }

    /// Whether output written to stdout should carry color
    pub fn should_colorize(&self) -> bool {
        self.colorize_stream(atty::Stream::Stdout, supports_color::Stream::Stdout)
    }

    /// Whether errors and traces written to stderr should carry color
    pub fn should_colorize_stderr(&self) -> bool {
        self.colorize_stream(atty::Stream::Stderr, supports_color::Stream::Stderr)
    }

    fn colorize_stream(&self, tty: atty::Stream, stream: supports_color::Stream) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Only a terminal that supports colors gets them
            Self::Auto => atty::is(tty) && supports_color::on(stream).is_some(),
        }
    }
}

pub const HELP: &str = "\
Postfix calculator for arbitrary precision non-negative integers.
Operands come first, then the operator: '3 2 * 4 ^' is (3 * 2) ^ 4.

Binary operators (pop rhs, then lhs):
  +  -  *  /  %  ^  min  max  lcm  gcf
Unary operators:
  !             factorial
Folds (reduce the whole stack, top of stack on the left):
  +. -. *. /. %. ^. min. max. lcm. gcf.
Other:
  ans           push the previous result

Session commands:
  help          show this message
  verbose       toggle printing of evaluated expressions
  debug         toggle printing of per-token traces
  quit          leave the calculator
";

/// Format an evaluation result
pub fn format_result(value: &BigInt, colorize: bool) -> String {
    if colorize {
        value.to_string().bright_green().bold().to_string()
    } else {
        value.to_string()
    }
}

/// Format an evaluation error with the operands that were left over
pub fn format_error(error: &EvalError, stack_dump: &str, colorize: bool) -> String {
    if colorize {
        format!(
            "{} {}\n{} {{ {} }}",
            "Error:".red().bold(),
            error,
            "Stack dump:".dimmed(),
            stack_dump
        )
    } else {
        format!("Error: {}\nStack dump: {{ {} }}", error, stack_dump)
    }
}

/// Format an evaluator log message
pub fn format_trace(level: Level, message: &str, colorize: bool) -> String {
    let tag = level.as_str();
    if colorize {
        let tag = match level {
            Level::Info => tag.bright_blue(),
            Level::Debug => tag.bright_black(),
            Level::Warning => tag.yellow(),
            Level::Error => tag.red(),
        };
        format!("[{}] {}", tag, message.dimmed())
    } else {
        format!("[{}] {}", tag, message)
    }
}

/// Format a session notice such as a toggled setting
pub fn format_notice(message: &str, colorize: bool) -> String {
    if colorize {
        message.italic().to_string()
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigcalc_eval::BigIntError;

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!(ColorMode::from_str("ALWAYS"), ColorMode::Always);
        assert_eq!(ColorMode::from_str("never"), ColorMode::Never);
        assert_eq!(ColorMode::from_str("bogus"), ColorMode::Auto);
        assert!(ColorMode::Always.should_colorize());
        assert!(!ColorMode::Never.should_colorize());
    }

    #[test]
    fn test_color_mode_stderr() {
        assert!(ColorMode::Always.should_colorize_stderr());
        assert!(!ColorMode::Never.should_colorize_stderr());
    }

    #[test]
    fn test_plain_formatting() {
        assert_eq!(format_result(&BigInt::from(1296u32), false), "1296");
        assert_eq!(
            format_error(
                &EvalError::Arithmetic(BigIntError::DivisionByZero),
                "(T..B) 0, 1",
                false
            ),
            "Error: Division by zero\nStack dump: { (T..B) 0, 1 }"
        );
        assert_eq!(format_trace(Level::Debug, "x", false), "[debug] x");
        assert_eq!(format_trace(Level::Warning, "y", false), "[warning] y");
        assert_eq!(format_notice("verbose on", false), "verbose on");
    }
}
