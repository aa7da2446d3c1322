use bigcalc_bigint::BigInt;

use crate::builtins;
use crate::command::{stack_dump, Command, State};
use crate::error::{EvalError, Result};
use crate::log::{Level, Logger};

/// Postfix evaluator owning its command chain, operand stack and log sinks
#[derive(Debug)]
pub struct Calc {
    commands: Vec<Command>,
    state: State,
    logger: Logger,
}

impl Calc {
    /// Creates an evaluator with the standard command set
    pub fn new() -> Self {
        Self::with_commands(builtins::standard_commands())
    }

    /// Creates an evaluator dispatching only to `commands`, in order
    pub fn with_commands(commands: Vec<Command>) -> Self {
        Calc {
            commands,
            state: State::default(),
            logger: Logger::new(),
        }
    }

    /// Appends a command to the end of the chain
    pub fn register(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }

    /// Operands left by the last evaluation, bottom first
    pub fn stack(&self) -> &[BigInt] {
        &self.state.operands
    }

    /// The stack rendered top first, for error reports
    pub fn stack_dump(&self) -> String {
        stack_dump(&self.state.operands)
    }

    /// Result of the last successful evaluation
    pub fn answer(&self) -> Option<&BigInt> {
        self.state.answer.as_ref()
    }

    /// Evaluates one line of whitespace-delimited postfix tokens.
    ///
    /// Fails when a token is handled by no command, when any command fails,
    /// or when the stack does not end up holding exactly one value.
    pub fn evaluate(&mut self, line: &str) -> Result<BigInt> {
        self.logger
            .log(Level::Debug, &format!("[Calc::evaluate] '{}'", line));
        self.state.operands.clear();

        let outcome = self.run(line);
        match &outcome {
            Ok(result) => {
                tracing::debug!(%line, %result, "evaluated");
                self.state.answer = Some(result.clone());
                self.logger
                    .log(Level::Info, &format!("'{}' = {}", line.trim(), result));
            }
            Err(e) => {
                tracing::debug!(%line, error = %e, depth = self.state.operands.len(), "evaluation failed");
                self.logger.log(
                    Level::Error,
                    &format!("{} stack:{{ {} }}", e, self.stack_dump()),
                );
            }
        }
        outcome
    }

    fn run(&mut self, line: &str) -> Result<BigInt> {
        for token in line.split_whitespace() {
            if !self.dispatch(token)? {
                return Err(EvalError::Unhandled(token.to_string()));
            }
        }
        match self.state.operands.as_slice() {
            [] => Err(EvalError::EmptyStack),
            [result] => Ok(result.clone()),
            operands => Err(EvalError::Imbalanced(operands.len())),
        }
    }

    fn dispatch(&mut self, token: &str) -> Result<bool> {
        for command in &self.commands {
            if command.execute(&mut self.state, token, &self.logger)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for Calc {
    fn default() -> Self {
        Self::new()
    }
}
