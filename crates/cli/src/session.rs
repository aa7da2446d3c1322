//! Line handling shared by the REPL, piped input and `--expr`

use anyhow::{Context, Result};
use bigcalc_eval::{Calc, Level, LevelMask, SinkId};
use std::path::Path;

use crate::formatter::{self, ColorMode};

/// What the front end should do with a handled line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print
    Silent,
    /// Evaluation result, for stdout
    Value(String),
    /// Informational text, for stdout
    Notice(String),
    /// Evaluation failure, for stderr
    Failure(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meta {
    Help,
    Quit,
    Verbose,
    Debug,
}

impl Meta {
    fn parse(line: &str) -> Option<Self> {
        match line {
            "help" | "h" | "?" => Some(Meta::Help),
            "quit" | "exit" | "q" => Some(Meta::Quit),
            "verbose" => Some(Meta::Verbose),
            "debug" => Some(Meta::Debug),
            _ => None,
        }
    }
}

pub struct Session {
    calc: Calc,
    trace_sink: SinkId,
    verbose: bool,
    debug: bool,
    /// Color for results and notices (stdout)
    color_out: bool,
    /// Color for failures and traces (stderr)
    color_err: bool,
}

impl Session {
    /// Creates a session whose evaluator traces go to stderr
    pub fn new(verbose: bool, debug: bool, color: ColorMode) -> Self {
        let color_err = color.should_colorize_stderr();
        Self::with_sink(verbose, debug, color, move |level, message| {
            eprintln!("{}", formatter::format_trace(level, message, color_err));
        })
    }

    fn with_sink<F>(verbose: bool, debug: bool, color: ColorMode, sink: F) -> Self
    where
        F: Fn(Level, &str) + Send + Sync + 'static,
    {
        let mut calc = Calc::new();
        let trace_sink = calc.logger_mut().add_sink(LevelMask::NONE, sink);
        let mut session = Session {
            calc,
            trace_sink,
            verbose,
            debug,
            color_out: color.should_colorize(),
            color_err: color.should_colorize_stderr(),
        };
        session.apply_trace_mask();
        session
    }

    /// Appends every evaluator message, whatever the trace toggles, to `path`
    pub fn add_log_file(&mut self, path: &Path) -> Result<()> {
        let sink = bigcalc_eval::file_sink(path)
            .with_context(|| format!("Failed to open log file: {:?}", path))?;
        self.calc.logger_mut().add_sink(LevelMask::ALL, sink);
        tracing::debug!("Logging evaluator messages to {:?}", path);
        Ok(())
    }

    fn apply_trace_mask(&mut self) {
        let mut mask = LevelMask::NONE;
        if self.verbose {
            mask = mask.with(Level::Info);
        }
        if self.debug {
            mask = mask.with(Level::Debug);
        }
        self.calc.logger_mut().set_mask(self.trace_sink, mask);
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        match Meta::parse(line) {
            Some(Meta::Help) => Reply::Notice(formatter::HELP.trim_end().to_string()),
            Some(Meta::Quit) => Reply::Quit,
            Some(Meta::Verbose) => {
                self.verbose = !self.verbose;
                self.apply_trace_mask();
                self.toggled("verbose", self.verbose)
            }
            Some(Meta::Debug) => {
                self.debug = !self.debug;
                self.apply_trace_mask();
                self.toggled("debug", self.debug)
            }
            None if line.is_empty() => Reply::Silent,
            None => match self.calc.evaluate(line) {
                Ok(value) => Reply::Value(formatter::format_result(&value, self.color_out)),
                Err(e) => Reply::Failure(formatter::format_error(
                    &e,
                    &self.calc.stack_dump(),
                    self.color_err,
                )),
            },
        }
    }

    fn toggled(&self, name: &str, on: bool) -> Reply {
        let state = if on { "on" } else { "off" };
        Reply::Notice(formatter::format_notice(
            &format!("{} {}", name, state),
            self.color_out,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn capturing_session(verbose: bool, debug: bool) -> (Session, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let session = Session::with_sink(verbose, debug, ColorMode::Never, move |level, message| {
            sink_lines
                .lock()
                .unwrap()
                .push(formatter::format_trace(level, message, false));
        });
        (session, lines)
    }

    #[test]
    fn test_evaluates_expressions() {
        let mut session = Session::new(false, false, ColorMode::Never);
        assert_eq!(session.handle_line("3 2 * 4 ^"), Reply::Value("1296".to_string()));
        assert_eq!(session.handle_line("  "), Reply::Silent);
        assert_eq!(
            session.handle_line("5 9 -"),
            Reply::Failure(
                "Error: Negative results unsupported '5 - 9'\nStack dump: { (T..B) 9, 5 }"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_meta_commands() {
        let mut session = Session::new(false, false, ColorMode::Never);
        assert_eq!(session.handle_line("quit"), Reply::Quit);
        assert_eq!(session.handle_line("exit"), Reply::Quit);
        assert!(matches!(session.handle_line("help"), Reply::Notice(text) if text.contains("gcf")));
        assert_eq!(session.handle_line("verbose"), Reply::Notice("verbose on".to_string()));
        assert_eq!(session.handle_line("verbose"), Reply::Notice("verbose off".to_string()));
        assert_eq!(session.handle_line("debug"), Reply::Notice("debug on".to_string()));
    }

    #[test]
    fn test_trace_toggles_control_sink() {
        let (mut session, lines) = capturing_session(false, false);
        session.handle_line("1 1 +");
        assert!(lines.lock().unwrap().is_empty());

        session.handle_line("verbose");
        session.handle_line("1 1 +");
        assert_eq!(*lines.lock().unwrap(), vec!["[info] '1 1 +' = 2".to_string()]);

        lines.lock().unwrap().clear();
        session.handle_line("verbose");
        session.handle_line("debug");
        session.handle_line("7");
        assert_eq!(
            *lines.lock().unwrap(),
            vec![
                "[debug] [Calc::evaluate] '7'".to_string(),
                "[debug] [ParseNum] token:'7' stack:{ (T..B)  }".to_string(),
            ]
        );
    }

    #[test]
    fn test_initial_flags_apply() {
        let (mut session, lines) = capturing_session(true, false);
        session.handle_line("2 2 *");
        assert_eq!(*lines.lock().unwrap(), vec!["[info] '2 2 *' = 4".to_string()]);
    }

    #[test]
    fn test_log_file_records_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        let (mut session, lines) = capturing_session(false, false);
        session.add_log_file(&path).unwrap();

        session.handle_line("4 5 +");
        session.handle_line("1 0 /");

        assert!(lines.lock().unwrap().is_empty());
        let log = std::fs::read_to_string(&path).unwrap();
        assert!(log.contains("[debug] [Calc::evaluate] '4 5 +'\n"));
        assert!(log.contains("[info] '4 5 +' = 9\n"));
        assert!(log.contains("[error] Division by zero stack:{ (T..B) 0, 1 }\n"));
    }

    #[test]
    fn test_log_file_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(false, false, ColorMode::Never);
        let err = session
            .add_log_file(&dir.path().join("missing").join("session.log"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
