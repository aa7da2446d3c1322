mod config;
mod formatter;
mod session;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use config::Config;
use formatter::ColorMode;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use session::{Reply, Session};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bigcalc")]
#[command(about = "Postfix calculator for arbitrary precision non-negative integers", long_about = None)]
#[command(version)]
struct Cli {
    /// Print each evaluated expression with its result
    #[arg(short, long)]
    verbose: bool,

    /// Print per-token evaluation traces
    #[arg(short, long)]
    debug: bool,

    /// Evaluate an expression and exit (may be repeated)
    #[arg(short = 'e', long = "expr", value_name = "EXPR")]
    expressions: Vec<String>,

    /// Color output: auto, always, or never (overrides the config file)
    #[arg(long, env = "BIGCALC_COLOR")]
    color: Option<String>,

    /// Configuration file (defaults to config.toml in the platform config directory)
    #[arg(long, env = "BIGCALC_CONFIG")]
    config: Option<PathBuf>,

    /// Append every evaluator message to this file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// `tracing` filter used when `RUST_LOG` is unset
fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    let debug = cli.debug || config.debug;

    // Initialize tracing (logs to stderr, keeping stdout clean for results)
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(debug))),
        )
        .init();

    let color = ColorMode::from_str(cli.color.as_deref().unwrap_or(&config.color));
    let mut session = Session::new(cli.verbose || config.verbose, debug, color);
    if let Some(path) = cli.log_file.as_ref().or(config.log_file.as_ref()) {
        session.add_log_file(path)?;
    }

    if !cli.expressions.is_empty() {
        return run_expressions(&mut session, &cli.expressions);
    }

    if atty::is(atty::Stream::Stdin) {
        run_repl(&mut session, &config)
    } else {
        run_piped(&mut session)
    }
}

/// Print a reply; returns false when the session should end
fn print_reply(reply: Reply) -> bool {
    match reply {
        Reply::Silent => {}
        Reply::Value(text) | Reply::Notice(text) => println!("{}", text),
        Reply::Failure(text) => eprintln!("{}", text),
        Reply::Quit => return false,
    }
    true
}

fn run_expressions(session: &mut Session, expressions: &[String]) -> Result<()> {
    let mut failures = 0;
    for expression in expressions {
        let reply = session.handle_line(expression);
        if matches!(reply, Reply::Failure(_)) {
            failures += 1;
        }
        if !print_reply(reply) {
            break;
        }
    }
    if failures > 0 {
        return Err(anyhow!("{} of {} expression(s) failed", failures, expressions.len()));
    }
    Ok(())
}

fn run_piped(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read standard input")?;
        if !print_reply(session.handle_line(&line)) {
            break;
        }
    }
    Ok(())
}

fn run_repl(session: &mut Session, config: &Config) -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to initialize line editor")?;
    editor
        .set_max_history_size(config.history_size)
        .context("Invalid history size")?;

    let history = config
        .history_file
        .clone()
        .or_else(config::default_history_path);
    if let Some(path) = &history {
        if editor.load_history(path).is_err() {
            debug!("No history loaded from {:?}", path);
        }
    }

    println!(
        "bigcalc {} - type 'help' for commands, 'quit' to leave",
        env!("CARGO_PKG_VERSION")
    );

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = editor.add_history_entry(line.as_str()) {
                        debug!("Failed to add history entry: {}", e);
                    }
                }
                if !print_reply(session.handle_line(&line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        }
    }

    if let Some(path) = history {
        config::ensure_parent_dir(&path)?;
        if let Err(e) = editor.save_history(&path) {
            warn!("Failed to save history to {:?}: {}", path, e);
        }
    }
    Ok(())
}
