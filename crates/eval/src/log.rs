//! Message sinks owned by the evaluator
//!
//! A message goes to each registered sink whose mask accepts its level, in
//! registration order. [`forward_to_tracing`] is a ready-made sink for
//! callers that want evaluator messages in their `tracing` output, and
//! [`file_sink`] appends them to a file.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Debug,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Level::Info => 1 << 0,
            Level::Debug => 1 << 1,
            Level::Warning => 1 << 2,
            Level::Error => 1 << 3,
        }
    }
}

/// Set of levels accepted by a sink
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelMask(u8);

impl LevelMask {
    pub const NONE: LevelMask = LevelMask(0);
    pub const ALL: LevelMask = LevelMask(0b1111);

    pub fn of(levels: &[Level]) -> Self {
        levels.iter().fold(Self::NONE, |mask, &level| mask.with(level))
    }

    pub fn contains(self, level: Level) -> bool {
        self.0 & level.bit() != 0
    }

    pub fn with(self, level: Level) -> Self {
        LevelMask(self.0 | level.bit())
    }

    pub fn without(self, level: Level) -> Self {
        LevelMask(self.0 & !level.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Handle returned by [`Logger::add_sink`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkId(usize);

type SinkFn = Box<dyn Fn(Level, &str) + Send + Sync>;

struct Sink {
    mask: LevelMask,
    write: SinkFn,
}

#[derive(Default)]
pub struct Logger {
    sinks: Vec<Sink>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sink to the end of the chain
    pub fn add_sink<F>(&mut self, mask: LevelMask, write: F) -> SinkId
    where
        F: Fn(Level, &str) + Send + Sync + 'static,
    {
        self.sinks.push(Sink {
            mask,
            write: Box::new(write),
        });
        SinkId(self.sinks.len() - 1)
    }

    pub fn mask(&self, id: SinkId) -> Option<LevelMask> {
        self.sinks.get(id.0).map(|sink| sink.mask)
    }

    pub fn set_mask(&mut self, id: SinkId, mask: LevelMask) {
        if let Some(sink) = self.sinks.get_mut(id.0) {
            sink.mask = mask;
        }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn log(&self, level: Level, message: &str) {
        for sink in self.sinks.iter().filter(|sink| sink.mask.contains(level)) {
            (sink.write)(level, message);
        }
    }
}

/// Sink that re-emits messages as `tracing` events at the matching level
pub fn forward_to_tracing(level: Level, message: &str) {
    match level {
        Level::Info => tracing::info!(target: "bigcalc_eval", "{}", message),
        Level::Debug => tracing::debug!(target: "bigcalc_eval", "{}", message),
        Level::Warning => tracing::warn!(target: "bigcalc_eval", "{}", message),
        Level::Error => tracing::error!(target: "bigcalc_eval", "{}", message),
    }
}

/// Opens `path` for appending and returns a sink writing `[level] message`
/// lines to it
pub fn file_sink(path: &Path) -> io::Result<impl Fn(Level, &str) + Send + Sync + 'static> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let file = Mutex::new(file);
    Ok(move |level: Level, message: &str| {
        let Ok(mut file) = file.lock() else {
            return;
        };
        if let Err(e) = writeln!(file, "[{}] {}", level.as_str(), message) {
            tracing::warn!(target: "bigcalc_eval", "Failed to write log file: {}", e);
        }
    })
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field(
                "sinks",
                &self.sinks.iter().map(|sink| sink.mask).collect::<Vec<_>>(),
            )
            .finish()
    }
}
