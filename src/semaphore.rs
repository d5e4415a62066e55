//! Progress reporting for pipeline hooks

use std::sync::Mutex;

use crate::colors::Colors;

/// Narrates a hook's progress. Reporting never changes what the hook does.
pub trait Semaphore: Send + Sync {
    fn start(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn success(&self, message: &str);
}

/// Writes hook progress to stderr.
pub struct ConsoleSemaphore {
    colors: Colors,
    quiet: bool,
}

impl ConsoleSemaphore {
    /// `quiet` hides start and success lines; warnings and errors always print.
    pub fn new(colors: Colors, quiet: bool) -> Self {
        Self { colors, quiet }
    }
}

impl Semaphore for ConsoleSemaphore {
    fn start(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}{message}{}", self.colors.info, self.colors.reset());
        }
    }

    fn warn(&self, message: &str) {
        eprintln!(
            "{}Warning:{} {message}",
            self.colors.warning,
            self.colors.reset()
        );
    }

    fn error(&self, message: &str) {
        eprintln!("{}Error:{} {message}", self.colors.error, self.colors.reset());
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}{message}{}", self.colors.success, self.colors.reset());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Start,
    Warn,
    Error,
    Success,
}

/// Keeps every reported message in order, for tests and embedding pipelines.
#[derive(Debug, Default)]
pub struct RecordingSemaphore {
    events: Mutex<Vec<(Level, String)>>,
}

impl RecordingSemaphore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn record(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_string()));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        // A panic while recording leaves the list usable
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Semaphore for RecordingSemaphore {
    fn start(&self, message: &str) {
        self.record(Level::Start, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }

    fn success(&self, message: &str) {
        self.record(Level::Success, message);
    }
}
