use std::sync::Mutex;
use tracing::Level;

/// Sink for the diagnostics emitted during discovery
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Log target for discovery diagnostics, e.g. `RUST_LOG=hubspot_core::discovery=warn`
pub const DISCOVERY_TARGET: &str = "hubspot_core::discovery";

/// Forwards every message to `tracing` under [`DISCOVERY_TARGET`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!(target: DISCOVERY_TARGET, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: DISCOVERY_TARGET, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: DISCOVERY_TARGET, "{}", message);
    }
}

/// Keeps messages in memory, mostly useful for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Messages recorded at the given level, in order
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
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, message: &str) {
        self.record(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::ERROR, message);
    }
}
