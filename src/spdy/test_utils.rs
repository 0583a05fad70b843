use logtest::Logger;
use rstest::fixture;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Exclusive access to the process-wide [`Logger`].
///
/// The logger is global, so records from tests running on other threads can
/// show up too. Filter on something only the test under way produces.
pub(crate) struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    pub(crate) fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        let guard = logger.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        Self { guard }
    }
    /// Drains every captured record whose message contains `needle`.
    pub(crate) fn drain_matching(&mut self, needle: &str) -> Vec<(log::Level, String)> {
        let mut matching = Vec::new();
        while let Some(record) = self.guard.pop() {
            let message = record.args().to_string();
            if message.contains(needle) {
                matching.push((record.level(), message));
            }
        }

        matching
    }
}

#[fixture]
pub(crate) fn logger() -> LoggerHandle {
    LoggerHandle::new()
}
