//! Warning side channel of reference resolution.

/// Receives human-readable warnings about references that could not be
/// resolved. Generation never stops because of them.
pub trait WarningSink {
    fn warn(&mut self, message: &str);
}

/// Collects warnings in memory.
impl WarningSink for Vec<String> {
    fn warn(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Forwards warnings to `tracing` and counts them for the run summary.
#[derive(Debug, Default)]
pub struct LogSink {
    count: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl WarningSink for LogSink {
    fn warn(&mut self, message: &str) {
        self.count += 1;
        tracing::warn!("{}", message);
    }
}
