use crate::domain::ports::Notifier;

/// Production sink: every notice becomes an INFO event on the log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Keeps notices in memory so callers can inspect exactly what was emitted.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        tracing::trace!("Recorded notice: {}", message);
        self.messages.push(message.to_string());
    }
}
