use std::sync::Mutex;

/// Text sink for receipts and shipping manifests
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Prints to standard output
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

/// Writes each line as an `info` event
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        for line in message.lines() {
            tracing::info!(target: "tally::notice", "{}", line);
        }
    }
}

/// Keeps everything it is sent, in order
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
