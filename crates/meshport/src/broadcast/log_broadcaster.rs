//! Log broadcasting for real-time log streaming.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub target: String,
    pub message: String,
}

impl LogEvent {
    pub fn new(level: &str, target: &str, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level: level.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct LogBroadcaster {
    sender: broadcast::Sender<LogEvent>,
}

impl LogBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn send(&self, event: LogEvent) {
        // Ignore errors - no active receivers is fine
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LogEvent> {
        self.sender.subscribe()
    }

    pub fn log(&self, level: &str, target: &str, message: &str) {
        self.send(LogEvent::new(level, target, message));
    }

    pub fn info(&self, target: &str, message: &str) {
        self.log("INFO", target, message);
    }

    pub fn warn(&self, target: &str, message: &str) {
        self.log("WARN", target, message);
    }

    pub fn error(&self, target: &str, message: &str) {
        self.log("ERROR", target, message);
    }

    pub fn debug(&self, target: &str, message: &str) {
        self.log("DEBUG", target, message);
    }
}

impl Default for LogBroadcaster {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// A log writer that can be used as a tracing-subscriber writer to broadcast
/// formatted log lines.
pub struct BroadcastingLogWriter {
    broadcaster: Arc<LogBroadcaster>,
}

impl BroadcastingLogWriter {
    pub fn new(broadcaster: Arc<LogBroadcaster>) -> Self {
        Self { broadcaster }
    }
}

impl std::io::Write for BroadcastingLogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(line) = std::str::from_utf8(buf) {
            let line = line.trim();
            if !line.is_empty() {
                let (level, target, message) = parse_log_line(line);
                self.broadcaster.log(&level, &target, &message);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

const LEVELS: [&str; 5] = ["ERROR", "WARN", "INFO", "DEBUG", "TRACE"];

/// Parses a formatted subscriber line: `<timestamp> LEVEL target: message`.
fn parse_log_line(line: &str) -> (String, String, String) {
    let mut tokens = line.split_whitespace();
    let _timestamp = tokens.next();

    match tokens.next() {
        Some(level) if LEVELS.contains(&level) => {
            let level = level.to_string();
            match tokens.next() {
                Some(target) if target.ends_with(':') => {
                    let target = target.trim_end_matches(':').to_string();
                    let message = tokens.collect::<Vec<_>>().join(" ");
                    (level, target, message)
                }
                Some(first) => {
                    let mut rest = vec![first.to_string()];
                    rest.extend(tokens.map(str::to_string));
                    (level, "meshport".to_string(), rest.join(" "))
                }
                None => (level, "meshport".to_string(), String::new()),
            }
        }
        _ => (
            "INFO".to_string(),
            "meshport".to_string(),
            line.trim().to_string(),
        ),
    }
}
