//! Per-instance diagnostic collection
//!
//! Translators keep their own [`LogSink`] so that concurrent runs never see
//! each other's messages. Every message is also forwarded to `tracing`; the
//! library never installs a subscriber itself.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, trace, warn};

/// Severity of a collected message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// One diagnostic produced during a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: LogLevel,
    /// Logical source, e.g. `energyplus.ForwardTranslator`
    pub channel: String,
    pub message: String,
}

/// Ordered collection of messages owned by one translator
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    channel: String,
    messages: Vec<LogMessage>,
}

impl LogSink {
    /// Create an empty sink logging under `channel`
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            messages: Vec::new(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        let channel = self.channel.as_str();
        match level {
            LogLevel::Trace => trace!(channel, "{message}"),
            LogLevel::Debug => debug!(channel, "{message}"),
            LogLevel::Info => info!(channel, "{message}"),
            LogLevel::Warn => warn!(channel, "{message}"),
            LogLevel::Error | LogLevel::Fatal => error!(channel, "{message}"),
        }
        self.messages.push(LogMessage {
            level,
            channel: self.channel.clone(),
            message,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn messages(&self) -> &[LogMessage] {
        &self.messages
    }

    /// Messages logged at exactly [`LogLevel::Warn`]
    pub fn warnings(&self) -> Vec<LogMessage> {
        self.messages
            .iter()
            .filter(|m| m.level == LogLevel::Warn)
            .cloned()
            .collect()
    }

    /// Messages logged above [`LogLevel::Warn`]
    pub fn errors(&self) -> Vec<LogMessage> {
        self.messages
            .iter()
            .filter(|m| m.level > LogLevel::Warn)
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
