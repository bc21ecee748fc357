//! Logging configuration for Termkit
//!
//! Structured events are emitted through `tracing` when the `logging`
//! feature is enabled.
//!
//! # Log Levels
//!
//! - **WARN**: Unknown commands, execution limits reached
//! - **INFO**: Session creation, script start and finish
//! - **DEBUG**: Command dispatch, working directory changes, failures
//!
//! # Input Content
//!
//! Lines typed into a terminal are user content. They are replaced by
//! `[hidden]` in events unless [`LogConfig::unsafe_log_input`] is set.

use std::borrow::Cow;

const HIDDEN: &str = "[hidden]";

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether to include raw input lines in logs (default: false)
    pub log_input_content: bool,

    /// Maximum length of logged values before truncation (default: 200)
    pub max_value_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_input_content: false,
            max_value_length: 200,
        }
    }
}

impl LogConfig {
    /// Create a new log configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Include raw input lines in log events
    ///
    /// # Warning
    ///
    /// Input may contain anything the user typed.
    pub fn unsafe_log_input(mut self) -> Self {
        self.log_input_content = true;
        self
    }

    /// Set maximum length for logged values
    pub fn max_value_length(mut self, len: usize) -> Self {
        self.max_value_length = len;
        self
    }

    /// Prepare user input for a log event.
    pub fn redact_input<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if !self.log_input_content {
            return Cow::Borrowed(HIDDEN);
        }
        self.truncate(input)
    }

    /// Truncate value if it exceeds max length
    ///
    /// Cuts on a char boundary at or before `max_value_length`.
    fn truncate<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if value.len() <= self.max_value_length {
            return Cow::Borrowed(value);
        }
        let mut end = self.max_value_length;
        while end > 0 && !value.is_char_boundary(end) {
            end -= 1;
        }
        Cow::Owned(format!(
            "{}...[truncated {} bytes]",
            &value[..end],
            value.len() - end
        ))
    }
}
