//! Session state types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::Session;

/// Host callback run by `exit`.
pub type ExitHandler = Arc<dyn Fn(&mut Session) + Send + Sync>;

/// Host callback run by `redirect` with the requested path.
pub type RedirectHandler = Arc<dyn Fn(&mut Session, &str) + Send + Sync>;

/// Handlers injected by the host application.
///
/// The session never assumes anything about them beyond their signatures.
#[derive(Clone, Default)]
pub struct Settings {
    pub on_exit: Option<ExitHandler>,
    pub redirect: Option<RedirectHandler>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("on_exit", &self.on_exit.is_some())
            .field("redirect", &self.redirect.is_some())
            .finish()
    }
}

/// Everything a presentation layer needs to redraw the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalView {
    /// Full scrollback, newline-delimited
    pub lines: String,
    /// Current prompt
    pub prompt: String,
    /// Uncommitted input buffer
    pub input: String,
}

/// Outcome of running a script, one entry per line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Lines executed, including blank and comment lines
    pub lines: usize,
    /// Lines whose command failed
    pub failures: usize,
}

impl ScriptReport {
    /// Record the outcome of one line.
    pub fn record<T, E>(&mut self, result: &std::result::Result<T, E>) {
        self.lines += 1;
        if result.is_err() {
            self.failures += 1;
        }
    }

    /// Check if every line succeeded.
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}
