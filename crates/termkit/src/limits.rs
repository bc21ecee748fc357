//! Resource limits for script execution
//!
//! Scripts may `run` other scripts, including themselves. These limits keep a
//! runaway script from recursing or fanning out without bound.

/// Resource limits for a terminal session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionLimits {
    /// Maximum nesting of scripts started by `run`
    /// Default: 16
    pub max_script_depth: usize,

    /// Maximum number of commands dispatched for one submitted line,
    /// counting every line of every nested script (fuel model)
    /// Default: 10,000
    pub max_commands: usize,
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self {
            max_script_depth: 16,
            max_commands: 10_000,
        }
    }
}

impl ExecutionLimits {
    /// Create new limits with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum script nesting depth
    pub fn max_script_depth(mut self, depth: usize) -> Self {
        self.max_script_depth = depth;
        self
    }

    /// Set maximum command count per submitted line
    pub fn max_commands(mut self, count: usize) -> Self {
        self.max_commands = count;
        self
    }
}

/// Execution counters for tracking resource usage
#[derive(Debug, Clone, Default)]
pub struct ExecutionCounters {
    /// Commands dispatched since the last top-level line
    pub commands: usize,

    /// Current script nesting depth
    pub script_depth: usize,
}

impl ExecutionCounters {
    /// Create new counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment command counter, returns error if limit exceeded
    pub fn tick_command(&mut self, limits: &ExecutionLimits) -> Result<(), LimitExceeded> {
        self.commands += 1;
        if self.commands > limits.max_commands {
            return Err(LimitExceeded::MaxCommands(limits.max_commands));
        }
        Ok(())
    }

    /// Reset the command counter (called for every top-level line)
    pub fn reset_commands(&mut self) {
        self.commands = 0;
    }

    /// Enter a script, returns error if depth exceeded
    pub fn push_script(&mut self, limits: &ExecutionLimits) -> Result<(), LimitExceeded> {
        // Check before incrementing so we don't leave invalid state on failure
        if self.script_depth >= limits.max_script_depth {
            return Err(LimitExceeded::ScriptDepth(limits.max_script_depth));
        }
        self.script_depth += 1;
        Ok(())
    }

    /// Leave a script
    pub fn pop_script(&mut self) {
        if self.script_depth > 0 {
            self.script_depth -= 1;
        }
    }
}

/// Error returned when a resource limit is exceeded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitExceeded {
    #[error("maximum command count exceeded ({0})")]
    MaxCommands(usize),

    #[error("maximum script depth exceeded ({0})")]
    ScriptDepth(usize),
}
