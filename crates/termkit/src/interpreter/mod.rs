//! Terminal session: state, dispatch and script execution

mod keys;
mod state;

pub use keys::Key;
pub use state::{ExitHandler, RedirectHandler, ScriptReport, Settings, TerminalView};

use std::sync::Arc;

use crate::SessionBuilder;
use crate::builtins::CommandRegistry;
use crate::error::{Error, PathError, Result};
use crate::fs::{DirId, Executable, File, FileData, FileTree};
use crate::limits::{ExecutionCounters, ExecutionLimits};
#[cfg(feature = "logging")]
use crate::logging_impl::LogConfig;
use crate::parser::tokenize;

/// The mutable root of all terminal state.
///
/// Owns the directory tree, the command registry and the output log. Callers
/// must not run two lines against the same session concurrently; every
/// mutating method takes `&mut self`, so the borrow checker enforces it.
pub struct Session {
    tree: FileTree,
    commands: Arc<CommandRegistry>,
    working_directory: DirId,
    lines: String,
    prompt: String,
    input: String,
    history: Vec<String>,
    settings: Settings,
    limits: ExecutionLimits,
    counters: ExecutionCounters,
    #[cfg(feature = "logging")]
    log_config: LogConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session over the default filesystem with no host handlers.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new SessionBuilder for customized configuration.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub(crate) fn from_parts(
        tree: FileTree,
        commands: CommandRegistry,
        settings: Settings,
        limits: ExecutionLimits,
        banner: String,
        #[cfg(feature = "logging")] log_config: LogConfig,
    ) -> Self {
        let mut session = Self {
            tree,
            commands: Arc::new(commands),
            working_directory: DirId::ROOT,
            lines: banner,
            prompt: String::new(),
            input: String::new(),
            history: Vec::new(),
            settings,
            limits,
            counters: ExecutionCounters::new(),
            #[cfg(feature = "logging")]
            log_config,
        };
        session.set_working_directory(DirId::ROOT);
        session
    }

    /// Full scrollback, one `\n` after every logged line.
    pub fn lines(&self) -> &str {
        &self.lines
    }

    /// Current prompt, e.g. `/games/ $ `.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Input typed but not yet submitted.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Non-blank lines submitted with `Enter`, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Snapshot of the fields a presentation layer renders.
    pub fn view(&self) -> TerminalView {
        TerminalView {
            lines: self.lines.clone(),
            prompt: self.prompt.clone(),
            input: self.input.clone(),
        }
    }

    pub fn filesystem(&self) -> &FileTree {
        &self.tree
    }

    /// Shared handle to the command registry.
    pub fn commands(&self) -> Arc<CommandRegistry> {
        Arc::clone(&self.commands)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn limits(&self) -> &ExecutionLimits {
        &self.limits
    }

    pub fn working_directory(&self) -> DirId {
        self.working_directory
    }

    /// Absolute display path of a directory.
    pub fn directory_path(&self, dir: DirId) -> String {
        self.tree.display_path(dir)
    }

    /// Absolute display path of the working directory.
    pub fn working_directory_path(&self) -> String {
        self.directory_path(self.working_directory)
    }

    /// Append a line to the log.
    pub fn log(&mut self, text: impl AsRef<str>) {
        self.lines.push_str(text.as_ref());
        self.lines.push('\n');
    }

    /// Empty the log.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // Only ever called with ids handed out by `self.tree`.
    pub(crate) fn set_working_directory(&mut self, dir: DirId) {
        self.working_directory = dir;
        self.prompt = format!("{} $ ", self.working_directory_path());

        #[cfg(feature = "logging")]
        tracing::debug!(cwd = %self.prompt.trim_end_matches(" $ "), "working directory changed");
    }

    /// Resolve a path and make it the working directory.
    ///
    /// On failure the working directory is unchanged.
    pub fn change_directory(&mut self, path: &str) -> Result<()> {
        let dir = self.resolve_directory(path)?;
        self.set_working_directory(dir);
        Ok(())
    }

    /// Resolve a directory path against the working directory.
    pub fn resolve_directory(&self, path: &str) -> Result<DirId> {
        Ok(self.tree.resolve_directory(self.working_directory, path)?)
    }

    /// Resolve a file path against the working directory.
    pub fn resolve_file(&self, path: &str) -> Result<&File> {
        Ok(self.tree.resolve_file(self.working_directory, path)?)
    }

    /// Resolve a path that must name a text file; returns its content.
    pub fn resolve_text_file(&self, path: &str) -> Result<&str> {
        match &self.resolve_file(path)?.data {
            FileData::Text(text) => Ok(text),
            FileData::Executable(_) => Err(PathError::NotATextFile(path.to_string()).into()),
        }
    }

    /// Resolve a path that must name an executable file.
    pub fn resolve_executable(&self, path: &str) -> Result<&Executable> {
        match &self.resolve_file(path)?.data {
            FileData::Executable(executable) => Ok(executable),
            FileData::Text(_) => Err(PathError::NotAnExecutable(path.to_string()).into()),
        }
    }

    /// Execute one input line.
    ///
    /// The line is echoed after the prompt, tokenized, and dispatched on its
    /// first token. Blank lines do nothing. An unknown keyword is logged and
    /// is not an error. A failing command has its reason appended to the log
    /// and returned. On success, returns the command's result message, if any.
    pub async fn execute_line(&mut self, line: &str) -> Result<Option<String>> {
        let echo = format!("{}{}", self.prompt, line);
        self.log(echo);

        if self.counters.script_depth == 0 {
            self.counters.reset_commands();
        }

        let result = self.dispatch(line).await;
        if let Err(err) = &result {
            #[cfg(feature = "logging")]
            tracing::debug!(error = %err, "command failed");

            self.log(err.to_string());
        }
        result
    }

    async fn dispatch(&mut self, line: &str) -> Result<Option<String>> {
        let tokens = tokenize(line)?;
        let Some((keyword, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let registry = Arc::clone(&self.commands);
        let Some(command) = registry.get(keyword) else {
            #[cfg(feature = "logging")]
            tracing::warn!(command = %self.log_config.redact_input(keyword), "command not found");

            self.log(Error::CommandNotFound(keyword.clone()).to_string());
            return Ok(None);
        };

        if let Err(exceeded) = self.counters.tick_command(&self.limits) {
            #[cfg(feature = "logging")]
            tracing::warn!(limit = %exceeded, "execution limit reached");

            return Err(exceeded.into());
        }

        #[cfg(feature = "logging")]
        tracing::debug!(
            command = %command.keyword,
            args = args.len(),
            line = %self.log_config.redact_input(line),
            "dispatching command"
        );

        command.execute(self, args).await
    }

    /// Execute a script body line by line.
    ///
    /// Every line goes through [`execute_line`](Session::execute_line); a
    /// failing line is recorded in the report and execution continues with
    /// the next one.
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// let mut session = termkit::Session::new();
    /// let report = session.execute_script("cd nowhere\ncd games\npwd").await;
    /// assert_eq!(report.failures, 1);
    /// assert!(session.lines().ends_with("/games/\n"));
    /// # });
    /// ```
    pub async fn execute_script(&mut self, script: &str) -> ScriptReport {
        #[cfg(feature = "logging")]
        tracing::info!(depth = self.counters.script_depth, "script started");

        let mut report = ScriptReport::default();
        for line in script.split('\n') {
            let result = self.execute_line(line).await;
            report.record(&result);
        }

        #[cfg(feature = "logging")]
        tracing::info!(
            lines = report.lines,
            failures = report.failures,
            "script finished"
        );

        report
    }

    /// Execute a script nested inside the current command, bounded by
    /// [`ExecutionLimits::max_script_depth`].
    pub async fn run_script(&mut self, script: &str) -> Result<ScriptReport> {
        if let Err(exceeded) = self.counters.push_script(&self.limits) {
            #[cfg(feature = "logging")]
            tracing::warn!(limit = %exceeded, "execution limit reached");

            return Err(exceeded.into());
        }

        let report = self.execute_script(script).await;
        self.counters.pop_script();
        Ok(report)
    }
}
