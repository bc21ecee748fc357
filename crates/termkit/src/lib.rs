//! Termkit - In-memory virtual terminal
//!
//! A tree-structured virtual filesystem, a line tokenizer, a command
//! registry and a script runner behind a text-in/text-out session. Hosts feed
//! keystrokes or whole lines in and render [`Session::lines`],
//! [`Session::prompt`] and [`Session::input`].
//!
//! # Example
//!
//! ```rust
//! use termkit::Session;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new();
//!     session.execute_line("cd /games").await?;
//!     session.execute_line("pwd").await?;
//!     assert_eq!(session.lines(), "/ $ cd /games\n/games/ $ pwd\n/games/\n");
//!     Ok(())
//! }
//! ```
//!
//! # Scripts
//!
//! A text file run with `run` is executed line by line. A failing line is
//! logged and the script carries on with the next one:
//!
//! ```rust
//! use termkit::Session;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut session = Session::new();
//! session.execute_line("run intro.script").await.unwrap();
//! assert!(session.lines().contains("Available commands:"));
//! # }
//! ```

mod builtins;
mod error;
mod fs;
mod interpreter;
mod limits;
#[cfg(feature = "logging")]
mod logging_impl;
mod parser;

pub use async_trait::async_trait;
pub use builtins::{Builtin, Command, CommandRegistry, Context as BuiltinContext};
pub use error::{Error, PathError, Result};
pub use fs::{
    Action, DirId, Directory, DirectorySpec, Executable, File, FileData, FileTree, Node, NodeSpec,
    default_filesystem,
};
pub use interpreter::{
    ExitHandler, Key, RedirectHandler, ScriptReport, Session, Settings, TerminalView,
};
pub use limits::{ExecutionLimits, LimitExceeded};
#[cfg(feature = "logging")]
pub use logging_impl::LogConfig;
pub use parser::{Tokenizer, tokenize};

use std::sync::Arc;

/// Builder for customized Session configuration.
#[derive(Default)]
pub struct SessionBuilder {
    filesystem: Option<DirectorySpec>,
    settings: Settings,
    commands: Vec<Command>,
    banner: String,
    limits: ExecutionLimits,
    #[cfg(feature = "logging")]
    log_config: LogConfig,
}

impl SessionBuilder {
    /// Replace the default filesystem seed.
    pub fn filesystem(mut self, root: DirectorySpec) -> Self {
        self.filesystem = Some(root);
        self
    }

    /// Set the handler run by `exit`.
    pub fn on_exit<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Session) + Send + Sync + 'static,
    {
        self.settings.on_exit = Some(Arc::new(handler));
        self
    }

    /// Set the handler run by `redirect`.
    pub fn redirect<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Session, &str) + Send + Sync + 'static,
    {
        self.settings.redirect = Some(Arc::new(handler));
        self
    }

    /// Register an extra command.
    ///
    /// Registered after the builtins, so a command with a builtin's keyword
    /// replaces that builtin.
    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Set the initial contents of the output log.
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Set execution limits.
    pub fn limits(mut self, limits: ExecutionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set logging configuration.
    #[cfg(feature = "logging")]
    pub fn log_config(mut self, config: LogConfig) -> Self {
        self.log_config = config;
        self
    }

    /// Build the Session.
    pub fn build(self) -> Session {
        let tree = FileTree::from_spec(self.filesystem.unwrap_or_else(default_filesystem));

        let mut commands = CommandRegistry::with_builtins();
        for command in self.commands {
            commands.register(command);
        }

        #[cfg(feature = "logging")]
        tracing::info!(
            directories = tree.len(),
            commands = commands.len(),
            "session created"
        );

        Session::from_parts(
            tree,
            commands,
            self.settings,
            self.limits,
            self.banner,
            #[cfg(feature = "logging")]
            self.log_config,
        )
    }
}
