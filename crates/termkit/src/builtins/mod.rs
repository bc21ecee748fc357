//! Built-in terminal commands
//!
//! This module provides the [`Builtin`] trait for implementing commands,
//! the [`Command`] record that pairs a handler with its help text, and the
//! [`CommandRegistry`] a session dispatches on.
//!
//! # Custom Commands
//!
//! Implement the [`Builtin`] trait to create custom commands:
//!
//! ```rust
//! use termkit::{Builtin, BuiltinContext, Command, Session, async_trait};
//!
//! struct Greet;
//!
//! #[async_trait]
//! impl Builtin for Greet {
//!     async fn execute(&self, ctx: BuiltinContext<'_>) -> termkit::Result<Option<String>> {
//!         let name = ctx.args.first().map(|s| s.as_str()).unwrap_or("world");
//!         ctx.session.log(format!("Hello, {}!", name));
//!         Ok(None)
//!     }
//! }
//!
//! let session = Session::builder()
//!     .command(Command::new("greet", "Greet", "== Greet ==\nSays hello.", Greet))
//!     .build();
//! assert!(session.commands().get("greet").is_some());
//! ```
//!
//! Register via [`SessionBuilder::command`](crate::SessionBuilder::command).

mod cat;
mod flow;
mod help;
mod navigation;
mod run;

pub use cat::Cat;
pub use flow::{Clear, Comment, Exit, Redirect};
pub use help::Help;
pub use navigation::{Cd, Ls, Pwd};
pub use run::Run;

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::interpreter::Session;

/// Execution context for builtin commands.
pub struct Context<'a> {
    /// Command arguments (not including the keyword).
    ///
    /// For `run hello_world.exe 3`, this contains `["hello_world.exe", "3"]`.
    pub args: &'a [String],

    /// The session the command runs in.
    ///
    /// Commands log output, change directory and resolve paths through it.
    pub session: &'a mut Session,

    /// The registry record being executed, so a command can read its own
    /// description.
    pub command: &'a Command,
}

/// Trait for implementing builtin commands.
///
/// # Return Values
///
/// * `Ok(Some(message))` - success with a result message for the caller
/// * `Ok(None)` - success; any output was logged through the session
/// * `Err(Error)` - failure; the session logs the error's message
#[async_trait]
pub trait Builtin: Send + Sync {
    /// Execute the builtin command.
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>>;
}

/// A registered command: invocation keyword, help text and handler.
#[derive(Clone)]
pub struct Command {
    /// Keyword matched against the first token, case-sensitive
    pub keyword: String,
    /// Display name
    pub name: String,
    /// Help text printed by `help <keyword>`
    pub description: String,
    handler: Arc<dyn Builtin>,
}

impl Command {
    pub fn new(
        keyword: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl Builtin + 'static,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            description: description.into(),
            handler: Arc::new(handler),
        }
    }

    /// Run the handler against a session.
    pub async fn execute(&self, session: &mut Session, args: &[String]) -> Result<Option<String>> {
        self.handler
            .execute(Context {
                args,
                session,
                command: self,
            })
            .await
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("keyword", &self.keyword)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Keyword-to-command table, built once per session.
///
/// Keeps registration order for listings; lookups are exact matches.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in commands.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(navigation::cd());
        registry.register(help::help());
        registry.register(flow::clear());
        registry.register(navigation::pwd());
        registry.register(navigation::ls());
        registry.register(flow::exit());
        registry.register(flow::redirect());
        registry.register(run::run());
        registry.register(flow::comment());
        registry.register(cat::cat());
        registry
    }

    /// Add a command; a command already registered under the same keyword
    /// is replaced in place.
    pub fn register(&mut self, command: Command) {
        match self.index.get(&command.keyword) {
            Some(&slot) => self.commands[slot] = command,
            None => {
                self.index
                    .insert(command.keyword.clone(), self.commands.len());
                self.commands.push(command);
            }
        }
    }

    /// Look up a command by keyword.
    pub fn get(&self, keyword: &str) -> Option<&Command> {
        self.index.get(keyword).map(|&slot| &self.commands[slot])
    }

    /// Registered keywords in registration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|command| command.keyword.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
