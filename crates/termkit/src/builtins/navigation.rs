//! Navigation builtins (cd, pwd, ls)

use async_trait::async_trait;

use super::{Builtin, Command, Context};
use crate::error::{Error, Result};

/// The cd builtin - change directory.
///
/// Usage: cd PATH
pub struct Cd;

pub(super) fn cd() -> Command {
    Command::new(
        "cd",
        "Change Directory",
        "== Change Directory ==\n\
         Used to switch between directories.\n\
         Usage:\n  \
         $ cd <relative-or-absolute-directory-path>",
        Cd,
    )
}

#[async_trait]
impl Builtin for Cd {
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>> {
        let [path] = ctx.args else {
            return Err(Error::usage("Exactly 1 parameter required."));
        };
        if path.is_empty() {
            return Err(Error::usage("Exactly 1 parameter required."));
        }

        ctx.session.change_directory(path)?;
        Ok(None)
    }
}

/// The pwd builtin - print working directory.
pub struct Pwd;

pub(super) fn pwd() -> Command {
    Command::new(
        "pwd",
        "Print Working Directory",
        "== Print Working Directory ==\n\
         Prints the terminal's current directory to the screen.\n\
         Usage:\n  \
         $ pwd",
        Pwd,
    )
}

#[async_trait]
impl Builtin for Pwd {
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>> {
        let path = ctx.session.working_directory_path();
        ctx.session.log(path);
        Ok(None)
    }
}

/// The ls builtin - list the working directory, one name per line.
pub struct Ls;

pub(super) fn ls() -> Command {
    Command::new(
        "ls",
        "List Directory Contents",
        "== List Directory Contents ==\n\
         Prints out the contents of the current directory to the screen.\n\
         Usage:\n  \
         $ ls",
        Ls,
    )
}

#[async_trait]
impl Builtin for Ls {
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>> {
        // TODO: list the directory named by the first argument instead of warning
        if !ctx.args.is_empty() {
            ctx.session.log("[WARN] ls parameters unimplemented.");
        }

        let tree = ctx.session.filesystem();
        let names: Vec<String> = tree
            .child_names(ctx.session.working_directory())
            .map(str::to_string)
            .collect();

        for name in names {
            ctx.session.log(name);
        }
        Ok(None)
    }
}
