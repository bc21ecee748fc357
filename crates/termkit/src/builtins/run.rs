//! run builtin - execute an executable file or run a text file as a script

use async_trait::async_trait;

use super::{Builtin, Command, Context};
use crate::error::{Error, Result};
use crate::fs::FileData;

/// The run builtin.
///
/// Usage: run FILE [ARG...]
///
/// An executable receives the remaining arguments. A text file is executed
/// line by line as a script; the remaining arguments are ignored.
pub struct Run;

pub(super) fn run() -> Command {
    Command::new(
        "run",
        "Run",
        "== Run ==\n\
         Runs a given executable or script file.\n\
         Usage:\n  \
         $ run <file-name-or-path> [<argument>...]\n\
         Example:\n  \
         $ run /hello_world.exe 10",
        Run,
    )
}

#[async_trait]
impl Builtin for Run {
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>> {
        let Some((target, args)) = ctx.args.split_first() else {
            return Err(Error::usage("At least 1 parameter required. ($ help run)"));
        };

        // Clone out of the tree so the session can be borrowed mutably
        let data = ctx.session.resolve_file(target)?.data.clone();
        match data {
            FileData::Executable(executable) => {
                let action = executable.action();
                action(ctx.session, args);
            }
            FileData::Text(script) => {
                ctx.session.run_script(&script).await?;
            }
        }
        Ok(None)
    }
}
