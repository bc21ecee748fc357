//! help builtin

use async_trait::async_trait;

use super::{Builtin, Command, Context};
use crate::error::Result;

/// The help builtin - describe commands.
///
/// Usage: help [KEYWORD...]
///
/// Without arguments prints its own description and every registered
/// keyword. With arguments prints each named command's description, or a
/// not-found line, followed by a blank line.
pub struct Help;

pub(super) fn help() -> Command {
    Command::new(
        "help",
        "Help",
        "== Help ==\n\
         Used for getting help in the terminal.\n\
         Usage:\n  \
         $ help [<command-name> [<command-name>...]]\n\
         hint: try 'help ls cd'",
        Help,
    )
}

#[async_trait]
impl Builtin for Help {
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>> {
        let registry = ctx.session.commands();

        if ctx.args.is_empty() {
            ctx.session.log(&ctx.command.description);
            ctx.session.log("");
            ctx.session.log("Available commands:");
            for keyword in registry.keywords() {
                ctx.session.log(keyword);
            }
            return Ok(None);
        }

        for keyword in ctx.args {
            match registry.get(keyword) {
                Some(command) => ctx.session.log(&command.description),
                None => ctx
                    .session
                    .log(format!("Could not find command \"{}\"", keyword)),
            }
            ctx.session.log("");
        }
        Ok(None)
    }
}
