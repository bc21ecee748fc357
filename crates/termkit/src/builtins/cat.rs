//! cat builtin command

use async_trait::async_trait;

use super::{Builtin, Command, Context};
use crate::error::{Error, Result};

/// The cat builtin - log a text file's content.
///
/// Usage: cat FILE
pub struct Cat;

pub(super) fn cat() -> Command {
    Command::new(
        "cat",
        "Concatenate File Contents",
        "== Concatenate File Contents ==\n\
         Writes a file's contents to the terminal.\n\
         Usage:\n  \
         $ cat <file-path>",
        Cat,
    )
}

#[async_trait]
impl Builtin for Cat {
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>> {
        let [path] = ctx.args else {
            return Err(Error::usage("Exactly 1 parameter required."));
        };

        // A missing file is reported in the log, not as a failure
        let line = match ctx.session.resolve_text_file(path) {
            Ok(text) => text.to_string(),
            Err(err) => err.to_string(),
        };
        ctx.session.log(line);
        Ok(None)
    }
}
