//! Session flow builtins (clear, exit, redirect, #)

use async_trait::async_trait;

use super::{Builtin, Command, Context};
use crate::error::{Error, Result};

const GOODBYE: &str = "Goodbye.";

/// The clear builtin - empty the output log.
pub struct Clear;

pub(super) fn clear() -> Command {
    Command::new(
        "clear",
        "Clear Terminal",
        "== Clear Terminal ==\n\
         Clear the current line buffer.\n\
         Usage:\n  \
         $ clear",
        Clear,
    )
}

#[async_trait]
impl Builtin for Clear {
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>> {
        ctx.session.clear();
        Ok(None)
    }
}

/// The exit builtin - hand the session back to the host's `on_exit` handler.
pub struct Exit;

pub(super) fn exit() -> Command {
    Command::new(
        "exit",
        "Exit",
        "== Exit ==\n\
         Terminates the current terminal session.\n\
         Usage:\n  \
         $ exit",
        Exit,
    )
}

#[async_trait]
impl Builtin for Exit {
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>> {
        let on_exit = ctx
            .session
            .settings()
            .on_exit
            .clone()
            .ok_or_else(|| Error::configuration("No onExit function provided."))?;

        on_exit(ctx.session);
        Ok(Some(GOODBYE.to_string()))
    }
}

/// The redirect builtin - ask the host to navigate to a path.
pub struct Redirect;

pub(super) fn redirect() -> Command {
    Command::new(
        "redirect",
        "Redirect",
        "== Redirect ==\n\
         Redirects to the given path.\n\
         Usage:\n  \
         $ redirect <website-path>\n\
         Example:\n  \
         $ redirect /games/minesweeper",
        Redirect,
    )
}

#[async_trait]
impl Builtin for Redirect {
    async fn execute(&self, ctx: Context<'_>) -> Result<Option<String>> {
        let [path] = ctx.args else {
            return Err(Error::usage("1 parameter required. ($ help redirect)"));
        };

        let redirect = ctx
            .session
            .settings()
            .redirect
            .clone()
            .ok_or_else(|| Error::configuration("No redirect handler available on page."))?;

        redirect(ctx.session, path);
        Ok(Some(GOODBYE.to_string()))
    }
}

/// The `#` builtin - a comment, does nothing.
pub struct Comment;

pub(super) fn comment() -> Command {
    Command::new(
        "#",
        "Comment",
        "== Comment ==\nDoes nothing... just used for documentation.",
        Comment,
    )
}

#[async_trait]
impl Builtin for Comment {
    async fn execute(&self, _ctx: Context<'_>) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Session;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_clear_empties_log() {
        let mut session = Session::new();
        session.log("something");
        clear().execute(&mut session, &[]).await.unwrap();
        assert_eq!(session.lines(), "");
    }

    #[tokio::test]
    async fn test_exit_without_handler_fails() {
        let mut session = Session::new();
        assert_eq!(
            exit().execute(&mut session, &[]).await,
            Err(Error::configuration("No onExit function provided."))
        );
    }

    #[tokio::test]
    async fn test_exit_calls_handler_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut session = Session::builder()
            .on_exit(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        let result = exit().execute(&mut session, &[]).await;
        assert_eq!(result, Ok(Some("Goodbye.".to_string())));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_redirect_arity_checked_before_handler() {
        let mut session = Session::new();
        assert_eq!(
            redirect().execute(&mut session, &[]).await,
            Err(Error::usage("1 parameter required. ($ help redirect)"))
        );
        assert_eq!(
            redirect().execute(&mut session, &args(&["/a"])).await,
            Err(Error::configuration("No redirect handler available on page."))
        );
    }

    #[tokio::test]
    async fn test_redirect_passes_path() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut session = Session::builder()
            .redirect(move |_, path| sink.lock().unwrap().push(path.to_string()))
            .build();

        let result = redirect()
            .execute(&mut session, &args(&["/games/minesweeper"]))
            .await;
        assert_eq!(result, Ok(Some("Goodbye.".to_string())));
        assert_eq!(*seen.lock().unwrap(), vec!["/games/minesweeper".to_string()]);
    }

    #[tokio::test]
    async fn test_comment_ignores_everything() {
        let mut session = Session::new();
        let result = comment()
            .execute(&mut session, &args(&["any", "\"thing\""]))
            .await;
        assert_eq!(result, Ok(None));
        assert_eq!(session.lines(), "");
    }
}
