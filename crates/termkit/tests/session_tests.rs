//! Integration tests for session behaviour
//!
//! Drives a session through `execute_line` the way a host would and checks
//! the log, prompt and returned results.

use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use termkit::{DirectorySpec, Error, File, PathError, Session, tokenize};

fn session_with_folder() -> Session {
    Session::builder()
        .filesystem(
            DirectorySpec::new("")
                .directory(DirectorySpec::new("My Folder").file(File::text("notes.txt", "hi")))
                .directory(DirectorySpec::new("docs")),
        )
        .build()
}

#[test]
fn test_quoted_argument_is_one_token() {
    assert_eq!(
        tokenize("cd \"My Folder\"").unwrap(),
        vec!["cd".to_string(), "My Folder".to_string()]
    );
}

#[tokio::test]
async fn test_cd_into_quoted_directory() {
    let mut session = session_with_folder();
    session.execute_line("cd \"My Folder\"").await.unwrap();
    session.execute_line("cat notes.txt").await.unwrap();
    assert_eq!(session.prompt(), "/My Folder/ $ ");
    assert!(session.lines().ends_with("/My Folder/ $ cat notes.txt\nhi\n"));
}

#[tokio::test]
async fn test_unterminated_quote_fails_the_line() {
    let mut session = Session::new();
    let result = session.execute_line("cd \"games").await;
    assert!(matches!(result, Err(Error::Parse(_))));
    assert_eq!(session.prompt(), "/ $ ");
}

#[tokio::test]
async fn test_cd_then_parent_returns_to_start() {
    let mut session = session_with_folder();
    session.execute_line("cd docs").await.unwrap();
    assert_eq!(session.prompt(), "/docs/ $ ");
    session.execute_line("cd ..").await.unwrap();
    assert_eq!(session.prompt(), "/ $ ");
}

#[tokio::test]
async fn test_cd_parent_of_root_fails_and_keeps_cwd() {
    let mut session = Session::new();
    let result = session.execute_line("cd ..").await;
    assert_eq!(result, Err(Error::Path(PathError::RootHasNoParent)));
    assert_eq!(session.prompt(), "/ $ ");
    assert_eq!(
        session.lines(),
        "/ $ cd ..\nRoot directory has no parent directory.\n"
    );
}

#[tokio::test]
async fn test_absolute_cd_then_pwd() {
    let mut session = Session::new();
    session.execute_line("cd /games").await.unwrap();
    session.execute_line("pwd").await.unwrap();
    assert_eq!(session.lines(), "/ $ cd /games\n/games/ $ pwd\n/games/\n");
}

#[tokio::test]
async fn test_absolute_cd_works_from_any_directory() {
    let mut session = session_with_folder();
    session.execute_line("cd docs").await.unwrap();
    session.execute_line("cd \"/My Folder\"").await.unwrap();
    assert_eq!(session.prompt(), "/My Folder/ $ ");
}

#[tokio::test]
async fn test_cd_into_file_fails() {
    let mut session = Session::new();
    let result = session.execute_line("cd intro.script").await;
    assert_eq!(
        result,
        Err(Error::Path(PathError::IsAFile("intro.script".into())))
    );
    assert!(session.lines().ends_with("'intro.script' is a file.\n"));
}

#[tokio::test]
async fn test_help_lists_every_keyword() {
    let mut session = Session::new();
    session.execute_line("help").await.unwrap();

    let lines: Vec<&str> = session.lines().lines().collect();
    let listing = lines
        .iter()
        .position(|line| *line == "Available commands:")
        .expect("listing header");
    assert_eq!(
        &lines[listing + 1..],
        &["cd", "help", "clear", "pwd", "ls", "exit", "redirect", "run", "#", "cat"]
    );
}

#[tokio::test]
async fn test_help_for_named_commands() {
    let mut session = Session::new();
    session.execute_line("help pwd nope").await.unwrap();
    assert_eq!(
        session.lines(),
        "/ $ help pwd nope\n\
         == Print Working Directory ==\n\
         Prints the terminal's current directory to the screen.\n\
         Usage:\n  \
         $ pwd\n\
         \n\
         Could not find command \"nope\"\n\
         \n"
    );
}

#[tokio::test]
async fn test_ls_lists_root() {
    let mut session = Session::new();
    session.execute_line("ls").await.unwrap();
    assert_eq!(
        session.lines(),
        "/ $ ls\nhello_world.exe\nintro.script\ngames\n"
    );
}

#[tokio::test]
async fn test_cat_nonexistent_is_logged() {
    let mut session = Session::new();
    let result = session.execute_line("cat nonexistent.txt").await;
    assert_eq!(result, Ok(None));
    assert_eq!(
        session.lines(),
        "/ $ cat nonexistent.txt\nCould not find file with name 'nonexistent.txt' in /\n"
    );
}

#[tokio::test]
async fn test_cat_executable_is_logged() {
    let mut session = Session::new();
    session.execute_line("cat hello_world.exe").await.unwrap();
    assert!(
        session
            .lines()
            .ends_with("'hello_world.exe' is not a text file.\n")
    );
}

#[tokio::test]
async fn test_unknown_command_does_not_fail() {
    let mut session = Session::new();
    assert_eq!(session.execute_line("sudo ls").await, Ok(None));
    assert!(session.lines().ends_with("Couldn't find command \"sudo\".\n"));
}

#[tokio::test]
async fn test_clear_empties_log() {
    let mut session = Session::new();
    session.execute_line("ls").await.unwrap();
    session.execute_line("clear").await.unwrap();
    assert_eq!(session.lines(), "");
}

#[tokio::test]
async fn test_exit_without_handler() {
    let mut session = Session::new();
    let result = session.execute_line("exit").await;
    assert_eq!(
        result,
        Err(Error::Configuration("No onExit function provided.".into()))
    );
    assert_eq!(session.lines(), "/ $ exit\nNo onExit function provided.\n");
}

#[tokio::test]
async fn test_exit_with_handler() {
    let exits = Arc::new(Mutex::new(0));
    let seen = Arc::clone(&exits);
    let mut session = Session::builder()
        .on_exit(move |_| *seen.lock().unwrap() += 1)
        .build();

    assert_eq!(
        session.execute_line("exit").await,
        Ok(Some("Goodbye.".to_string()))
    );
    assert_eq!(*exits.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_exit_handler_can_use_session() {
    let mut session = Session::builder()
        .on_exit(|session| session.log("bye from host"))
        .build();
    session.execute_line("exit").await.unwrap();
    assert_eq!(session.lines(), "/ $ exit\nbye from host\n");
}

#[tokio::test]
async fn test_redirect_passes_path() {
    let paths = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&paths);
    let mut session = Session::builder()
        .redirect(move |_, path| seen.lock().unwrap().push(path.to_string()))
        .build();

    assert_eq!(
        session.execute_line("redirect /games/minesweeper").await,
        Ok(Some("Goodbye.".to_string()))
    );
    assert_eq!(*paths.lock().unwrap(), vec!["/games/minesweeper".to_string()]);
}

#[tokio::test]
async fn test_redirect_arity_checked_before_handler() {
    let mut session = Session::new();
    assert_eq!(
        session.execute_line("redirect").await,
        Err(Error::Usage("1 parameter required. ($ help redirect)".into()))
    );
    assert_eq!(
        session.execute_line("redirect /home").await,
        Err(Error::Configuration(
            "No redirect handler available on page.".into()
        ))
    );
}

#[tokio::test]
async fn test_view_reflects_session() {
    let mut session = Session::new();
    session.execute_line("cd games").await.unwrap();
    let view = session.view();
    assert_eq!(view.lines, "/ $ cd games\n");
    assert_eq!(view.prompt, "/games/ $ ");
    assert_eq!(view.input, "");
}
