//! Default filesystem seed
//!
//! Every session starts from this tree unless the builder supplies another.

use super::tree::{DirectorySpec, Executable, File};
use crate::interpreter::Session;

const INTRO_SCRIPT: &str = "\
# Welcome to the termkit command line!
# A brief overview of the features of this terminal:
# - Simple directory and file structure (root: '/')
# - Full scripting support using terminal commands (just how you ran this script!)
# - Built in scoped executable files (try: $ run /hello_world.exe 10)
# - Simple unix-like directory navigation.
#
# To start you off, I'm now going to run the 'help' command for you:
help";

/// Build the default tree:
///
/// ```text
/// /
/// ├── hello_world.exe
/// ├── intro.script
/// └── games/
///     └── minesweeper.script
/// ```
pub fn default_filesystem() -> DirectorySpec {
    let hello_world = Executable::new(
        Some("Says hello world <n> times.\n  $ run hello_world.exe <n>".to_string()),
        hello_world,
    );

    DirectorySpec::new("")
        .file(File::executable("hello_world.exe", hello_world))
        .file(File::text("intro.script", INTRO_SCRIPT))
        .directory(
            DirectorySpec::new("games").file(File::text(
                "minesweeper.script",
                "redirect /games/minesweeper",
            )),
        )
}

fn hello_world(session: &mut Session, args: &[String]) {
    if args.len() > 1 {
        session.log("Maximum one argument.");
        return;
    }

    let count = match args.first() {
        None => 1,
        Some(arg) => match arg.parse::<u32>() {
            Ok(count) => count,
            Err(_) => {
                session.log(format!("Expected a number, got \"{}\".", arg));
                return;
            }
        },
    };

    for i in 1..=count {
        session.log(format!("{}: Hello, world!", i));
    }
}
