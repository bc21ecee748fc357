//! Custom Commands Example
//!
//! Demonstrates how to extend termkit with custom commands and a custom
//! filesystem.
//!
//! Run with: cargo run --example custom_commands

use termkit::{
    Builtin, BuiltinContext, Command, DirectorySpec, Error, Executable, File, FileData, Node,
    Session, async_trait,
};

/// Log the text files in a directory with their sizes
struct Du;

#[async_trait]
impl Builtin for Du {
    async fn execute(&self, ctx: BuiltinContext<'_>) -> termkit::Result<Option<String>> {
        if ctx.args.len() > 1 {
            return Err(Error::usage("At most 1 parameter allowed."));
        }
        let dir = match ctx.args.first() {
            Some(path) => ctx.session.resolve_directory(path)?,
            None => ctx.session.working_directory(),
        };

        let tree = ctx.session.filesystem();
        let entries: Vec<String> = tree
            .directory(dir)
            .children()
            .iter()
            .filter_map(|node| match node {
                Node::File(File {
                    name,
                    data: FileData::Text(text),
                }) => Some(format!("{:>6}  {}", text.len(), name)),
                _ => None,
            })
            .collect();

        for entry in entries {
            ctx.session.log(entry);
        }
        Ok(None)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fortune = Executable::new(Some("Prints a fortune.".to_string()), |session, _args| {
        session.log("You will write a terminal.");
    });

    let root = DirectorySpec::new("")
        .file(File::text("readme.txt", "Try: du docs"))
        .file(File::executable("fortune.exe", fortune))
        .directory(
            DirectorySpec::new("docs")
                .file(File::text("a.txt", "alpha"))
                .file(File::text("b.txt", "beta, the second letter")),
        );

    let mut session = Session::builder()
        .filesystem(root)
        .command(Command::new(
            "du",
            "Disk Usage",
            "== Disk Usage ==\nLogs text file sizes.\nUsage:\n  $ du [<directory-path>]",
            Du,
        ))
        .banner("custom terminal\n")
        .build();

    session.execute_line("cat readme.txt").await?;
    session.execute_line("du docs").await?;
    session.execute_line("run fortune.exe").await?;
    session.execute_line("help du").await?;

    print!("{}", session.lines());
    Ok(())
}
