//! Termkit CLI - Command line interface for the virtual terminal
//!
//! Usage:
//!   termkit -c 'cd games' -c 'ls'   # Execute lines and print the log
//!   termkit setup.script            # Execute a host file as a script
//!   termkit --json -c 'pwd'         # Print the final view as JSON
//!   termkit                         # Interactive session on stdin

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use termkit::Session;
use tokio::io::{AsyncBufReadExt, BufReader};

const BANNER: &str = "Welcome to termkit. Type `help` to list commands.\n";

/// Termkit - In-memory virtual terminal
#[derive(Parser, Debug)]
#[command(name = "termkit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Execute the given line (repeatable, run in order)
    #[arg(short = 'c', value_name = "LINE")]
    command: Vec<String>,

    /// Host file to execute as a script
    #[arg()]
    script: Option<PathBuf>,

    /// Print the final terminal view as JSON instead of the log
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let exited = Arc::new(AtomicBool::new(false));
    let exit_flag = Arc::clone(&exited);
    let builder = Session::builder()
        .on_exit(move |_| exit_flag.store(true, Ordering::SeqCst))
        .redirect(|_, path| println!("redirect -> {}", path));

    if args.command.is_empty() && args.script.is_none() {
        let mut session = builder.banner(BANNER).build();
        return interactive(&mut session, &exited).await;
    }

    let mut session = builder.build();
    let mut success = true;

    for line in &args.command {
        match session.execute_line(line).await {
            Ok(Some(message)) => eprintln!("{}", message),
            Ok(None) => {}
            Err(_) => success = false,
        }
        if exited.load(Ordering::SeqCst) {
            break;
        }
    }

    if let Some(script_path) = args.script.filter(|_| !exited.load(Ordering::SeqCst)) {
        let script = std::fs::read_to_string(&script_path)
            .with_context(|| format!("Failed to read script: {}", script_path.display()))?;
        let report = session.execute_script(&script).await;
        success &= report.is_success();
    }

    if args.json {
        let json =
            serde_json::to_string_pretty(&session.view()).context("Failed to serialize view")?;
        println!("{}", json);
    } else {
        print!("{}", session.lines());
    }

    if !success {
        std::process::exit(1);
    }
    Ok(())
}

/// Feed host stdin lines through the session until `exit` or end of input.
async fn interactive(session: &mut Session, exited: &AtomicBool) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}{}", session.lines(), session.prompt())?;
    stdout.flush()?;

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = input
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        let mark = session.lines().len();
        session.submit(&line).await;

        // `clear` empties the log; nothing from before the mark survives
        let output = session.lines().get(mark..).unwrap_or_default();
        // The first line is the echo of what was just typed
        let output = output.split_once('\n').map_or("", |(_, rest)| rest);
        write!(stdout, "{}", output)?;

        if exited.load(Ordering::SeqCst) {
            writeln!(stdout, "Goodbye.")?;
            return Ok(());
        }

        write!(stdout, "{}", session.prompt())?;
        stdout.flush()?;
    }

    writeln!(stdout)?;
    Ok(())
}
