//! Basic Termkit usage example
//!
//! Run with: cargo run --example basic

use termkit::{Key, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Create a session over the default filesystem
    let mut session = Session::builder()
        .on_exit(|session| session.log("(host closes the terminal)"))
        .redirect(|_, path| println!("host would navigate to {}", path))
        .build();

    // Run whole lines
    session.execute_line("ls").await?;
    session.execute_line("cd games").await?;
    session.execute_line("pwd").await?;

    // Failures are logged and returned
    if let Err(err) = session.execute_line("cd nowhere").await {
        println!("failed: {}", err);
    }

    // Scripts and executables
    session.execute_line("cd ..").await?;
    session.execute_line("run hello_world.exe 3").await?;

    // Keystrokes, as a browser front end would send them
    for key in ["h", "e", "l", "p", " ", "c", "d", "Enter"] {
        session.handle_key(Key::from_name(key)).await;
    }

    // Goodbye is returned, not logged
    if let Some(message) = session.execute_line("exit").await? {
        println!("{}", message);
    }

    print!("{}", session.lines());
    println!("{}", serde_json::to_string(&session.view())?);
    Ok(())
}
