//! Keystroke reduction
//!
//! The presentation layer forwards raw keys; the session folds them into its
//! input buffer and submits the buffer on `Enter`.

use super::Session;

/// A key press as seen by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A single character
    Char(char),
    Backspace,
    Enter,
    /// Any other named key (arrows, modifiers, ...), ignored
    Other(String),
}

impl Key {
    /// Parse a DOM-style key name.
    ///
    /// A one-character name is that character; `"Backspace"` and `"Enter"`
    /// are recognised; everything else is [`Key::Other`].
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Char(c);
        }
        match name {
            "Backspace" => Key::Backspace,
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_name(name)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Char(c)
    }
}

impl Session {
    /// Apply one key press and return the resulting input buffer.
    ///
    /// Printable characters are appended, `Backspace` drops the last
    /// character, `Enter` submits the buffer through
    /// [`execute_line`](Session::execute_line) and clears it. Failures of the
    /// submitted line are already in the log and are not returned here.
    pub async fn handle_key(&mut self, key: impl Into<Key>) -> String {
        match key.into() {
            Key::Char(c) if !c.is_control() => self.input.push(c),
            Key::Backspace => {
                self.input.pop();
            }
            Key::Enter => {
                let line = self.input.clone();
                if !line.trim().is_empty() {
                    self.history.push(line.clone());
                }
                let _ = self.execute_line(&line).await;
                self.input.clear();
            }
            Key::Char(_) | Key::Other(_) => {}
        }
        self.input.clone()
    }

    /// Type a whole line and press `Enter`.
    pub async fn submit(&mut self, line: &str) {
        for c in line.chars() {
            self.handle_key(c).await;
        }
        self.handle_key(Key::Enter).await;
    }
}
