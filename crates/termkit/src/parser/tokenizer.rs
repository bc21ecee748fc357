//! Tokenizer for terminal input lines

use std::str::Chars;

use crate::error::{Error, Result};

/// Character-by-character tokenizer state.
pub struct Tokenizer<'a> {
    chars: Chars<'a>,
    /// Token being accumulated
    current: String,
    in_quotes: bool,
    tokens: Vec<String>,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer for the given line.
    pub fn new(line: &'a str) -> Self {
        Self {
            chars: line.chars(),
            current: String::new(),
            in_quotes: false,
            tokens: Vec::new(),
        }
    }

    /// Consume the line and return its tokens.
    pub fn tokenize(mut self) -> Result<Vec<String>> {
        while let Some(ch) = self.chars.next() {
            match ch {
                c if c.is_whitespace() && !self.in_quotes => self.flush_non_empty(),
                '"' => self.quote(),
                c => self.current.push(c),
            }
        }

        if self.in_quotes {
            return Err(Error::Parse("unterminated quoted parameter".to_string()));
        }

        self.flush_non_empty();
        Ok(self.tokens)
    }

    fn quote(&mut self) {
        // A backslash right before the quote escapes it
        if self.current.ends_with('\\') {
            self.current.pop();
            self.current.push('"');
            return;
        }

        if self.in_quotes {
            // Closing quote always emits, even an empty token
            self.in_quotes = false;
            self.tokens.push(std::mem::take(&mut self.current));
        } else {
            self.in_quotes = true;
        }
    }

    fn flush_non_empty(&mut self) {
        if !self.current.is_empty() {
            self.tokens.push(std::mem::take(&mut self.current));
        }
    }
}

/// Split a raw input line into tokens.
///
/// # Errors
///
/// Returns [`Error::Parse`] if a double quote is still open at the end of the line.
///
/// ```
/// let tokens = termkit::tokenize(r#"cd "My Folder""#).unwrap();
/// assert_eq!(tokens, vec!["cd", "My Folder"]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    Tokenizer::new(line).tokenize()
}
