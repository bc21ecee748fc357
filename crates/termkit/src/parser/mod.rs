//! Parser module for Termkit
//!
//! Input lines are split into whitespace-separated tokens. Double quotes
//! group whitespace into a single token and `\"` produces a literal quote.
//! There is no further grammar: the first token names a command and the
//! rest are its arguments.

mod tokenizer;

pub use tokenizer::{Tokenizer, tokenize};
