//! Generated document model: words, lines and the document that holds them

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested dimensions of a random document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentShape {
    /// Number of lines
    pub lines: u32,
    /// Words in each line
    pub words_per_line: u32,
    /// Characters in each word
    pub word_length: u32,
}

impl DocumentShape {
    /// Create a shape, rejecting zero in any dimension
    pub fn new(lines: u32, words_per_line: u32, word_length: u32) -> Result<Self> {
        for (name, value) in [
            ("line count", lines),
            ("words per line", words_per_line),
            ("word length", word_length),
        ] {
            if value == 0 {
                return Err(AppError::validation(format!("{} must be a positive number", name)));
            }
        }

        Ok(Self { lines, words_per_line, word_length })
    }

    /// Length in characters of one serialized line
    pub fn line_chars(&self) -> u64 {
        let words = self.words_per_line as u64;
        words * self.word_length as u64 + words.saturating_sub(1)
    }

    /// Length in characters of the serialized document
    pub fn document_chars(&self) -> u64 {
        let lines = self.lines as u64;
        lines * self.line_chars() + lines.saturating_sub(1)
    }
}

/// A line of space-separated words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    words: Vec<String>,
}

impl Line {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Serialized length including the separating spaces
    pub fn char_len(&self) -> usize {
        let letters: usize = self.words.iter().map(String::len).sum();
        letters + self.words.len().saturating_sub(1)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// An immutable, ordered sequence of lines
///
/// Serializes with one line per text line and no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Serialized length including line separators
    pub fn char_len(&self) -> usize {
        let body: usize = self.lines.iter().map(Line::char_len).sum();
        body + self.lines.len().saturating_sub(1)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
