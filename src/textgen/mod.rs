//! Random document generation
//!
//! Words are drawn uniformly, with replacement, from the 52 ASCII letters.
//! Lines are words joined by a space; a document is lines joined by `\n`.

use crate::error::{AppError, ErrorContext, Result};
use crate::logging::Logger;
use crate::models::{Document, DocumentShape, Line};
use crate::log_debug;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Letters a word is drawn from
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates random words, lines and documents
///
/// Generic over the RNG so tests can seed it; nothing here promises
/// reproducible output between runs.
pub struct DocumentGenerator<'a, R: Rng> {
    rng: R,
    logger: Option<&'a Logger>,
}

impl<'a> DocumentGenerator<'a, ThreadRng> {
    /// Generator backed by the thread-local RNG
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl<'a> Default for DocumentGenerator<'a, ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Rng> DocumentGenerator<'a, R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, logger: None }
    }

    /// Emit debug records for every word, line and document
    pub fn with_logger(mut self, logger: &'a Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// A word of exactly `length` letters
    pub fn generate_word(&mut self, length: u32) -> String {
        if let Some(logger) = self.logger {
            log_debug!(logger, "Generating word with length {}", length);
        }

        let word: String = (0..length)
            .map(|_| ALPHABET[self.rng.random_range(0..ALPHABET.len())] as char)
            .collect();

        if let Some(logger) = self.logger {
            log_debug!(logger, "Generated word {}", word);
        }
        word
    }

    /// A line of exactly `words` words, each `word_length` letters
    pub fn generate_line(&mut self, words: u32, word_length: u32) -> Line {
        if let Some(logger) = self.logger {
            log_debug!(logger, "Generating line with length {} and word length {}", words, word_length);
        }

        let line = Line::new((0..words).map(|_| self.generate_word(word_length)).collect());

        if let Some(logger) = self.logger {
            log_debug!(logger, "Generated line with length {}", line.char_len());
        }
        line
    }

    /// A document with the requested shape
    pub fn generate_document(&mut self, shape: &DocumentShape) -> Document {
        if let Some(logger) = self.logger {
            log_debug!(
                logger,
                "Generating {} number of lines with {} line length and {} word length",
                shape.lines,
                shape.words_per_line,
                shape.word_length
            );
        }

        let document = Document::new(
            (0..shape.lines)
                .map(|_| self.generate_line(shape.words_per_line, shape.word_length))
                .collect(),
        );

        if let Some(logger) = self.logger {
            log_debug!(logger, "Generated random text with length {}", document.char_len());
        }
        document
    }
}

/// Write `document` to `<dir>/random.txt`, replacing any existing file
pub fn write_document(dir: &Path, document: &Document) -> Result<PathBuf> {
    write_document_logged(dir, document, None)
}

/// [`write_document`] with progress records on `logger`
pub fn write_document_logged(dir: &Path, document: &Document, logger: Option<&Logger>) -> Result<PathBuf> {
    let dir = target_dir(dir);
    if !dir.is_dir() {
        return Err(AppError::io(format!("'{}' is not an existing directory", dir.display())));
    }

    let path = dir.join(crate::defaults::OUTPUT_FILE_NAME);
    if let Some(logger) = logger {
        log_debug!(logger, "File path {}", path.display());
        log_debug!(logger, "Writing random text to file...");
    }

    let file = File::create(&path)
        .with_context(|| format!("Failed to create '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", document)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    if let Some(logger) = logger {
        log_debug!(logger, "Writing random text to file completed!");
    }
    Ok(path)
}

/// An empty directory answer means the working directory
fn target_dir(dir: &Path) -> &Path {
    if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    }
}
