//! Blocking line prompts
//!
//! A [`Prompter`] writes a question, reads one line and validates it. What
//! happens on invalid input depends on its [`RetryPolicy`]: fail fast with a
//! validation error, or print a notice and ask again. End of input is always
//! [`AppError::InputClosed`].

use crate::error::{AppError, Result};
use crate::logging::Logger;
use crate::output::ReportFormatter;
use crate::types::RetryPolicy;
use crate::{log_debug, log_warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use url::Url;

pub const LINES_QUESTION: &str = "How many lines of text would you like to have? Please, enter a number: ";
pub const WORDS_QUESTION: &str = "How many words would you like to have in a line? Please, enter a number: ";
pub const WORD_LENGTH_QUESTION: &str = "How long would you like each word to be? Please, enter a number: ";
pub const DIRECTORY_QUESTION: &str = "Please specify the directory where the text file should be saved: ";

const NOT_A_NUMBER: &str = "Oops! This doesn't appear to be a number...";
const NOT_A_URL: &str = "Oops! This doesn't appear to be an URL...";
const TRY_AGAIN: &str = "Please try again!";

/// Question asking for the `index`-th page URL (1-based)
pub fn url_question(index: usize) -> String {
    let ordinal = match index {
        1 => "first".to_string(),
        2 => "second".to_string(),
        n => format!("#{}", n),
    };
    format!("Please, enter the URL for the {} page: ", ordinal)
}

/// Reads validated answers from `input`, writing questions to `output`
pub struct Prompter<'a, R: BufRead, W: Write> {
    input: R,
    output: W,
    formatter: &'a dyn ReportFormatter,
    policy: RetryPolicy,
    logger: Option<&'a Logger>,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(input: R, output: W, formatter: &'a dyn ReportFormatter, policy: RetryPolicy) -> Self {
        Self {
            input,
            output,
            formatter,
            policy,
            logger: None,
        }
    }

    /// Log prompts and rejected answers
    pub fn with_logger(mut self, logger: &'a Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Writer the questions go to
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a rejection notice the same way invalid answers are reported
    pub fn notify_error(&mut self, notice: &str) -> Result<()> {
        writeln!(self.output, "{}", self.formatter.input_error(notice))?;
        Ok(())
    }

    /// Ask for a whole number greater than zero
    pub fn ask_positive_int(&mut self, question: &str) -> Result<u32> {
        loop {
            let answer = self.ask_line(question)?;
            match parse_positive(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if let Some(logger) = self.logger {
                        log_warn!(logger, "Non number provided by the user: {}", err);
                    }
                    self.reject(NOT_A_NUMBER, err)?;
                }
            }
        }
    }

    /// Ask for an absolute http(s) URL
    pub fn ask_url(&mut self, question: &str) -> Result<Url> {
        loop {
            let answer = self.ask_line(question)?;
            match crate::page::validate_url(&answer) {
                Ok(url) => return Ok(url),
                Err(err) => {
                    if let Some(logger) = self.logger {
                        log_warn!(logger, "Invalid URL string provided by the user: {}", err);
                    }
                    self.reject(NOT_A_URL, err)?;
                }
            }
        }
    }

    /// Ask for a directory path; the answer is not checked here
    pub fn ask_directory(&mut self, question: &str) -> Result<PathBuf> {
        if let Some(logger) = self.logger {
            log_debug!(logger, "Prompting user for directory path...");
        }
        let answer = self.ask_line(question)?;
        Ok(PathBuf::from(answer))
    }

    /// Write the question and read one trimmed line
    pub fn ask_line(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", self.formatter.prompt(question))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // The question is still on the current line
            writeln!(self.output)?;
            return Err(AppError::input_closed(format!(
                "no answer to '{}'",
                question.trim_end().trim_end_matches(':')
            )));
        }
        Ok(line.trim().to_string())
    }

    fn reject(&mut self, notice: &str, err: AppError) -> Result<()> {
        match self.policy {
            RetryPolicy::FailFast => {
                self.notify_error(notice)?;
                Err(err)
            }
            RetryPolicy::Reprompt => self.notify_error(&format!("{} {}", notice, TRY_AGAIN)),
        }
    }
}

fn parse_positive(answer: &str) -> Result<u32> {
    match answer.parse::<u32>() {
        Ok(0) => Err(AppError::validation("expected a number greater than 0, got '0'")),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::validation(format!("invalid literal '{}': {}", answer, e))),
    }
}
