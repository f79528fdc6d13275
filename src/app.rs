//! Main application orchestration and execution

use crate::{
    config::{display_config_summary, validate_config},
    error::Result,
    function_name,
    instrument::{Stopwatch, TimingReporter},
    logging::Logger,
    models::{Config, DocumentShape, PageSummary},
    output::{OutputFormatterFactory, ReportFormatter},
    page::{self, PageSource},
    prompt::{self, Prompter},
    textgen::{self, DocumentGenerator},
    types::Flow,
    log_debug, log_critical, log_info,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use url::Url;

/// Runs one flow against a resolved configuration
pub struct App {
    config: Config,
    formatter: Box<dyn ReportFormatter>,
}

impl App {
    /// Create a new application instance with the configured formatter
    pub fn new(config: Config) -> Self {
        let formatter = OutputFormatterFactory::create_formatter(config.enable_color, config.verbose);
        Self::with_formatter(config, formatter)
    }

    pub fn with_formatter(config: Config, formatter: Box<dyn ReportFormatter>) -> Self {
        Self { config, formatter }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn formatter(&self) -> &dyn ReportFormatter {
        self.formatter.as_ref()
    }

    /// Which generator flow the configuration selects
    pub fn generate_flow(&self) -> Flow {
        if self.config.diagnostics {
            Flow::GenerateDiagnostics
        } else {
            Flow::Generate
        }
    }

    /// Print debug summary and advisory warnings to `out`
    pub fn print_preamble<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.config.debug {
            writeln!(out, "{}", crate::build_info())?;
            writeln!(out, "Configuration Summary:")?;
            writeln!(out, "{}", display_config_summary(&self.config))?;
            writeln!(out)?;
        }

        let warnings = validate_config(&self.config)?;
        if !warnings.is_empty() && (self.config.verbose || self.config.debug) {
            writeln!(out, "Configuration Warnings:")?;
            for warning in &warnings {
                writeln!(out, "  {}", warning.format(self.config.enable_color))?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    /// Random text generator, plain or with diagnostics
    ///
    /// Returns the path of the written file.
    pub fn run_generate<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
        logger: Option<&Logger>,
    ) -> Result<PathBuf> {
        if let Some(logger) = logger {
            log_info!(logger, "Starting random text generation session...");
        }

        let mut prompter = Prompter::new(input, output, self.formatter(), self.generate_flow().retry_policy());
        if let Some(logger) = logger {
            prompter = prompter.with_logger(logger);
        }

        let shape = self.resolve_shape(&mut prompter, logger)?;

        let dir = match &self.config.output_dir {
            Some(dir) => dir.clone(),
            None => prompter.ask_directory(prompt::DIRECTORY_QUESTION)?,
        };

        let mut generator = DocumentGenerator::new();
        if let Some(logger) = logger {
            generator = generator.with_logger(logger);
        }
        let document = generator.generate_document(&shape);

        let path = match textgen::write_document_logged(&dir, &document, logger) {
            Ok(path) => path,
            Err(e) => {
                if let Some(logger) = logger {
                    logger.error("Invalid directory path.")
                        .location(file!(), line!(), Some(module_path!()))
                        .function(function_name!())
                        .error_info(&e)
                        .log();
                    log_critical!(logger, "Wrong directory path provided by the user");
                }
                prompter.notify_error(&format!("Oops! This doesn't appear to be a valid directory path...\n{}", e))?;
                return Err(e);
            }
        };

        let out = prompter.output_mut();
        writeln!(out, "\n\n{}", self.formatter.document_written(shape.lines, &path))?;

        if let Some(logger) = logger {
            log_info!(logger, "Random text generation completed!");
        }
        Ok(path)
    }

    fn resolve_shape<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<'_, R, W>,
        logger: Option<&Logger>,
    ) -> Result<DocumentShape> {
        if let Some(logger) = logger {
            log_debug!(logger, "Prompting user for input...");
        }

        let lines = match self.config.lines {
            Some(lines) => lines,
            None => prompter.ask_positive_int(prompt::LINES_QUESTION)?,
        };
        let words = match self.config.words_per_line {
            Some(words) => words,
            None => prompter.ask_positive_int(prompt::WORDS_QUESTION)?,
        };
        let word_length = match self.config.word_length {
            Some(len) => len,
            None => prompter.ask_positive_int(prompt::WORD_LENGTH_QUESTION)?,
        };

        if let Some(logger) = logger {
            log_debug!(
                logger,
                "User input completed! Number of lines: {}; Line length: {}; Word length: {}",
                lines,
                words,
                word_length
            );
        }

        DocumentShape::new(lines, words, word_length)
    }

    /// Page metrics sampler
    ///
    /// Fetches each page in turn and prints timed counts. The whole session
    /// is timed as `measure_pages`.
    pub async fn run_measure<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
        source: &dyn PageSource,
        reporter: &dyn TimingReporter,
        logger: Option<&Logger>,
    ) -> Result<Vec<PageSummary>> {
        if let Some(logger) = logger {
            log_info!(logger, "Starting performance sample session...");
        }

        let mut stopwatch = Stopwatch::new(reporter);
        if let Some(logger) = logger {
            stopwatch = stopwatch.with_logger(logger);
        }

        let mut prompter = Prompter::new(input, output, self.formatter(), Flow::Measure.retry_policy());
        if let Some(logger) = logger {
            prompter = prompter.with_logger(logger);
        }

        let summaries = stopwatch
            .try_call_async("measure_pages", self.measure_pages(&mut prompter, source, &stopwatch, logger))
            .await?;

        if let Some(logger) = logger {
            log_info!(logger, "Performance sample session completed!");
        }
        Ok(summaries)
    }

    async fn measure_pages<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<'_, R, W>,
        source: &dyn PageSource,
        stopwatch: &Stopwatch<'_>,
        logger: Option<&Logger>,
    ) -> Result<Vec<PageSummary>> {
        let urls = self.resolve_urls(prompter, logger)?;

        let mut summaries = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            if self.config.verbose {
                writeln!(prompter.output_mut(), "{}", self.formatter.page_header(index + 1, url.as_str()))?;
            }

            let fetched = stopwatch.try_call_async("fetch_url", source.fetch(url)).await?;
            if let Some(logger) = logger {
                logger.debug("Fetched page")
                    .location(file!(), line!(), Some(module_path!()))
                    .function(function_name!())
                    .field("url", url.as_str())
                    .field("status", fetched.status)
                    .field("bytes", fetched.body.len())
                    .log();
            }

            let summary = page::process_page(&fetched.body, stopwatch, self.formatter(), prompter.output_mut())?;
            summaries.push(summary);
        }

        Ok(summaries)
    }

    fn resolve_urls<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<'_, R, W>,
        logger: Option<&Logger>,
    ) -> Result<Vec<Url>> {
        if let Some(logger) = logger {
            log_debug!(logger, "Prompting user for input...");
        }

        let mut urls = Vec::with_capacity(crate::defaults::PAGES_PER_SESSION);
        for index in 0..crate::defaults::PAGES_PER_SESSION {
            let url = match self.config.urls.get(index) {
                Some(given) => page::validate_url(given)?,
                None => prompter.ask_url(&prompt::url_question(index + 1))?,
            };
            urls.push(url);
        }

        if let Some(logger) = logger {
            let listed: Vec<&str> = urls.iter().map(Url::as_str).collect();
            log_debug!(logger, "User input completed! Page URLs: {}", listed.join(", "));
        }
        Ok(urls)
    }
}
