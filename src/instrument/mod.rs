//! Instrumented calls
//!
//! A [`Stopwatch`] runs an operation, measures its wall-clock time and hands
//! one [`TimingSample`] to a [`TimingReporter`]. The operation's result is
//! returned untouched. Failed operations (an `Err`, or a panic unwinding
//! through the call) produce no sample.

use crate::logging::{LogLevel, Logger};
use crate::models::TimingSample;
use crate::output::ReportFormatter;
use std::future::Future;
use std::sync::Mutex;
use std::time::Instant;

/// Receives one sample per successful instrumented call
pub trait TimingReporter {
    fn report(&self, sample: &TimingSample);
}

/// Prints `<name> executed in <seconds> seconds` to stdout
pub struct ConsoleReporter {
    formatter: Box<dyn ReportFormatter>,
}

impl ConsoleReporter {
    pub fn new(formatter: Box<dyn ReportFormatter>) -> Self {
        Self { formatter }
    }
}

impl TimingReporter for ConsoleReporter {
    fn report(&self, sample: &TimingSample) {
        println!("{}", self.formatter.timing(sample));
    }
}

/// Keeps samples in memory
#[derive(Default)]
pub struct RecordingReporter {
    samples: Mutex<Vec<TimingSample>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples reported so far, in report order
    pub fn samples(&self) -> Vec<TimingSample> {
        self.samples.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Operation names reported so far, in report order
    pub fn operations(&self) -> Vec<String> {
        self.samples().into_iter().map(|s| s.operation).collect()
    }
}

impl TimingReporter for RecordingReporter {
    fn report(&self, sample: &TimingSample) {
        if let Ok(mut samples) = self.samples.lock() {
            samples.push(sample.clone());
        }
    }
}

/// Runs operations and reports how long each took
pub struct Stopwatch<'a> {
    reporter: &'a dyn TimingReporter,
    logger: Option<&'a Logger>,
}

impl<'a> Stopwatch<'a> {
    pub fn new(reporter: &'a dyn TimingReporter) -> Self {
        Self { reporter, logger: None }
    }

    /// Also log every sample at debug level
    pub fn with_logger(mut self, logger: &'a Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Time an infallible operation
    pub fn call<T, F>(&self, name: &str, op: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let value = op();
        self.emit(name, start);
        value
    }

    /// Time a fallible operation; an `Err` is returned as-is with no report
    pub fn try_call<T, E, F>(&self, name: &str, op: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let start = Instant::now();
        let value = op()?;
        self.emit(name, start);
        Ok(value)
    }

    /// Time a future, including every await point inside it
    pub async fn call_async<T, Fut>(&self, name: &str, fut: Fut) -> T
    where
        Fut: Future<Output = T>,
    {
        let start = Instant::now();
        let value = fut.await;
        self.emit(name, start);
        value
    }

    /// Time a fallible future; an `Err` is returned as-is with no report
    pub async fn try_call_async<T, E, Fut>(&self, name: &str, fut: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        let start = Instant::now();
        let value = fut.await?;
        self.emit(name, start);
        Ok(value)
    }

    fn emit(&self, name: &str, start: Instant) {
        let sample = TimingSample::new(name, start.elapsed());

        if let Some(logger) = self.logger {
            logger.log(LogLevel::Debug, &sample.report_line())
                .location(file!(), line!(), Some(module_path!()))
                .function(name)
                .field("operation", &sample.operation)
                .field("elapsed_ms", sample.elapsed_ms())
                .log();
        }

        self.reporter.report(&sample);
    }
}

/// Time a function call, naming the sample after the called function
///
/// `timed!(stopwatch, collect_all_links(&html))` reports as
/// `collect_all_links`.
#[macro_export]
macro_rules! timed {
    ($stopwatch:expr, $($func:ident)::+ ( $($arg:expr),* $(,)? )) => {{
        let name = $crate::instrument::last_segment(stringify!($($func)::+));
        $stopwatch.call(name, || $($func)::+($($arg),*))
    }};
}

/// Last `::` segment of a path, without whitespace
pub fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path).trim()
}
