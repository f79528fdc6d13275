//! opsamples - Main CLI Application
//!
//! Random text generation with optional leveled log records, and a page
//! metrics sampler that times every extraction step.

use clap::Parser;
use opsamples::{
    app::App,
    cli::{parse_exit_code, Cli, Command},
    config::load_config,
    error::{AppError, ErrorReporter, Result},
    instrument::ConsoleReporter,
    logging::LoggerFactory,
    output::OutputFormatterFactory,
    page::PageFetcher,
    types::Flow,
    PKG_NAME, VERSION,
};
use std::io;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("{} v{} stopped unexpectedly", PKG_NAME, VERSION);
        process::exit(1);
    }));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(parse_exit_code(e.kind()));
        }
    };

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    if cli.debug {
        println!("{}", cli.get_config_summary());
    }

    let use_color = cli.use_colors();
    let verbose = cli.verbose;

    if let Err(e) = run_application(cli).await {
        eprintln!("Error: {}", ErrorReporter::new(use_color, verbose).render(&e));
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.clone())?;
    if cli.color_override().is_none() && !opsamples::cli::supports_color() {
        config.enable_color = false;
    }
    colored::control::set_override(config.enable_color);

    let app = App::new(config.clone());
    app.print_preamble(&mut io::stdout())?;

    let factory = LoggerFactory::new(config.clone());

    match cli.command {
        Command::Generate(_) => {
            let logger = factory.create_for_flow(app.generate_flow())?;

            let result = app.run_generate(io::stdin().lock(), io::stdout(), logger.as_ref());
            if let Some(logger) = &logger {
                logger.flush()?;
            }
            result.map(|_| ())
        }
        Command::Measure(_) => {
            let logger = factory.create_for_flow(Flow::Measure)?;
            let fetcher = PageFetcher::new(config.timeout())?;
            let reporter = ConsoleReporter::new(OutputFormatterFactory::create_formatter(
                config.enable_color,
                config.verbose,
            ));

            let result = app
                .run_measure(io::stdin().lock(), io::stdout(), &fetcher, &reporter, logger.as_ref())
                .await;
            if let Some(logger) = &logger {
                logger.flush()?;
            }
            result.map(|_| ())
        }
    }
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - URLs must start with http:// or https://");
            eprintln!("  - TIMEOUT_SECONDS must be between 1 and 300");
            eprintln!("  - LOG_LEVEL must be one of trace, debug, info, warning, error, critical");
        }
        AppError::Validation(_) => {
            eprintln!();
            eprintln!("Input help:");
            eprintln!("  - Counts must be whole numbers greater than 0");
            eprintln!("  - Use --diagnostics to be asked again after a typo");
        }
        AppError::Io(_) => {
            eprintln!();
            eprintln!("File system help:");
            eprintln!("  - Make sure the directory exists and is writable");
            eprintln!("  - Pass the directory with --dir or OUTPUT_DIR");
        }
        AppError::Network(_) | AppError::HttpRequest(_) => {
            eprintln!();
            eprintln!("Network troubleshooting:");
            eprintln!("  - Check your internet connection");
            eprintln!("  - Open the URL in a browser to confirm it answers");
            eprintln!("  - Verify firewall and proxy settings");
        }
        AppError::Timeout(_) => {
            eprintln!();
            eprintln!("Timeout help:");
            eprintln!("  - Increase the limit with --timeout (up to 300 seconds)");
        }
        AppError::InputClosed(_) => {
            eprintln!();
            eprintln!("Input ended before every question was answered.");
            eprintln!("  - Pass values as flags (see --help) when piping input");
        }
        _ => {}
    }
}
