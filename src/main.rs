// src/main.rs
use clap::Parser;
use favlink::application::error::ApplicationError;
use favlink::application::services::{BookmarkService, BookmarkServiceImpl};
use favlink::cli::args::Cli;
use favlink::cli::error::CliError;
use favlink::domain::error::DomainError;
use favlink::config::{generate_default_config, load_settings, Settings};
use favlink::exitcode;
use favlink::infrastructure::repositories::SqliteBookmarkRepository;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::{filter_fn, LevelFilter},
    fmt::{self, format::FmtSpan},
    prelude::*,
};

#[instrument]
fn main() {
    // human output goes to stderr so stdout stays pipeable
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if cli.generate_config {
        println!("{}", generate_default_config());
        std::process::exit(exitcode::SUCCESS);
    }

    let settings = load_settings(cli.config.as_deref()).unwrap_or_else(|e| {
        debug!("Failed to load settings: {}. Using defaults.", e);
        Settings::default()
    });

    let repository = match SqliteBookmarkRepository::from_url(&settings.db_url) {
        Ok(repository) => repository,
        Err(e) => {
            eprintln!("Failed to open bookmark store at {}: {}", settings.db_url, e);
            std::process::exit(exitcode::UNAVAILABLE);
        }
    };
    let service: Arc<dyn BookmarkService> = Arc::new(BookmarkServiceImpl::new(Arc::new(repository)));

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {}", e);
            std::process::exit(exitcode::UNAVAILABLE);
        }
    };

    if let Err(e) = rt.block_on(favlink::cli::execute_command(cli, service)) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code_for(&e));
    }
}

/// Storage failures are environment problems, not usage problems.
fn exit_code_for(error: &CliError) -> i32 {
    match error {
        CliError::Application(ApplicationError::Domain(DomainError::StorageUnavailable(_))) => {
            exitcode::UNAVAILABLE
        }
        _ => exitcode::USAGE,
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let noisy_modules = ["mio", "want", "hyper_util"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}
