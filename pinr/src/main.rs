// pinr/src/main.rs
use std::fs;
use std::path::Path;
use std::process;

use clap::Parser;
use colored::Colorize;
use pinr_common::error::Result as PinrResult;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::CliArgs;

fn init_logging(verbose: u8, log_dir: Option<&Path>) {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let max_log_level = level_filter.into_level().unwrap_or(tracing::Level::INFO);

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("PINR_LOG")
        .from_env_lossy();

    let Some(log_dir) = log_dir else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .without_time()
            .try_init();
        return;
    };

    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!(
            "{} Failed to create log directory {}: {}",
            "Error:".red().bold(),
            log_dir.display(),
            e
        );
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .without_time()
            .try_init();
        return;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, "pinr.log");
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);
    let stderr_writer = std::io::stderr.with_max_level(max_log_level);
    let file_writer = non_blocking_appender.with_max_level(max_log_level);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(stderr_writer.and(file_writer))
        .with_ansi(true)
        .without_time()
        .try_init();

    Box::leak(Box::new(guard)); // Keep guard alive

    debug!("Writing logs to: {}/pinr.log", log_dir.display());
}

#[tokio::main]
async fn main() -> PinrResult<()> {
    let cli_args = CliArgs::parse();
    init_logging(cli_args.verbose, cli_args.log_dir.as_deref());

    let config = match cli_args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: Could not load configuration: {:#}", "Error".red().bold(), e);
            process::exit(2);
        }
    };
    debug!("Effective configuration: {:?}", config);

    if let Err(e) = cli_args.command.run(&config).await {
        error!("Command failed: {:#}", e);
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }

    debug!("Command completed successfully.");
    Ok(())
}
