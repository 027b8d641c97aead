//! CLI entrypoint for Anime Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quiz_application::{GenerateQuizInput, GenerateQuizUseCase, QuizOutcome};
use quiz_domain::{OutputFormat, Quiz};
use quiz_infrastructure::{ConfigLoader, FileConfig, InMemoryCatalog};
use quiz_presentation::{Cli, ConsoleFormatter, ProgressReporter, QuizPlayer};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting Anime Quiz");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog.path.clone())
        .context("No catalog given. Use --catalog <PATH> or set [catalog].path")?;
    let mut catalog = InMemoryCatalog::load(
        &catalog_path,
        &config.catalog.image_base,
        &config.catalog.music_base,
    )
    .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    let mut params = config.quiz.to_generation_params();
    if let Some(seed) = cli.seed {
        params = params.with_seed(seed);
    }
    // Entity and distractor draws happen in the catalog, so it needs the seed too
    if let Some(seed) = params.seed {
        catalog = catalog.with_seed(seed);
    }
    let use_case = GenerateQuizUseCase::new(Arc::new(catalog)).with_params(params);

    if cli.available {
        let availability = use_case.availability().await?;
        print!("{}", ConsoleFormatter::format_availability(&availability));
        return Ok(ExitCode::SUCCESS);
    }

    let input = GenerateQuizInput::new(cli.count.unwrap_or(config.quiz.default_question_count));

    // Execute with or without progress reporting
    let outcome = if cli.quiet || cli.play {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    match &outcome {
        QuizOutcome::Success(quiz) if cli.play => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            QuizPlayer::new(stdin.lock(), stdout.lock()).play(quiz)?;
        }
        QuizOutcome::Success(quiz) => {
            let format = cli
                .output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();
            println!("{}", render(quiz, format));
        }
        _ => eprintln!("{}", ConsoleFormatter::format_failure(&outcome)),
    }

    Ok(ExitCode::from(outcome.exit_code() as u8))
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|issue| !issue.is_error()) {
        warn!("{}", issue.message);
    }
    if let Some(issue) = issues.iter().find(|issue| issue.is_error()) {
        bail!("Invalid configuration: {}", issue.message);
    }

    Ok(config)
}

fn render(quiz: &Quiz, format: OutputFormat) -> String {
    match format {
        OutputFormat::Full => ConsoleFormatter::format(quiz),
        OutputFormat::Quiz => ConsoleFormatter::format_quiz_only(quiz),
        OutputFormat::Json => ConsoleFormatter::format_json(quiz),
    }
}
