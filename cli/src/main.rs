//! CLI entrypoint for quill
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quill_application::{GenerateUseCase, GeneratorState, PanelConfig};
use quill_domain::{GenerationOutput, Model, Mood, OutputFormat};
use quill_infrastructure::{ConfigLoader, FileConfig, GeminiGateway};
use quill_presentation::output::console::configure_color;
use quill_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig,
};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting quill");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let issues = config.validate();
    if !issues.is_empty() {
        let messages: Vec<String> = issues.iter().map(|issue| issue.to_string()).collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }

    let output_config = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
    };
    configure_color(output_config.color);
    let formatter = ConsoleFormatter::new(output_config.color);

    let (chat_panel, generator_panel) = panel_configs(&config, cli.model.as_deref())?;

    // === Dependency Injection ===
    // Create infrastructure adapter (Gemini Gateway)
    let gateway = Arc::new(GeminiGateway::new(config.provider.transport_settings())?);

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(gateway, chat_panel, generator_panel)
            .with_progress(repl_config.show_progress)
            .with_formatter(formatter);

        repl.run().await?;
        return Ok(());
    }

    // One-shot mode - prompt is required
    let prompt = match cli.prompt {
        Some(p) => p,
        None => bail!("Prompt is required. Use --chat for interactive mode."),
    };
    let mood = Mood::from(cli.mood);

    let use_case = GenerateUseCase::new(gateway, generator_panel);
    let mut state = GeneratorState::new();

    let progress = ProgressReporter::new();
    if repl_config.show_progress {
        progress.start(format!("Generating with {} ({})...", use_case.model(), mood));
    }
    let result = use_case.generate(&mut state, &prompt, mood).await;
    progress.stop();
    result?;

    let output = state.output();
    match output_config.format {
        OutputFormat::Text => {
            if let GenerationOutput::Error(e) = output {
                bail!("{}", e);
            }
            println!("{}", formatter.format_generation(output));
        }
        OutputFormat::Html => println!("{}", ConsoleFormatter::format_html(output)),
        OutputFormat::Json => println!(
            "{}",
            ConsoleFormatter::format_json(use_case.model(), mood, &prompt, output)
        ),
    }

    if let GenerationOutput::Error(e) = output {
        bail!("Generation failed: {}", e);
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Logs go to stderr, or to `log_file` through a non-blocking writer.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

/// Chat and generator panel configs, with `--model` overriding both.
fn panel_configs(
    config: &FileConfig,
    model_override: Option<&str>,
) -> Result<(PanelConfig, PanelConfig)> {
    let chat = config.chat.to_panel_config();
    let generator = config.generator.to_panel_config();

    let Some(name) = model_override else {
        return Ok((chat, generator));
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("--model cannot be empty");
    }
    let Ok(model) = name.parse::<Model>();
    if !Model::known_models().contains(&model) {
        warn!("Using unrecognized model name: {}", model);
    }
    Ok((chat.with_model(model.clone()), generator.with_model(model)))
}
