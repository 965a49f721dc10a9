use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use drafter::console::TerminalConsole;
use drafter::llm::{AnthropicClient, AnthropicConfig, GeminiClient, GeminiConfig, LlmClient};
use drafter::session::{Session, SessionConfig, SessionReport};

mod cli;
mod config;

use cli::Cli;
use config::{Config, Provider};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("drafter")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("drafter.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn build_client(config: &Config) -> Result<Arc<dyn LlmClient>> {
    let llm = &config.llm;
    let timeout = Duration::from_millis(llm.timeout_ms);

    let client: Arc<dyn LlmClient> = match llm.provider {
        Provider::Gemini => Arc::new(
            GeminiClient::new(GeminiConfig {
                model: llm.model().to_string(),
                max_tokens: llm.max_tokens,
                timeout,
            })
            .context("Failed to create Gemini client")?,
        ),
        Provider::Anthropic => Arc::new(
            AnthropicClient::new(AnthropicConfig {
                model: llm.model().to_string(),
                max_tokens: llm.max_tokens,
                timeout,
            })
            .context("Failed to create Anthropic client")?,
        ),
    };

    info!("Using {:?} model {}", llm.provider, client.model());
    Ok(client)
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    let client = build_client(config)?;
    let session_config = SessionConfig {
        max_tokens: Some(config.llm.max_tokens),
        recent_results: config.session.recent_results,
        output_dir: config.session.output_dir.clone(),
    };

    let mut session = Session::new(client, TerminalConsole::stdio(), session_config);
    let report = session.run().await.context("Drafting session failed")?;

    if cli.is_verbose() {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &SessionReport) {
    println!(
        "{} {} turns, {} with tool calls",
        "Session:".yellow(),
        report.turns,
        report.action_turns
    );
    println!(
        "{} {} in / {} out ({} total)",
        "Tokens:".yellow(),
        report.usage.input_tokens,
        report.usage.output_tokens,
        report.usage.total()
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env first so RUST_LOG and API keys set there take effect
    dotenv::dotenv().ok();

    // Setup logging
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_overrides(cli.provider, cli.model.clone());

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
