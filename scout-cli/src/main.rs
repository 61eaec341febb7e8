use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use scout_core::perplexity::{ChatRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use scout_core::{Config, SonarClient, campaigns, runner};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Perplexity research campaign runner", long_about = None)]
struct Cli {
    /// Path to the OpenClaw config file (default: ~/.openclaw/openclaw.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a built-in research campaign
    Run {
        /// Campaign name (see `scout list`)
        campaign: String,
    },

    /// List built-in campaigns
    List,

    /// Send a single ad-hoc research query
    Ask {
        /// Query text
        query: String,

        /// System prompt framing the answer
        #[arg(long)]
        system: Option<String>,

        /// Maximum tokens in the response
        #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
        max_tokens: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { campaign } => {
            run_command(cli.config, campaign).await?;
        }
        Commands::List => {
            list_command();
        }
        Commands::Ask {
            query,
            system,
            max_tokens,
        } => {
            ask_command(cli.config, query, system, max_tokens).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    }
}

async fn run_command(config_path: Option<PathBuf>, name: String) -> Result<()> {
    let Some(campaign) = campaigns::find(&name) else {
        let known: Vec<_> = campaigns::all().iter().map(|c| c.name).collect();
        bail!("Unknown campaign '{}' (available: {})", name, known.join(", "));
    };

    let config = load_config(config_path)?;
    let client = SonarClient::new(config.api_key);

    info!(
        "Running campaign '{}' ({} queries)",
        campaign.name,
        campaign.queries.len()
    );

    let report = runner::run_campaign(&client, campaign).await;

    info!(
        "Campaign '{}' finished: {} completed, {} failed",
        campaign.name, report.completed, report.failed
    );

    Ok(())
}

fn list_command() {
    println!("Built-in campaigns:\n");
    for campaign in campaigns::all() {
        println!(
            "  {} - {} ({} queries)",
            campaign.name,
            campaign.description,
            campaign.queries.len()
        );
    }
}

async fn ask_command(
    config_path: Option<PathBuf>,
    query: String,
    system: Option<String>,
    max_tokens: u32,
) -> Result<()> {
    let config = load_config(config_path)?;
    let client = SonarClient::new(config.api_key);

    let system_prompt =
        system.unwrap_or_else(|| campaigns::GEO.system_prompt.to_string());

    let request = ChatRequest::new(DEFAULT_MODEL, query)
        .system(system_prompt)
        .max_tokens(max_tokens);

    let response = client.chat_completion(&request).await?;
    println!("{}", response.content_or_err()?);

    Ok(())
}
