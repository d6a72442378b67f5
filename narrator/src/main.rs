use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::path::{Path, PathBuf};

use narrator::core::config::{load_config, STARTER_CONFIG};
use narrator::core::model::{EnhanceRequest, StoryRequest, TitleRequest};
use narrator::core::narrator::Narrator;

#[derive(Parser)]
#[command(name = "narrator", about = "Turn trip facts into travel stories")]
struct Cli {
    /// Path to the TOML config
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a story from a story request JSON file
    Story { request: PathBuf },
    /// Weave photo details into an existing story
    Enhance { request: PathBuf },
    /// Derive a title for an existing story
    Title { request: PathBuf },
}

fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let request = serde_json::from_str(&content)
        .with_context(|| format!("Invalid request JSON in {}", path.display()))?;
    Ok(request)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Create a starter config if not exists for first run ease
    if !Path::new(&cli.config).exists() {
        log::info!("No config at {}, writing a starter one", cli.config);
        std::fs::write(&cli.config, STARTER_CONFIG)?;
    }

    let config = load_config(&cli.config)?;
    let narrator = Narrator::from_config(&config)?;

    let output = match cli.command {
        Command::Story { request } => {
            let request: StoryRequest = read_request(&request)?;
            let story = narrator.generate_story(&request).await?;
            serde_json::to_value(&story)?
        }
        Command::Enhance { request } => {
            let request: EnhanceRequest = read_request(&request)?;
            let content = narrator.enhance_story(&request.body, &request.photos).await;
            json!({ "content": content })
        }
        Command::Title { request } => {
            let request: TitleRequest = read_request(&request)?;
            let title = narrator.generate_title(&request.body, request.fallback_title.as_deref()).await;
            json!({ "title": title })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
