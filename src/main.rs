mod api;
mod commands;
mod gateway;

use clap::{Parser, Subcommand};
use pitwall_channels::discord::DiscordChannel;
use pitwall_core::{
    config,
    traits::{Channel, JokeSource, SeriesSource},
};
use pitwall_providers::{jokes::JokeClient, visualizer::VisualizerClient};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "pitwall",
    version,
    about = "Pitwall — Discord bot for iRacing league visualizations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Check config, channel state, and series catalog reachability.
    Status,
    /// Fetch and print one random dutch joke.
    Joke,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                )
            }),
        )
        .init();

    match cli.command {
        Commands::Start => {
            let cfg = config::load(&cli.config)?;

            // Build channels.
            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();

            if let Some(ref discord) = cfg.channel.discord {
                if discord.enabled {
                    let mut discord = discord.clone();
                    if discord.bot_token.is_empty() {
                        discord.bot_token = std::env::var("BOT_TOKEN").unwrap_or_default();
                    }
                    if discord.bot_token.is_empty() {
                        anyhow::bail!(
                            "Discord is enabled but bot_token is empty. \
                             Set it in config.toml or the BOT_TOKEN env var."
                        );
                    }
                    let channel = DiscordChannel::new(discord);
                    channels.insert("discord".to_string(), Arc::new(channel));
                }
            }

            if channels.is_empty() {
                anyhow::bail!("No channels enabled. Enable at least one channel in config.toml.");
            }

            // Build data sources.
            let series: Arc<dyn SeriesSource> =
                Arc::new(VisualizerClient::from_config(&cfg.visualizer));
            let jokes: Arc<dyn JokeSource> = Arc::new(JokeClient::from_config(&cfg.jokes));

            println!("Pitwall — starting bot...");
            let gw = Arc::new(gateway::Gateway::new(
                channels,
                series,
                jokes,
                cfg.visualizer.base_url.clone(),
                cfg.api.clone(),
            ));
            gw.run().await?;
        }
        Commands::Status => {
            let cfg = config::load(&cli.config)?;
            println!("Pitwall — Status Check\n");
            println!("Config: {}", cli.config);

            match &cfg.channel.discord {
                Some(discord) => {
                    println!(
                        "  discord: {}",
                        if discord.enabled
                            && (!discord.bot_token.is_empty() || std::env::var("BOT_TOKEN").is_ok())
                        {
                            "configured"
                        } else if discord.enabled {
                            "enabled but missing bot_token"
                        } else {
                            "disabled"
                        }
                    );
                }
                None => println!("  discord: not configured"),
            }
            println!();

            let visualizer = VisualizerClient::from_config(&cfg.visualizer);
            match visualizer.series().await {
                Ok(catalog) => {
                    println!("Series catalog ({} entries):", catalog.len());
                    for series in catalog {
                        println!(
                            "  {}: {} (week {})",
                            series.name, series.current_season, series.current_week
                        );
                    }
                }
                Err(e) => println!("Series catalog unreachable: {e}"),
            }
        }
        Commands::Joke => {
            let cfg = config::load(&cli.config)?;
            let jokes = JokeClient::from_config(&cfg.jokes);
            let joke = jokes.joke().await?;
            println!("{joke}");
        }
    }

    Ok(())
}
