mod search;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dinerec_core::{BudgetBand, Cuisine, Occasion, Tier};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dinerec")]
#[command(about = "Restaurant recommendations grounded in directory search results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for restaurants and print recommendations
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Area or station name (e.g., Shinjuku)
    #[arg(long)]
    location: String,
    /// Cuisine (e.g., ramen, sushi, italian); omit for no preference
    #[arg(long, default_value = "unspecified")]
    cuisine: Cuisine,
    /// Budget per person: under-1000, 1000-3000, 3000-5000, 5000-10000, over-10000
    #[arg(long, default_value = "1000-3000")]
    budget: BudgetBand,
    /// Number of people (1-20)
    #[arg(long, default_value_t = 2)]
    party_size: u32,
    /// Occasion (e.g., lunch, date, business); omit for no preference
    #[arg(long, default_value = "unspecified")]
    occasion: Occasion,
    /// Free-text extra requests
    #[arg(long)]
    extra: Option<String>,
    /// Recommendation tier: basic, conditional or personalized
    #[arg(long, default_value = "conditional")]
    tier: Tier,
    /// YAML file with personal preferences for the personalized tier
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
    /// Follow-up question about the results (repeatable)
    #[arg(long = "ask")]
    questions: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = dinerec_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Search(args) => search::run_search(&config, args).await,
    }
}

#[cfg(test)]
mod tests;
