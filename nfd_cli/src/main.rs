mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "nfd")]
#[command(about = "Query the NFDomains registry API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Network to query: mainnet, testnet, betanet [env: NFD_NETWORK]
    #[arg(long, global = true)]
    network: Option<String>,

    /// API root URL, overriding --network [env: NFD_BASE_URL]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the API server version
    Version,
    /// Show registry-wide totals
    Totals,
    /// Fetch a single name
    Name(commands::name::NameArgs),
    /// Show recent changes to names
    Activity(commands::activity::ActivityArgs),
    /// Find the names linked to addresses
    Address(commands::address::AddressArgs),
    /// Query marketplace history
    Analytics(Box<commands::analytics::AnalyticsArgs>),
    /// List open auctions
    Auction(commands::auction::AuctionArgs),
    /// Browse names by filter
    Browse(Box<commands::browse::BrowseArgs>),
    /// Check whether an application ID is a genuine NFD
    IsValid(commands::is_valid::IsValidArgs),
    /// Show the signature address for a name
    NameSig(commands::name::NameSigArgs),
    /// Show the reverse signature address for an address
    RevSig(commands::address::RevSigArgs),
    /// Suggest names similar to the given one
    Suggest(commands::suggest::SuggestArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("nfd=info".parse().context("invalid log directive")?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let settings = Settings::resolve(
        cli.network.as_deref(),
        cli.base_url.as_deref(),
        cli.timeout_secs,
        |key| std::env::var(key).ok(),
    )?;
    tracing::debug!(
        "Using {}",
        settings
            .base_url
            .as_deref()
            .unwrap_or(settings.network.base_url())
    );
    let client = settings.client()?;

    match &cli.command {
        Commands::Version => commands::info::run_version(&client, &format).await?,
        Commands::Totals => commands::info::run_totals(&client, &format).await?,
        Commands::Name(args) => commands::name::run(args, &client, &format).await?,
        Commands::Activity(args) => commands::activity::run(args, &client, &format).await?,
        Commands::Address(args) => commands::address::run(args, &client, &format).await?,
        Commands::Analytics(args) => {
            commands::analytics::run(args.as_ref(), &client, &format).await?
        }
        Commands::Auction(args) => commands::auction::run(args, &client, &format).await?,
        Commands::Browse(args) => commands::browse::run(args.as_ref(), &client, &format).await?,
        Commands::IsValid(args) => commands::is_valid::run(args, &client, &format).await?,
        Commands::NameSig(args) => commands::name::run_sig(args, &client, &format).await?,
        Commands::RevSig(args) => commands::address::run_rev_sig(args, &client, &format).await?,
        Commands::Suggest(args) => commands::suggest::run(args, &client, &format).await?,
    }

    Ok(())
}
