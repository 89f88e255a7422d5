mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use reviewdesk_lib::Settings;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "reviewdesk")]
#[command(about = "Analyze customer reviews and browse history, metrics and usage records")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a review and print the suggested response
    Analyze(commands::analyze::AnalyzeArgs),
    /// List analyzed reviews
    History(commands::history::HistoryArgs),
    /// Show one analyzed review
    Show(commands::show::ShowArgs),
    /// Show the metrics summary and per-analysis metrics
    Metrics(commands::metrics::MetricsArgs),
    /// List usage records of suggested responses
    Usages(commands::usages::UsagesArgs),
    /// Record an edited response as sent
    Send(commands::send::SendArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reviewdesk=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let settings = Settings::from_env();
    tracing::debug!("Using API at {}", settings.api_base_url);
    let client = settings.build_client()?;

    match &cli.command {
        Commands::Analyze(args) => commands::analyze::run(args, &client, &format).await?,
        Commands::History(args) => commands::history::run(args, &client, &format).await?,
        Commands::Show(args) => commands::show::run(args, &client, &format).await?,
        Commands::Metrics(args) => commands::metrics::run(args, &client, &format).await?,
        Commands::Usages(args) => commands::usages::run(args, &client, &format).await?,
        Commands::Send(args) => commands::send::run(args, &client).await?,
    }

    Ok(())
}
