mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "priorforms")]
#[command(about = "Look up and download prior-year IRS form revisions")]
struct Cli {
    /// Output format: json or table
    #[arg(long, default_value = "json", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up earliest and latest revision years for form identifiers
    Lookup(commands::lookup::LookupArgs),
    /// Download per-year PDFs for one form
    Download(commands::download::DownloadArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("priorforms_lib=info".parse().unwrap())
                .add_directive("priorforms_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "table" => OutputFormat::Table,
        _ => OutputFormat::Json,
    };

    match &cli.command {
        Commands::Lookup(args) => commands::lookup::run(args, &format).await?,
        Commands::Download(args) => commands::download::run(args, &format).await?,
    }

    Ok(())
}
