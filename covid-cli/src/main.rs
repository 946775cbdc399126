//! COVID CLI - Command line client for the COVID-19 case API.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "covid-cli",
    version,
    about = "Query and manage COVID-19 case data"
)]
struct Cli {
    /// Base URL of the case API
    #[arg(long, global = true, default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[command(subcommand)]
    command: covid_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Using case API at {}", cli.base_url);
    covid_cmd::run(cli.command, &cli.base_url).await
}
