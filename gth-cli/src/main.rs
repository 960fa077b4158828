//! GTH CLI - Command line tool for the global temperature heatmap.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gth-cli",
    version,
    about = "Global temperature heatmap toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gth_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gth_cmd::run(cli.command).await
}
