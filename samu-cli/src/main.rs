//! SAMU CLI - territory risk statistics from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "samu-cli",
    version,
    about = "SAMU territory risk statistics toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: samu_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    samu_cmd::run(cli.command).await
}
