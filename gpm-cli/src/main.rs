//! GPM CLI - Command line tool for the Graubünden photo map dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gpm-cli",
    version,
    about = "Graubünden photo map toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gpm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("gpm-cli starting");
    gpm_cmd::run(cli.command).await
}
