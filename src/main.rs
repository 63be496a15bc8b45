use clap::Parser;
use user_crud::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Serve => cli::serve::run().await,
        Command::Migrate => cli::migrate::run().await,
    }
}
