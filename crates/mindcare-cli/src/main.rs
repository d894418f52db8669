use clap::Parser;
use eyre::Result;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    cli::Cli::parse().run().await
}
