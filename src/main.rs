use anyhow::Result;
use clap::Parser;
use skycast::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    // Silent unless RUST_LOG is set; stderr keeps the alternate screen clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    skycast::run(cli).await
}
