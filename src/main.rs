use anyhow::Result;
use clap::Parser;
use spendwise::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;

    let level = if cli.verbose {
        "debug"
    } else {
        settings.log_level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(format!("spendwise={level}"))
        .with_writer(std::io::stderr)
        .init();

    cli.run(settings).await
}
