/// Fantasy - command-line client for the fantasy football league
use clap::Parser;
use fantasy_cli::{commands, App, Cli, CliConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fantasy_cli=info,fantasy_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!(api_url = %config.api_url, token_file = %config.token_file.display(), "Configuration loaded");

    let app = App::new(&config, cli.yes)?;
    commands::run(&app, cli.command).await?;

    Ok(())
}
