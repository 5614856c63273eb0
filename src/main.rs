use anyhow::Result;
use upkeep::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging is only wired up when the user opts in; the message
    // macros fall back to plain console output otherwise.
    if std::env::var("UPKEEP_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
            .init();
    }

    Cli::menu().await
}
