use krypton::{Config, InteractionCycle, MessariProvider, TerminalUserInterface};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interleave with the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let provider = Arc::new(MessariProvider::new(&config)?);
    let ui = Arc::new(TerminalUserInterface::new());

    if let Err(err) = InteractionCycle::new(&config, provider, ui).run().await {
        tracing::error!(error = %err, "Lookup cycle stopped");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
