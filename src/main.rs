//! Pokedex - An interactive PokeAPI explorer
//!
//! Runs one REPL session on stdin/stdout until `exit` or end of input.

use anyhow::Context;
use tokio::io::{stdin, stdout, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{CommandRegistry, Config, PokeApiClient, Repl, Session};

/// Main entry point for the Pokedex explorer.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, warnings only by default)
/// 2. Build the API client and its cache; the cache starts its reaper
/// 3. Build the command registry and session
/// 4. Run the REPL until `exit` or end of input
/// 5. Cancel the reaper and exit with status 0
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to warnings only so the console stays readable,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::default();
    info!(
        base_url = %config.base_url,
        cache_ttl_ms = config.cache_ttl.as_millis() as u64,
        "starting Pokedex"
    );

    let shutdown = CancellationToken::new();
    let client = PokeApiClient::with_cancellation(&config, &shutdown)
        .context("failed to build the PokeAPI client")?;
    let session = Session::new(client);
    let mut repl = Repl::new(CommandRegistry::builtin(), session, config.prompt.clone());

    let result = repl.run(BufReader::new(stdin()), &mut stdout()).await;

    shutdown.cancel();
    info!("Pokedex closed");

    result.context("console failure")
}
