//! Main entry point for the launcher binary
//!
//! Wires the production collaborators into the orchestrator, prints the
//! immediate (cache-only) presentation, then the fully resolved one.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use launcher::{
    services::{
        FileDecisionStore, HttpBackendResolver, HttpRemoteConfigSource, LoggingCookiePersistence, PushTokenStore,
        EnvDeviceCollector, DEFAULT_DATABASE_URL,
    },
    LaunchOrchestrator, Presentation,
};
use shared::{launch_debug, logging, parse_url, Component};

/// Fallback page shown in place of the stub surface
const DEFAULT_FALLBACK_URL: &str = "https://emeraldchargex.world/assets";

/// Decide what the client shows on launch
#[derive(Parser)]
#[command(name = "launcher")]
#[command(about = "Resolves the launch destination: cached, freshly resolved, or stub")]
pub struct Args {
    /// Decision store file
    #[arg(long, default_value = "./launch-decision.json")]
    pub store: PathBuf,

    /// Realtime database holding the backend host/path pair
    #[arg(long, default_value = DEFAULT_DATABASE_URL)]
    pub remote_config_url: String,

    /// Page shown when the outcome is the stub
    #[arg(long, default_value = DEFAULT_FALLBACK_URL)]
    pub fallback_url: String,

    /// Backend request timeout in seconds (no timeout if unset)
    #[arg(long)]
    pub http_timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Ignore the persisted decision and resolve again
    #[arg(long)]
    pub force_revalidate: bool,

    /// Only print the cache-only outcome
    #[arg(long)]
    pub peek_only: bool,

    /// Clear the persisted decision and exit
    #[arg(long)]
    pub reset: bool,

    /// Push token delivered by the registration callback
    #[arg(long)]
    pub push_token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(Component::Launcher, "launch decision pipeline");

    let fallback_url = parse_url(&args.fallback_url)?;
    let database_url = parse_url(&args.remote_config_url)?;

    let push_tokens = Arc::new(PushTokenStore::new());
    if let Some(token) = args.push_token.clone() {
        push_tokens.update(Some(token));
    }

    let backend = match args.http_timeout_secs {
        Some(secs) => HttpBackendResolver::with_timeout(Duration::from_secs(secs))
            .context("building backend HTTP client")?,
        None => HttpBackendResolver::new(),
    };

    let store = Arc::new(FileDecisionStore::new(&args.store));
    launch_debug!(Component::Store, "Decision store: {}", store.path().display());

    let orchestrator = LaunchOrchestrator::new(
        store,
        EnvDeviceCollector::from_env(push_tokens),
        HttpRemoteConfigSource::new(database_url),
        backend,
        LoggingCookiePersistence::new(),
    )
    .await;

    if args.reset {
        orchestrator.reset_decision().await?;
        logging::log_success(Component::Launcher, "Decision reset");
        return Ok(());
    }

    let initial = Presentation::from_outcome(&orchestrator.peek_cached_outcome(), &fallback_url);
    println!("{}", serde_json::to_string(&initial)?);
    if args.peek_only {
        return Ok(());
    }

    let outcome = if args.force_revalidate {
        orchestrator.retry().await
    } else {
        orchestrator.resolve().await
    };

    let resolved = Presentation::from_outcome(&outcome, &fallback_url);
    println!("{}", serde_json::to_string(&resolved)?);

    Ok(())
}
