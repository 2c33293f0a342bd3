//! `portal`: terminal client for the Strahovochka insurance portal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use portal_application::{Router, SessionManager};
use portal_core::api::PortalApi;
use portal_core::session::LocalStore;
use portal_infrastructure::{ConfigService, FileLocalStore, MemoryLocalStore, PortalPaths};
use portal_interaction::HttpPortalClient;

mod commands;
mod helper;
mod logging;
mod render;
mod repl;

#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(about = "Strahovochka - insurance application portal client", long_about = None)]
struct Args {
    /// Base URL of the portal API (overrides PORTAL_API_URL and config.toml)
    #[arg(long)]
    api_url: Option<String>,

    /// Local storage file for the session
    #[arg(long, conflicts_with = "ephemeral")]
    storage: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Raise log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn local_store(args: &Args) -> Result<Arc<dyn LocalStore>> {
    if args.ephemeral {
        return Ok(Arc::new(MemoryLocalStore::new()));
    }
    let store = match &args.storage {
        Some(path) => FileLocalStore::with_path(path.clone()),
        None => FileLocalStore::new()?,
    };
    Ok(Arc::new(store))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigService::new().resolve(args.api_url.as_deref());
    let _log_guard = logging::init_logging(&PortalPaths::logs_dir()?, &config.log_level, args.verbose)?;

    let client = HttpPortalClient::new(config.api_url.clone());
    tracing::info!(
        api_url = %client.base_url(),
        ephemeral = args.ephemeral,
        "starting portal client"
    );
    let api: Arc<dyn PortalApi> = Arc::new(client);
    let session = Arc::new(SessionManager::new(api.clone(), local_store(&args)?));
    let router = Router::new(api, session, config.notification_ttl());

    repl::Repl::new(router)?.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["portal", "--api-url", "http://127.0.0.1:8000", "-vv"]);
        assert_eq!(args.api_url.as_deref(), Some("http://127.0.0.1:8000"));
        assert_eq!(args.verbose, 2);
        assert!(!args.ephemeral);
    }

    #[test]
    fn test_storage_conflicts_with_ephemeral() {
        let result = Args::try_parse_from(["portal", "--ephemeral", "--storage", "/tmp/s.json"]);
        assert!(result.is_err());
    }
}
