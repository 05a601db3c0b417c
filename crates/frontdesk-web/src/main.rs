//! frontdesk server binary.
//!
//! Reads `frontdesk.toml` (or the path given with `--config`), layers
//! `FRONTDESK__*` environment variables on top, opens the configured record
//! store and serves the web UI over HTTP.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::Context as _;
use clap::Parser;
use frontdesk_core::store::RecordStore;
use frontdesk_remote::{RemoteConfig, RemoteStore};
use frontdesk_store_sqlite::SqliteStore;
use frontdesk_web::{AppState, ServerConfig, StoreConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Frontdesk check-in server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "frontdesk.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // e.g. FRONTDESK__STORE__API_KEY overrides [store] api_key.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FRONTDESK").separator("__"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  match server_cfg.store {
    StoreConfig::Remote { url, api_key, timeout_secs } => {
      tracing::info!(%url, "using remote record store");
      let store = RemoteStore::new(RemoteConfig {
        base_url: url,
        api_key,
        timeout: Duration::from_secs(timeout_secs),
      })
      .context("failed to build HTTP client")?;
      serve(store, &address).await
    }
    StoreConfig::Sqlite { path } => {
      let path = expand_tilde(&path);
      tracing::info!(path = %path.display(), "using SQLite record store");
      let store = SqliteStore::open(&path)
        .await
        .with_context(|| format!("failed to open store at {path:?}"))?;
      serve(store, &address).await
    }
  }
}

async fn serve<S>(store: S, address: &str) -> anyhow::Result<()>
where
  S: RecordStore + Clone + 'static,
{
  let app = frontdesk_web::router(AppState::new(store));

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/") {
    if let Some(home) = std::env::var_os("HOME") {
      return PathBuf::from(home).join(rest);
    }
  }
  path.to_path_buf()
}
