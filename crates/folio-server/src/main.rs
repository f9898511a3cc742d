//! folio server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), loads the
//! portfolio content, and serves the site over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use folio_core::{ContentStore, telemetry::TracingSink};
use folio_server::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Folio portfolio site server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Serve content from this JSON file instead of the embedded content.
  #[arg(long)]
  content: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FOLIO"))
    .build()
    .context("failed to read config file")?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;
  if cli.content.is_some() {
    server_cfg.content_path = cli.content;
  }

  let content = load_content(&server_cfg).await?;
  tracing::info!(cases = content.cases.len(), "content loaded");

  let state = AppState::new(content, Arc::new(TracingSink), server_cfg.clone());
  let app = folio_server::router(state).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Listening on {}", server_cfg.public_url());

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

async fn load_content(cfg: &ServerConfig) -> anyhow::Result<ContentStore> {
  match &cfg.content_path {
    Some(path) => {
      let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read content at {path:?}"))?;
      ContentStore::from_json(&raw)
        .with_context(|| format!("invalid content in {path:?}"))
    }
    None => ContentStore::embedded().context("embedded content is invalid"),
  }
}
