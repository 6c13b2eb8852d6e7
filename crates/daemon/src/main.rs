// SPDX-License-Identifier: MIT

//! `rlci-engine`: the daemon binary. Owns the pipeline store and engine,
//! and serves trigger requests over a Unix socket until killed.

use std::sync::Arc;

use rlci_adapters::TokioProcessRunner;
use rlci_core::{EventSink, NoopSink};
use rlci_daemon::{Config, Listener};
use rlci_engine::{Engine, HtmlReportWriter};
use rlci_storage::PipelineStore;
use tokio::net::UnixListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();

    if config.socket_path.exists() {
        warn!(path = %config.socket_path.display(), "removing stale socket");
        std::fs::remove_file(&config.socket_path)?;
    }

    let sink: Arc<dyn EventSink> = Arc::new(NoopSink);
    let store = Arc::new(PipelineStore::new());
    let process_runner = Arc::new(TokioProcessRunner::new(Arc::clone(&sink)));
    let report_writer = Arc::new(HtmlReportWriter::new(
        config.report_path.clone(),
        Arc::clone(&sink),
    ));
    let engine = Arc::new(Engine::new(
        store,
        process_runner,
        Arc::clone(&sink),
        report_writer,
    ));

    let socket = UnixListener::bind(&config.socket_path)?;
    info!(path = %config.socket_path.display(), "listening");

    let listener = Listener::new(socket, config.socket_path.clone(), sink, engine);
    listener.run().await;

    Ok(())
}
