// SPDX-License-Identifier: MIT

//! A thin client for the engine server's socket, shared by the `rlci`
//! CLI: one request, one response, no framing beyond the connection
//! itself.

use std::path::Path;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;

use crate::protocol::RESPONSE_SUCCESS;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach the engine: {0}")]
    Connect(#[source] std::io::Error),

    #[error("io error talking to the engine: {0}")]
    Io(#[from] std::io::Error),
}

/// Send `pipeline_name` to the daemon at `socket_path` and return whether
/// it reported success. A single connection attempt, no retries, mirroring
/// the original tool's client.
pub async fn trigger(socket_path: &Path, pipeline_name: &str) -> Result<bool, ClientError> {
    let mut stream = UnixStream::connect(socket_path)
        .await
        .map_err(ClientError::Connect)?;

    stream.write_all(pipeline_name.as_bytes()).await?;
    stream.shutdown().await?;

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await?;

    Ok(response == RESPONSE_SUCCESS)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
