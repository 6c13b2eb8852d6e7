// SPDX-License-Identifier: MIT

//! The engine server: accepts one connection at a time, reads a pipeline
//! name, triggers it, and replies with `True`/`False`. Each connection
//! runs in its own task so a slow or misbehaving client cannot block the
//! next.

use crate::protocol::{self, ProtocolError};
use rlci_core::{Event, EventSink};
use rlci_engine::Engine;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::{UnixListener, UnixStream};
use tracing::{debug, error, info, warn};

/// Accepts connections on a bound [`UnixListener`] and dispatches each to
/// the shared [`Engine`].
pub struct Listener {
    socket: UnixListener,
    socket_path: PathBuf,
    sink: Arc<dyn EventSink>,
    engine: Arc<Engine>,
}

impl Listener {
    pub fn new(
        socket: UnixListener,
        socket_path: impl Into<PathBuf>,
        sink: Arc<dyn EventSink>,
        engine: Arc<Engine>,
    ) -> Self {
        Self {
            socket,
            socket_path: socket_path.into(),
            sink,
            engine,
        }
    }

    /// Accept connections forever. Each connection is handled on its own
    /// spawned task so a panic or hang in one request cannot take down the
    /// accept loop; a failure to accept a connection is logged and the
    /// loop keeps listening rather than exiting.
    pub async fn run(self) {
        loop {
            match self.socket.accept().await {
                Ok((stream, _addr)) => {
                    let engine = Arc::clone(&self.engine);
                    let sink = Arc::clone(&self.sink);
                    let socket_path = self.socket_path.clone();
                    tokio::spawn(async move {
                        if let Err(error) =
                            handle_connection(stream, &engine, &sink, &socket_path).await
                        {
                            warn!(%error, "connection error");
                        }
                    });
                }
                Err(error) => {
                    error!(%error, "accept error");
                    continue;
                }
            }
        }
    }
}

/// Reply `False` for a request that could not be decoded (too large, not
/// valid UTF-8), rather than just closing the connection on it. A failure
/// to accept is logged and the listener continues; a single crashed
/// handler must never take down the accept loop.
async fn handle_connection(
    stream: UnixStream,
    engine: &Engine,
    sink: &Arc<dyn EventSink>,
    socket_path: &Path,
) -> Result<(), ProtocolError> {
    let (mut reader, mut writer) = stream.into_split();

    let pipeline_name = match protocol::read_request(&mut reader).await {
        Ok(name) => name,
        Err(error) => {
            warn!(%error, "request could not be decoded");
            sink.emit(Event::ServerResponse(protocol::RESPONSE_FAIL.to_vec()));
            return protocol::write_response(&mut writer, false).await;
        }
    };

    sink.emit(Event::ServerRequest {
        socket_path: socket_path.to_path_buf(),
        payload: pipeline_name.clone().into_bytes(),
    });
    debug!(pipeline = %pipeline_name, "received trigger request");

    let success = engine.trigger(&pipeline_name).await;
    info!(pipeline = %pipeline_name, success, "pipeline triggered");

    let response_bytes = if success {
        protocol::RESPONSE_SUCCESS
    } else {
        protocol::RESPONSE_FAIL
    };
    sink.emit(Event::ServerResponse(response_bytes.to_vec()));

    protocol::write_response(&mut writer, success).await
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
