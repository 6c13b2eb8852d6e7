// SPDX-License-Identifier: MIT

//! Wire format for the engine socket: one request, one response, per
//! connection. A request is the pipeline name as raw ASCII bytes, capped at
//! [`MAX_REQUEST_SIZE`]; a response is the literal bytes `True` or `False`
//! — no framing, no JSON.

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Largest request this daemon will read before giving up. Pipeline names
/// are short; this is a generous ceiling against a misbehaving client, not
/// a protocol-defined limit.
pub const MAX_REQUEST_SIZE: usize = 4096;

pub const RESPONSE_SUCCESS: &[u8] = b"True";
pub const RESPONSE_FAIL: &[u8] = b"False";

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request exceeded {max} bytes")]
    RequestTooLarge { max: usize },

    #[error("request was not valid ascii")]
    NotAscii,
}

/// Read the client's entire request (everything written before it shuts
/// down its write half, or closes the connection) and decode it as ASCII.
pub async fn read_request<R>(reader: &mut R) -> Result<String, ProtocolError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; 512];
    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.len() > MAX_REQUEST_SIZE {
            return Err(ProtocolError::RequestTooLarge {
                max: MAX_REQUEST_SIZE,
            });
        }
    }
    String::from_utf8(buf).map_err(|_| ProtocolError::NotAscii)
}

/// Write the literal `True`/`False` response for a pipeline outcome.
pub async fn write_response<W>(writer: &mut W, success: bool) -> Result<(), ProtocolError>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    let bytes = if success {
        RESPONSE_SUCCESS
    } else {
        RESPONSE_FAIL
    };
    writer.write_all(bytes).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
