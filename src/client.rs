//! Companion client for exercising the server with raw bytes.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const BUF_SIZE: usize = 1024;

/// Sends `payload` to `addr` and collects the response.
///
/// Reads fixed-size chunks until one comes back shorter than the buffer,
/// mirroring the server's own end-of-message heuristic. Responses whose
/// length is an exact multiple of the buffer size trip the same edge case
/// the server has.
pub async fn fetch(addr: &str, payload: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut stream = TcpStream::connect(addr).await?;
    stream.write_all(payload).await?;

    let mut received = Vec::new();
    let mut chunk = [0u8; BUF_SIZE];

    loop {
        let n = stream.read(&mut chunk).await?;
        received.extend_from_slice(&chunk[..n]);

        if n < BUF_SIZE {
            break;
        }
    }

    Ok(received)
}
