use std::path::{Path, PathBuf};

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::Config;
use crate::http::parser::parse_request_line;
use crate::http::resolver;
use crate::http::response;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    read_buf_size: usize,
    webroot: PathBuf,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Dispatching(String),
    Responding(Vec<u8>),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, cfg: &Config) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(cfg.read_buf_size),
            read_buf_size: cfg.read_buf_size,
            webroot: cfg.webroot.clone(),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through its states, exactly once.
    ///
    /// The machine is linear: Reading, Dispatching, Responding, Closed.
    /// Protocol-level failures (bad request line, unknown path) become
    /// error responses and still travel the full path; only socket I/O
    /// errors surface to the caller. Either way the socket is closed when
    /// the connection is dropped.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let raw = self.read_request().await?;
                    self.state = ConnectionState::Dispatching(raw);
                }

                ConnectionState::Dispatching(raw) => {
                    let bytes = Self::dispatch(raw, &self.webroot).await;
                    self.state = ConnectionState::Responding(bytes);
                }

                ConnectionState::Responding(bytes) => {
                    // The whole response goes out in one write.
                    self.stream.write_all(&bytes[..]).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    let _ = self.stream.shutdown().await;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Accumulates request bytes until a read comes back shorter than the
    /// configured chunk size.
    ///
    /// The short read is the only end-of-request signal; there is no
    /// Content-Length or terminator check. A request whose length lands on
    /// an exact multiple of the chunk size keeps this state waiting for
    /// input that never comes. Known limitation, kept because framing the
    /// request differently would change observable behavior.
    async fn read_request(&mut self) -> anyhow::Result<String> {
        let mut chunk = vec![0u8; self.read_buf_size];

        loop {
            let n = self.stream.read(&mut chunk).await?;
            self.buffer.extend_from_slice(&chunk[..n]);

            // Also covers n == 0, a peer that closed its write side.
            if n < self.read_buf_size {
                break;
            }
        }

        Ok(String::from_utf8_lossy(&self.buffer).into_owned())
    }

    /// Turns accumulated request text into response bytes.
    ///
    /// Both parser failures answer 405: a request line that does not
    /// unpack has always been treated the same as a disallowed method.
    async fn dispatch(raw: &str, webroot: &Path) -> Vec<u8> {
        let request = match parse_request_line(raw) {
            Ok(req) => req,
            Err(err) => {
                tracing::warn!(%err, "rejecting request");
                return response::method_not_allowed();
            }
        };

        match resolver::resolve(&request.uri, webroot).await {
            Ok(resource) => {
                tracing::info!(uri = %request.uri, status = "200 OK", "serving");
                response::ok(&resource.body, &resource.content_type)
            }
            Err(err) => {
                tracing::info!(uri = %request.uri, status = "404", "not found");
                response::not_found(&err.to_string())
            }
        }
    }
}
