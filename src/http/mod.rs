//! HTTP protocol implementation.
//!
//! This module implements a deliberately small HTTP/1.1 server: one request
//! per connection, GET only, no request headers or bodies.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses the request line out of raw request text
//! - **`request`**: HTTP request representation
//! - **`resolver`**: Maps a normalized URI to content under the webroot
//! - **`response`**: Serializes status line, content type and body to bytes
//!
//! # Connection State Machine
//!
//! Each client connection goes through a linear state machine; there is no
//! branch back to `Reading` because connections are never kept alive:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate chunks until a short read
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Parse the request line, resolve the URI
//!        └──────┬───────────┘
//!               │ Response bytes ready
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Write the full response to the client
//!        └──────┬───────────┘
//!               │ Response sent (or any failure)
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Socket shut down unconditionally
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use webroot::config::Config;
//! use webroot::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     let listener = TcpListener::bind(&cfg.listen_addr).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, &cfg);
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
