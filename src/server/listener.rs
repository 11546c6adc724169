use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the configured address and serves connections forever.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("making a server on {}", cfg.listen_addr);

    serve(listener, cfg).await
}

/// Accept loop over an already-bound listener.
///
/// Connections are handled strictly one at a time: the next accept does
/// not happen until the previous connection has closed. A failed
/// connection is logged and never stops the loop.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    loop {
        info!("waiting for a connection");
        let (socket, peer) = listener.accept().await?;
        info!("connection - {}", peer);

        let mut conn = Connection::new(socket, cfg);
        if let Err(e) = conn.run().await {
            tracing::error!("connection error from {}: {}", peer, e);
        }
    }
}
