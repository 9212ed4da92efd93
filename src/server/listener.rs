use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::{Config, ServerConfig};
use crate::http::connection::Connection;
use crate::server::context::ServerContext;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server)?;
    info!(
        "Listening on {} (doc root: {})",
        listener.local_addr()?,
        cfg.static_files.doc_root.as_deref().unwrap_or("<none>")
    );

    serve(listener, Arc::new(ServerContext::from_config(cfg))).await
}

/// Binds the listening socket with the configured backlog.
pub fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = cfg
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address {}", cfg.listen_addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {addr}"))?;

    Ok(socket.listen(cfg.backlog)?)
}

/// Accepts connections forever, one task per connection.
pub async fn serve(listener: TcpListener, ctx: Arc<ServerContext>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let conn = Connection::with_read_chunk_size(socket, ctx.new_session(), ctx.read_chunk_size());
        tokio::spawn(async move {
            match conn.run().await {
                Ok(reason) => tracing::debug!(%peer, ?reason, "Connection closed"),
                Err(e) => tracing::error!("Connection error from {}: {}", peer, e),
            }
        });
    }
}
