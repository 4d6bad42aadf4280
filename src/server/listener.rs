use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::files::SiteRoot;
use crate::http::connection::Connection;

/// The accept loop and its shared serving context.
pub struct Listener {
    listener: TcpListener,
    site: Arc<SiteRoot>,
    /// Present when a connection ceiling is configured; permits are
    /// acquired before accepting so a full pool backpressures the accept
    /// loop instead of spawning without bound.
    permits: Option<Arc<Semaphore>>,
}

/// Binds and runs a server from configuration.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    Listener::bind(cfg).await?.run().await
}

impl Listener {
    /// Binds the listening socket and fixes the serving context.
    ///
    /// A root that cannot be canonicalized or a port that cannot be bound
    /// is fatal; nothing can be served without them.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let root = tokio::fs::canonicalize(&cfg.root)
            .await
            .with_context(|| format!("cannot resolve web root {}", cfg.root.display()))?;

        let listener = TcpListener::bind(&cfg.listen_addr)
            .await
            .with_context(|| format!("cannot bind {}", cfg.listen_addr))?;
        info!("Listening on {}, serving {}", cfg.listen_addr, root.display());

        Ok(Self {
            listener,
            site: Arc::new(SiteRoot::new(root, cfg.index.clone())),
            permits: cfg
                .max_connections
                .map(|n| Arc::new(Semaphore::new(n.max(1)))),
        })
    }

    /// The address actually bound, useful when the port was 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts forever, dispatching one task per connection.
    ///
    /// Transient accept failures are logged and the loop continues; only
    /// the handlers ever see per-connection errors.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let permit = match &self.permits {
                Some(semaphore) => Some(
                    semaphore
                        .clone()
                        .acquire_owned()
                        .await
                        .context("connection semaphore closed")?,
                ),
                None => None,
            };

            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!("accept failed: {}", e);
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let site = self.site.clone();
            tokio::spawn(async move {
                let _permit = permit;
                let mut conn = Connection::new(socket, site);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
