/**
 * Server Lifecycle
 *
 * An explicit server object owned by the process entry point, with start
 * and stop as methods that return completion signals. This replaces the
 * usual pattern of a free-floating listener future: the caller holds a
 * [`Server`] value, can read the bound address, and can shut the server
 * down gracefully and wait for in-flight requests to drain.
 */

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// A running HTTP server
///
/// Created by [`Server::start`]; serving continues until [`Server::stop`]
/// is called or the process exits.
pub struct Server {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl Server {
    /// Bind the listen address and start serving
    ///
    /// # Arguments
    ///
    /// * `config` - Loaded configuration (port, timeouts)
    /// * `state` - Shared application state
    ///
    /// # Errors
    ///
    /// Fails if the address cannot be bound.
    pub async fn start(config: &Config, state: AppState) -> Result<Self, std::io::Error> {
        let router = create_router(state, config.request_timeout);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await?;
        // Bound port may differ from the requested one when port 0 is asked for.
        let addr = listener.local_addr()?;

        let (shutdown, rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    // Resolves when `stop` sends or the Server is dropped.
                    let _ = rx.await;
                })
                .await
        });

        tracing::info!("server listening on {}", addr);

        Ok(Self { addr, shutdown, task })
    }

    /// The address the server is actually bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop the server gracefully and wait for it to finish
    ///
    /// In-flight requests are allowed to complete before this returns.
    pub async fn stop(self) -> Result<(), std::io::Error> {
        tracing::info!("closing server");
        let _ = self.shutdown.send(());
        self.task
            .await
            .map_err(std::io::Error::other)?
    }
}
