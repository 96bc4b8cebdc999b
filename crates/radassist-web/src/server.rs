//! Listener binding and serving.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use radassist_core::RadassistConfig;
use tokio::net::TcpListener;

use crate::routes::{router, AppState};
use crate::{Error, Result};

/// radassist web server: a bound listener plus the application router.
pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    /// Bind the configured address and build the router.
    pub async fn bind(config: &RadassistConfig) -> Result<Self> {
        let addr = config.server.address();
        let listener = TcpListener::bind(addr.as_str())
            .await
            .map_err(|source| Error::Bind {
                addr: addr.clone(),
                source,
            })?;
        let state = Arc::new(AppState::new(config.page.clone()));
        Ok(Self {
            listener,
            app: router(state),
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(Error::Serve)
    }

    /// Serve until Ctrl-C.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(ctrl_c()).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = self.listener.local_addr() {
            tracing::info!("radassist listening on http://{addr}");
        }
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(signal)
            .await
            .map_err(Error::Serve)?;
        tracing::info!("radassist stopped");
        Ok(())
    }
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(e) => {
            tracing::error!("failed to install Ctrl-C handler: {e}");
            // Without a handler, keep serving until the process is killed.
            std::future::pending::<()>().await;
        }
    }
}
