//! Page server: serves the search page and performs the search redirect.
//!
//! Runs on axum until the shutdown channel flips to `true` (or its sender
//! is dropped); in-flight requests finish first.

mod routes;

pub use routes::{router, SearchParams};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::redirector::Redirector;

/// Built-in search page (text field `searchInput`, button `searchBtn`).
pub const DEFAULT_PAGE: &str = include_str!("../../assets/index.html");

/// What the server hands out: the page body and the redirector behind `/search`.
#[derive(Debug, Clone)]
pub struct Site {
    page: String,
    redirector: Redirector,
}

impl Site {
    pub fn new(page: String, redirector: Redirector) -> Self {
        Self { page, redirector }
    }

    /// Reads the page from `page` once, or uses [`DEFAULT_PAGE`].
    pub fn load(page: Option<&Path>, redirector: Redirector) -> Result<Self> {
        let page = match page {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to open page {}", path.display()))?,
            None => DEFAULT_PAGE.to_string(),
        };
        Ok(Self::new(page, redirector))
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn redirector(&self) -> &Redirector {
        &self.redirector
    }
}

pub struct PageServer {
    listener: TcpListener,
    site: Arc<Site>,
    request_timeout: Duration,
}

impl PageServer {
    pub async fn bind(addr: SocketAddr, site: Site, request_timeout: Duration) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        Ok(Self {
            listener,
            site: Arc::new(site),
            request_timeout,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run(self, shutdown: watch::Receiver<bool>) -> Result<()> {
        tracing::info!(addr = %self.local_addr()?, "page server listening");
        let app = router(self.site, self.request_timeout);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await
            .context("page server failed")?;
        tracing::info!("page server stopped");
        Ok(())
    }
}

async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    // A dropped sender also ends the wait.
    let _ = shutdown.wait_for(|stop| *stop).await;
}
