//! Serve command: run the page server until Ctrl-C.

use anyhow::{Context, Result};
use std::future::Future;
use std::io;
use std::path::PathBuf;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use wikiseek_core::config::WikiseekConfig;
use wikiseek_core::http::{PageServer, Site};

/// Command-line overrides for the config file.
#[derive(Debug, Default)]
pub struct ServeArgs {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub page: Option<PathBuf>,
}

/// Applies overrides: command-line values win over config.
pub fn effective_config(mut cfg: WikiseekConfig, args: ServeArgs) -> WikiseekConfig {
    if let Some(port) = args.port {
        cfg.port = port;
    }
    if let Some(bind) = args.bind {
        cfg.bind = bind;
    }
    if args.page.is_some() {
        cfg.page = args.page;
    }
    cfg
}

pub async fn run_serve(cfg: WikiseekConfig, args: ServeArgs) -> Result<()> {
    let cfg = effective_config(cfg, args);
    let addr = cfg.socket_addr()?;
    let site = Site::load(cfg.page.as_deref(), cfg.redirector()?)?;
    let server = PageServer::bind(addr, site, cfg.request_timeout()).await?;

    println!("Server is running on http://{}/", server.local_addr()?);

    let (tx, rx) = watch::channel(false);
    let server_task = tokio::spawn(server.run(rx));

    supervise(server_task, tokio::signal::ctrl_c(), tx).await
}

/// Waits for either the server to end on its own (its result is returned
/// immediately) or `interrupt`, after which the server is told to stop and
/// awaited.
async fn supervise<I>(
    mut server_task: JoinHandle<Result<()>>,
    interrupt: I,
    shutdown: watch::Sender<bool>,
) -> Result<()>
where
    I: Future<Output = io::Result<()>>,
{
    tokio::select! {
        res = &mut server_task => {
            return res.context("server task panicked")?;
        }
        signal = interrupt => {
            signal.context("waiting for Ctrl-C")?;
        }
    }

    tracing::info!("interrupt received, shutting down");
    let _ = shutdown.send(true);
    server_task.await.context("server task panicked")?
}
