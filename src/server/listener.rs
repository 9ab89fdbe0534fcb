use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tokio_rustls::TlsAcceptor;
use tracing::{Instrument, debug, error, info, info_span};

use crate::config::Config;
use crate::gemini::connection::Connection;
use crate::gemini::dispatcher::Dispatcher;
use crate::server::tls;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Source of incoming TCP connections.
pub trait Accept: Send + Sync + 'static {
    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let acceptor = tls::load_acceptor(&cfg)?;
    let listener = TcpListener::bind(cfg.listen_addr()).await?;
    info!(
        root = %cfg.document_root.display(),
        "Listening on {}",
        cfg.listen_addr()
    );

    serve(listener, acceptor, cfg).await
}

/// Accepts connections forever. Accept errors are logged and retried.
///
/// At most `max_connections` connections are served at once; beyond that,
/// accepting pauses until one finishes.
pub async fn serve<L: Accept>(
    listener: L,
    acceptor: TlsAcceptor,
    cfg: Arc<Config>,
) -> anyhow::Result<()> {
    let dispatcher = Arc::new(Dispatcher::new(cfg.clone()));
    let limit = Arc::new(Semaphore::new(cfg.max_connections));
    let handshake_timeout = cfg.read_timeout();

    loop {
        let permit = limit.clone().acquire_owned().await?;
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                // Usually transient (EMFILE, ECONNABORTED); back off and keep serving.
                error!("Failed to accept connection: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        let acceptor = acceptor.clone();
        let dispatcher = dispatcher.clone();
        let span = info_span!("conn", %peer);

        tokio::spawn(
            async move {
                let _permit = permit;

                let stream =
                    match tokio::time::timeout(handshake_timeout, acceptor.accept(socket)).await {
                        Ok(Ok(stream)) => stream,
                        Ok(Err(e)) => {
                            error!("TLS handshake failed: {}", e);
                            return;
                        }
                        Err(_) => {
                            error!("TLS handshake timed out");
                            return;
                        }
                    };

                let mut conn = Connection::new(stream, dispatcher);
                if let Err(e) = conn.run().await {
                    error!("Connection error: {}", e);
                }
            }
            .instrument(span),
        );
    }
}
