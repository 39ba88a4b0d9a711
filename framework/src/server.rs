use crate::config::ServerConfig;
use crate::http::{HttpResponse, Request};
use crate::routing::Router;
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Body;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;

/// HTTP/1 listener dispatching every request through one [`Router`]
pub struct Server {
    router: Arc<Router>,
    config: ServerConfig,
}

impl Server {
    pub fn from_config(router: Router, config: &ServerConfig) -> Self {
        Self {
            router: Arc::new(router),
            config: config.clone(),
        }
    }

    /// Accept connections until Ctrl-C
    ///
    /// Each connection is served on its own task. On the signal this stops
    /// accepting and returns; connections still open are dropped when the
    /// runtime shuts down.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let listener = TcpListener::bind(self.config.address()).await?;
        tracing::info!(addr = %listener.local_addr()?, "todolist server listening");

        let router = self.router;
        let max_body_size = self.config.max_body_size;

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            let (stream, peer) = tokio::select! {
                accepted = listener.accept() => accepted?,
                _ = &mut shutdown => {
                    tracing::info!("shutdown signal received, no longer accepting connections");
                    break;
                }
            };
            let io = TokioIo::new(stream);
            let router = router.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
                    let router = router.clone();
                    async move {
                        Ok::<_, Infallible>(handle_request(router, max_body_size, req).await)
                    }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    tracing::warn!(%peer, error = %err, "error serving connection");
                }
            });
        }

        Ok(())
    }
}

async fn handle_request<B>(
    router: Arc<Router>,
    max_body_size: usize,
    req: hyper::Request<B>,
) -> hyper::Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match Request::from_body(req, max_body_size).await {
        Ok(request) => router.dispatch(request).await,
        Err(err) => HttpResponse::from(err),
    };

    tracing::info!(
        %method,
        %path,
        status = response.status_code().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );

    response.into_hyper()
}
