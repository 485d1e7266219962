use crate::http::config::HttpConfig;
use crate::http::error::{HttpError, HttpInitError};
use crate::http::handlers;
use crate::osc::Dispatcher;
use crate::state::SharedState;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Handles shared by every request
#[derive(Clone)]
pub struct AppState {
    pub state: Arc<SharedState>,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(state: Arc<SharedState>, dispatcher: Dispatcher) -> Self {
        Self { state, dispatcher }
    }
}

/// Build the relay router, optionally falling back to a static directory
pub fn router(app: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/send", post(handlers::send))
        .route("/send-copy", post(handlers::send_copy))
        .route("/typing", get(handlers::get_typing).post(handlers::set_typing))
        .route("/history", get(handlers::history))
        .route("/copy", get(handlers::paste).post(handlers::copy))
        .with_state(app);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// HTTP server - bound listener plus router
pub struct HttpServer {
    listener: TcpListener,
    router: Router,
}

impl HttpServer {
    /// Bind the listener
    pub async fn bind(config: &HttpConfig, app: AppState) -> Result<Self, HttpInitError> {
        let bind_target = config.bind_target();
        let listener = TcpListener::bind(&bind_target)
            .await
            .map_err(|e| HttpInitError::BindFailed {
                addr: bind_target.clone(),
                reason: e.to_string(),
            })?;

        if let Some(dir) = &config.static_dir {
            info!(dir = %dir.display(), "Serving static assets");
        }

        Ok(Self {
            listener,
            router: router(app, config.static_dir.as_deref()),
        })
    }

    /// Get local socket address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> Result<(), HttpError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| HttpError::Serve(e.to_string()))
    }
}
