pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, header};
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::Settings;
use services::chat::ChatService;
use services::gemini::GeminiClient;

pub struct AppState {
    pub settings: Settings,
    pub start_time: Instant,
    pub chat: ChatService,
}

impl AppState {
    pub fn new(settings: Settings, http_client: reqwest::Client) -> Self {
        let gemini = GeminiClient::new(
            http_client,
            &settings.gemini_api_url,
            &settings.gemini_api_key,
            settings.gemini_timeout(),
        );

        Self {
            settings,
            start_time: Instant::now(),
            chat: ChatService::new(gemini),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    use routes::{chat, health, openapi};

    let cors = build_cors(&state.settings);

    let mut app = Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/health", get(health::health))
        .route("/status", get(health::status))
        .merge(openapi::swagger_ui());

    let static_dir = Path::new(&state.settings.static_dir);
    if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "Serving static frontend");
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    app.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
    .layer(CompressionLayer::new())
    .layer(cors)
    .with_state(state)
}

fn build_cors(settings: &Settings) -> CorsLayer {
    let origins = settings.cors_origins_list();

    if origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
    }
}

/// A bound listener plus the router it will serve.
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        let addr = format!("{}:{}", settings.host, settings.port);
        let listener = TcpListener::bind(&addr).await?;

        let state = Arc::new(AppState::new(settings, reqwest::Client::new()));
        if !state.chat.is_configured() {
            tracing::warn!("GEMINI_API_KEY not set - every question will get the fallback reply");
        }

        Ok(Self {
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.listener.local_addr().map(|a| a.port()).unwrap_or(0)
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!(address = ?self.listener.local_addr().ok(), "Server listening");
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
