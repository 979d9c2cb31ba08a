//! HTTP Server for the CuraVyom API.
//!
//! # API Endpoints
//!
//! | Method | Path            | Description                          |
//! |--------|-----------------|--------------------------------------|
//! | GET    | `/`, `/health`  | Status check                         |
//! | POST   | `/subscribe`    | Newsletter subscription              |
//! | POST   | `/api/contact`  | Contact form                         |
//! | POST   | `/api/upload`   | Research file upload + analysis      |
//! | GET    | `/reports/*`    | Generated reports (static files)     |

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

use super::types::{
    ContactRequest, MessageResponse, StatusResponse, SubscriptionRequest, UploadAnalysis,
};
use super::upload::analyze;
use crate::config::{ServerConfig, CONTACT_DELAY, SUBSCRIBE_DELAY, UPLOAD_DELAY};
use crate::error::{ServerError, ServerResult};

/// Shared handler state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    simulate_latency: bool,
    max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            simulate_latency: config.simulate_latency,
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    fn multipart_error(&self, context: &str, e: MultipartError) -> ServerError {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge {
                limit: self.max_upload_bytes,
            }
        } else {
            ServerError::BadRequest(format!("{}: {}", context, e.body_text()))
        }
    }

    async fn pause(&self, delay: Duration) {
        if self.simulate_latency {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Build the application router.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/health", get(status))
        .route("/subscribe", post(subscribe))
        .route("/api/contact", post(contact))
        .route(
            "/api/upload",
            post(upload).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .nest_service("/reports", ServeDir::new(&config.reports_dir))
        .layer(cors_layer(&config.allowed_origins))
        .with_state(AppState::new(config))
}

/// CORS for the configured origins, credentials allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin: {}", e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let app = router(&config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("🚀 CuraVyom API running on http://localhost:{}", config.port);
    tracing::info!("   POST /subscribe   - Newsletter subscription");
    tracing::info!("   POST /api/contact - Contact form");
    tracing::info!("   POST /api/upload  - Upload research file");
    tracing::info!("   GET  /health      - Health check");
    tracing::info!("   GET  /reports/*   - {}", config.reports_dir.display());
    tracing::debug!(origins = ?config.allowed_origins, "CORS allow-list");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Internal(format!("bind {}: {}", addr, e)))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    Ok(())
}

/// Status endpoint
async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::online())
}

/// Newsletter subscription. Delivery of the confirmation mail is not wired
/// up; the address is only logged.
async fn subscribe(
    State(state): State<AppState>,
    Json(request): Json<SubscriptionRequest>,
) -> ServerResult<Json<MessageResponse>> {
    request.validate()?;
    state.pause(SUBSCRIBE_DELAY).await;

    tracing::info!(email = %request.email, "New subscription");

    Ok(Json(MessageResponse::success(
        "Subscription confirmed. Check your email for updates.",
    )))
}

/// Contact form submission.
async fn contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> ServerResult<Json<MessageResponse>> {
    request.validate()?;
    state.pause(CONTACT_DELAY).await;

    tracing::info!(
        from = %format!("{} {}", request.first_name, request.last_name),
        email = %request.email,
        "New contact message: {}",
        request.message
    );

    Ok(Json(MessageResponse::success("Message sent successfully.")))
}

/// Research file upload. Only the name and size are used, so the content is
/// counted chunk by chunk and never buffered.
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ServerResult<Json<UploadAnalysis>> {
    let mut file: Option<(String, usize)> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| state.multipart_error("Multipart error", e))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or("upload").to_string();
        let mut size = 0usize;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| state.multipart_error("Read error", e))?
        {
            size += chunk.len();
        }
        file = Some((name, size));
    }

    let (name, size) = file.ok_or_else(|| ServerError::BadRequest("No file provided".into()))?;
    state.pause(UPLOAD_DELAY).await;

    let result = analyze(&name, size);
    tracing::info!(file = %name, size, kind = ?result.kind, "Upload analysed");

    Ok(Json(result))
}
