//! HTTP server implementation.
//!
//! Exposes the calculator operators through a versioned JSON API, plus the
//! health and status endpoints, with request tracing and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tally_core::{Addition, Division, Multiplication, Operator, OperatorRegistry, Subtraction};
use tally_telemetry::Telemetry;

use crate::api::{ApiError, OperandsRequest, OperationResponse, ServerStatus};
use crate::extract::ValidatedJson;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:5000".parse().unwrap(),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for [`ServerConfig`].
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    #[must_use]
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    #[must_use]
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Builds the server config.
    #[must_use]
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: self.addr.unwrap_or(defaults.addr),
            cors: self.cors.unwrap_or(defaults.cors),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Registry of the available operators.
    pub registry: OperatorRegistry,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates new app state with the default operator registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: OperatorRegistry::default(),
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new()),
        }
    }

    /// Creates the router.
    fn router(&self) -> Router {
        let v1 = Router::new()
            .route("/addition", post(add))
            .route("/subtraction", post(subtract))
            .route("/multiplication", post(multiply))
            .route("/division", post(divide));

        let v2 = Router::new().route("/{operation}", post(compute));

        let mut router = Router::new()
            // Health and status endpoints
            .route("/status", get(health_check))
            .route("/api/status", get(server_status))
            // Calculator API
            .nest("/api/v1/calculator", v1)
            .nest("/api/v2/calculator", v2)
            .with_state(self.state.clone());

        // Add middleware
        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address cannot be bound or the server
    /// fails while serving.
    pub async fn run(self) -> std::io::Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, "Starting Tally server");
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        tracing::info!("Server shutdown complete");
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}

// === Health Endpoints ===

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"success": true}))
}

async fn server_status(State(state): State<Arc<AppState>>) -> Json<ServerStatus> {
    let (requests_total, errors_total) = Telemetry::global()
        .map(|t| (t.metrics.requests(), t.metrics.errors()))
        .unwrap_or((0, 0));

    Json(ServerStatus {
        status: "running".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        operators: state.registry.names().map(str::to_string).collect(),
        requests_total,
        errors_total,
    })
}

// === Calculator API v1 ===

async fn add(
    ValidatedJson(request): ValidatedJson<OperandsRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    execute(&Addition, request)
}

async fn subtract(
    ValidatedJson(request): ValidatedJson<OperandsRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    execute(&Subtraction, request)
}

async fn multiply(
    ValidatedJson(request): ValidatedJson<OperandsRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    execute(&Multiplication, request)
}

async fn divide(
    ValidatedJson(request): ValidatedJson<OperandsRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    execute(&Division, request)
}

// === Calculator API v2 ===

async fn compute(
    State(state): State<Arc<AppState>>,
    Path(operation): Path<String>,
    ValidatedJson(request): ValidatedJson<OperandsRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    let operator = state.registry.get(&operation)?;
    execute(operator, request)
}

/// Runs an operator against the request operands, with request logging.
fn execute(
    operator: &dyn Operator,
    request: OperandsRequest,
) -> Result<Json<OperationResponse>, ApiError> {
    let request_id = format!("calc-{}", uuid::Uuid::new_v4());
    let start = Instant::now();

    if let Some(telemetry) = Telemetry::global() {
        telemetry.metrics.record_request();
    }

    tracing::debug!(
        request_id = %request_id,
        operator = operator.name(),
        left = request.left,
        right = request.right,
        "Calculation request"
    );

    let operation = operator.run(request.into_operands())?;

    tracing::debug!(
        request_id = %request_id,
        expression = %operation.expression,
        latency_us = start.elapsed().as_micros() as u64,
        "Calculation finished"
    );

    Ok(Json(OperationResponse::from(operation)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        Server::new(ServerConfig::default()).router()
    }

    async fn send(
        router: Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    async fn post(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        send(test_router(), Method::POST, uri, Some(body)).await
    }

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::builder()
            .addr("127.0.0.1:3000".parse().unwrap())
            .cors(false)
            .build();

        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert!(!config.cors);

        let defaults = ServerConfig::builder().build();
        assert_eq!(defaults.addr, "127.0.0.1:5000".parse().unwrap());
        assert!(defaults.cors);
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(test_router(), Method::GET, "/status", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"success": true}));
    }

    #[tokio::test]
    async fn test_server_status() {
        let (status, body) = send(test_router(), Method::GET, "/api/status", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(
            body["operators"],
            serde_json::json!(["addition", "division", "multiplication", "subtraction"])
        );
    }

    #[tokio::test]
    async fn test_counters_surface_in_server_status() {
        Telemetry::init();
        let router = test_router();

        let (_, before) = send(router.clone(), Method::GET, "/api/status", None).await;
        let requests_before = before["requests_total"].as_u64().unwrap();
        let errors_before = before["errors_total"].as_u64().unwrap();

        let (status, _) = send(
            router.clone(),
            Method::POST,
            "/api/v1/calculator/addition",
            Some(r#"{"left": 1, "right": 2}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            router.clone(),
            Method::POST,
            "/api/v1/calculator/division",
            Some(r#"{"left": 1, "right": 0}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, after) = send(router, Method::GET, "/api/status", None).await;
        // Both calculations count as requests; only the division counts as
        // an error. Other tests may run concurrently, so assert lower bounds.
        assert!(after["requests_total"].as_u64().unwrap() >= requests_before + 2);
        assert!(after["errors_total"].as_u64().unwrap() >= errors_before + 1);
    }

    #[tokio::test]
    async fn test_v1_valid_input_returns_200() {
        let cases = [
            ("addition", "+", 1, 2, 3, "1 + 2 = 3"),
            ("addition", "+", -1, -2, -3, "(-1) + (-2) = -3"),
            ("subtraction", "-", 1, -2, 3, "1 - (-2) = 3"),
            ("multiplication", "*", -1, 2, -2, "(-1) * 2 = -2"),
            ("division", "//", 17, -2, -9, "17 // (-2) = -9"),
            ("division", "//", -24, -4, 6, "(-24) // (-4) = 6"),
        ];

        for (name, symbol, left, right, result, expression) in cases {
            let uri = format!("/api/v1/calculator/{name}");
            let body = serde_json::json!({"left": left, "right": right}).to_string();
            let (status, json) = post(&uri, &body).await;

            assert_eq!(status, StatusCode::OK, "{name}({left}, {right})");
            assert_eq!(
                json,
                serde_json::json!({
                    "operands": {"left": left, "right": right},
                    "name": name,
                    "symbol": symbol,
                    "result": result,
                    "expression": expression,
                })
            );
        }
    }

    #[tokio::test]
    async fn test_v1_invalid_input_returns_400() {
        let bodies = [
            "",
            "null",
            "{}",
            r#"{"left": 0}"#,
            r#"{"right": 0}"#,
            r#"{"left": 0, "right": "a"}"#,
            r#"{"left": "a", "right": 0}"#,
            r#"{"left": 5.3, "right": 2.3}"#,
            r#"[{"left": 0, "right": 0}]"#,
        ];

        for body in bodies {
            let (status, json) = post("/api/v1/calculator/addition", body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body:?}");
            assert_eq!(json["key"], "calculator.error.validation");
        }
    }

    #[tokio::test]
    async fn test_missing_body_returns_400() {
        let (status, json) = send(
            test_router(),
            Method::POST,
            "/api/v1/calculator/addition",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["key"], "calculator.error.validation");
    }

    #[tokio::test]
    async fn test_v2_matches_v1() {
        for name in ["addition", "subtraction", "multiplication", "division"] {
            let body = r#"{"left": 12, "right": 4}"#;
            let (v1_status, v1_json) = post(&format!("/api/v1/calculator/{name}"), body).await;
            let (v2_status, v2_json) = post(&format!("/api/v2/calculator/{name}"), body).await;

            assert_eq!(v1_status, StatusCode::OK);
            assert_eq!(v2_status, StatusCode::OK);
            assert_eq!(v1_json, v2_json);
        }
    }

    #[tokio::test]
    async fn test_v2_unknown_operator_returns_404() {
        let (status, json) = post("/api/v2/calculator/modulo", r#"{"left": 1, "right": 2}"#).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["key"], "calculator.error.unknown_operator");
        assert_eq!(json["message"], "Unknown operator: modulo");
    }

    #[tokio::test]
    async fn test_division_by_zero_returns_422() {
        let (status, json) = post("/api/v1/calculator/division", r#"{"left": 7, "right": 0}"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["key"], "calculator.error.division_by_zero");
    }

    #[tokio::test]
    async fn test_overflow_returns_422() {
        let body = format!(r#"{{"left": {}, "right": 1}}"#, i64::MAX);
        let (status, json) = post("/api/v1/calculator/addition", &body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["key"], "calculator.error.overflow");
    }
}
