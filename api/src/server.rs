//! Axum HTTP server configuration with GraphQL support

use std::sync::Arc;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use emporium_account::{
    notification::{LoggingNotifier, WishedPriceNotifier},
    repository::Repositories,
    service::AccountServices,
};
use emporium_db::EmporiumDb;
use serde::Serialize;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::{
    auth::CallerResolver,
    config::ApiConfig,
    errors::messages,
    schema::{build_schema, AccountSchema},
};

/// Health check response for liveness probe
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: &'static str,
}

/// Readiness check response
#[derive(Serialize)]
struct ReadinessResponse {
    status: String,
    version: &'static str,
    checks: ReadinessChecks,
}

#[derive(Serialize)]
struct ReadinessChecks {
    database: CheckStatus,
}

#[derive(Serialize)]
struct CheckStatus {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: Arc<AccountSchema>,
    pub playground_enabled: bool,
    pub db: EmporiumDb,
    pub callers: CallerResolver,
}

/// Build the Axum application router
///
/// Wires the account services to the database and uses the logging notifier
/// for wished prices.
pub fn build_app(db: EmporiumDb, config: &ApiConfig) -> Router {
    build_app_with_notifier(db, config, Arc::new(LoggingNotifier))
}

/// Build the router with a custom wished price notifier
pub fn build_app_with_notifier(db: EmporiumDb, config: &ApiConfig, notifier: Arc<dyn WishedPriceNotifier>) -> Router {
    let services = AccountServices::new(
        Repositories::from_adapter(db.clone()),
        notifier,
        config.shop.service_config(),
    );

    let app_state = AppState {
        schema: Arc::new(build_schema(services)),
        playground_enabled: config.playground_enabled,
        db,
        callers: CallerResolver::new(
            Arc::new(config.auth.authenticator()),
            Arc::new(config.auth.authorization()),
        ),
    };

    // Configure CORS based on allowed origins
    let cors_layer = if config.cors_allowed_origins.iter().any(|origin| origin == "*") {
        CorsLayer::permissive()
    } else {
        let allowed_origins: Vec<_> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse::<HeaderValue>().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
            .allow_credentials(true)
    };

    Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        // Health check endpoints for Kubernetes probes
        .route("/healthz", get(healthz_handler))
        .route("/readyz", get(readyz_handler))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// HTTP status for a GraphQL response
///
/// The first error decides. Errors raised by resolvers carry their status in
/// `extensions.status`; errors without one come from parsing or validating
/// the document and are reported as 400.
pub fn response_status(response: &async_graphql::Response) -> StatusCode {
    let Some(first) = response.errors.first() else {
        return StatusCode::OK;
    };

    first
        .extensions
        .as_ref()
        .and_then(|extensions| extensions.get("status"))
        .and_then(|status| match status {
            async_graphql::Value::Number(n) => n.as_u64(),
            _ => None,
        })
        .and_then(|status| u16::try_from(status).ok())
        .and_then(|status| StatusCode::from_u16(status).ok())
        .unwrap_or(StatusCode::BAD_REQUEST)
}

/// GraphQL query/mutation handler
async fn graphql_handler(State(state): State<AppState>, headers: HeaderMap, Json(request): Json<Value>) -> Response {
    let mut request = match serde_json::from_value::<async_graphql::Request>(request) {
        Ok(req) => req,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "errors": [{
                        "message": messages::invalid_request(e),
                        "extensions": { "status": 400 }
                    }]
                })),
            )
                .into_response();
        }
    };

    if let Some(caller) = state.callers.resolve(&headers) {
        request = request.data(caller);
    }

    let response = state.schema.execute(request).await;
    let status = response_status(&response);

    let body = serde_json::to_value(&response).unwrap_or_else(|e| {
        warn!(error = %e, "failed to serialize GraphQL response");
        serde_json::json!({
            "errors": [{"message": "Failed to serialize response"}]
        })
    });

    (status, Json(body)).into_response()
}

/// GraphQL Playground UI (only enabled if playground_enabled config is true)
async fn graphql_playground(State(state): State<AppState>) -> impl IntoResponse {
    if state.playground_enabled {
        Html(playground_source(GraphQLPlaygroundConfig::new("/graphql"))).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            "GraphQL Playground is disabled. Use POST /graphql for queries.",
        )
            .into_response()
    }
}

/// Liveness probe endpoint - minimal check that process is alive
async fn healthz_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe endpoint - the database must answer
async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (status, database) = match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            CheckStatus {
                status: "healthy".to_string(),
                error: None,
            },
        ),
        Err(e) => {
            warn!(error = %e, "database readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                CheckStatus {
                    status: "unhealthy".to_string(),
                    error: Some(e.to_string()),
                },
            )
        }
    };

    let response = ReadinessResponse {
        status: if status == StatusCode::OK { "ready" } else { "not_ready" }.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        checks: ReadinessChecks { database },
    };

    (status, Json(response))
}
