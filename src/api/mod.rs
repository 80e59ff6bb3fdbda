use axum::{
    Router,
    extract::{Json, Request, rejection::JsonRejection},
    http::{HeaderValue, Method, StatusCode, Uri, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{compute_tax, validate_and_normalize};

#[derive(Debug, Serialize)]
struct EndpointIndex {
    health: &'static str,
    #[serde(rename = "calculateTax")]
    calculate_tax: &'static str,
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
    endpoints: EndpointIndex,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct ValidationErrorResponse {
    error: &'static str,
    errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NotFoundResponse {
    error: &'static str,
    message: String,
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("income tax API listening on http://{addr}");

    axum::serve(listener, router()).await
}

fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/calculate-tax", post(calculate_tax_handler))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(cors))
        .layer(middleware::from_fn(log_request))
}

async fn index_handler() -> Response {
    json_response(
        StatusCode::OK,
        ServiceInfo {
            name: "Indian Income Tax Calculator Service",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: EndpointIndex {
                health: "GET /health",
                calculate_tax: "POST /calculate-tax",
            },
        },
    )
}

async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok",
            timestamp: Utc::now().to_rfc3339(),
        },
    )
}

async fn calculate_tax_handler(payload: Result<Json<Value>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(raw)) => calculate_tax_response(&raw),
        Err(rejection) => validation_error_response(vec![format!("Invalid JSON body: {rejection}")]),
    }
}

fn calculate_tax_response(raw: &Value) -> Response {
    match validate_and_normalize(raw) {
        Ok(input) => json_response(StatusCode::OK, compute_tax(&input)),
        Err(errors) => validation_error_response(errors),
    }
}

fn validation_error_response(errors: Vec<String>) -> Response {
    json_response(
        StatusCode::BAD_REQUEST,
        ValidationErrorResponse {
            error: "Validation failed",
            errors,
        },
    )
}

async fn not_found_handler(method: Method, uri: Uri) -> Response {
    json_response(
        StatusCode::NOT_FOUND,
        NotFoundResponse {
            error: "Not Found",
            message: format!("Route {method} {} not found", uri.path()),
        },
    )
}

async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return with_cors_headers(StatusCode::NO_CONTENT.into_response());
    }
    with_cors_headers(next.run(request).await)
}

fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    response
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    tracing::info!(%method, path, status = response.status().as_u16(), "handled request");
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}
