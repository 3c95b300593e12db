use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, services::store::StoreError, validation};

fn json_error(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({ "success": false, "error": msg }))).into_response()
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    raw.strip_prefix("Bearer ")
}

fn is_authorized(headers: &HeaderMap, admin_token: &str) -> bool {
    if admin_token.is_empty() {
        return false;
    }
    bearer_token(headers) == Some(admin_token)
}

// Answers non-preflight OPTIONS probes; real browser preflights are handled
// by the CorsLayer before they reach the router.
fn preflight_ok(methods: &'static str) -> Response {
    let mut res = StatusCode::OK.into_response();
    let headers = res.headers_mut();
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(methods),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    res
}

pub async fn submit_preflight() -> Response {
    preflight_ok("POST, OPTIONS")
}

pub async fn list_preflight() -> Response {
    preflight_ok("GET, OPTIONS")
}

pub async fn method_not_allowed() -> Response {
    json_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

// ---------------- SUBMIT ----------------

#[derive(Deserialize)]
pub struct SubmitPayload {
    #[serde(default)]
    pub email: Option<String>,

    // number or numeric string; validation decides
    #[serde(default)]
    pub price: Option<serde_json::Value>,
}

// POST /submit-preorder
pub async fn submit_preorder(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: SubmitPayload = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(_) => return json_error(StatusCode::BAD_REQUEST, "Missing email or price"),
    };

    let (Some(email), Some(price_raw)) = (payload.email, payload.price) else {
        return json_error(StatusCode::BAD_REQUEST, "Missing email or price");
    };

    if !validation::is_valid_email(&email) {
        return json_error(StatusCode::BAD_REQUEST, "Invalid email format");
    }

    let price = match validation::parse_price(&price_raw) {
        Some(p) if validation::is_valid_price(p) => p,
        _ => return json_error(StatusCode::BAD_REQUEST, "Invalid price"),
    };

    match state.store.insert(&email, price).await {
        Ok(record) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Preorder submitted successfully",
                "email": record.email,
                "price": record.price,
            })),
        )
            .into_response(),
        Err(StoreError::DuplicateEmail) => {
            json_error(StatusCode::CONFLICT, "Email already registered")
        }
        Err(e) => {
            tracing::error!("preorder insert failed: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

// ---------------- LIST ----------------

// GET /get-preorders (admin only)
pub async fn get_preorders(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !is_authorized(&headers, &state.settings.admin_token) {
        return json_error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let mut preorders = match state.store.list().await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("failed to load preorders: {e}");
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    // newest first; RFC 3339 strings sort chronologically
    preorders.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let stats = match state.store.stats().await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to load stats: {e}");
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "preorders": preorders,
            "stats": stats,
        })),
    )
        .into_response()
}
