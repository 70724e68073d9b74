use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, instrument};
use uuid::Uuid;

use super::dto::{ReportEnvelope, ReportResponse, ScanForm, ScanHistoryResponse};
use super::services::ingest_scan;
use crate::{auth::AuthUser, error::AppError, state::AppState};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(list_reports))
        .route("/reports/:id", get(get_report))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/reports/scan", post(scan_product))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB
}

/// POST /reports/scan (multipart)
/// Fields: productName?, netWeight?, country?, file (required image).
#[instrument(skip(state, mp))]
pub async fn scan_product(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
    mut mp: Multipart,
) -> Result<(StatusCode, HeaderMap, Json<ReportResponse>), AppError> {
    let mut form = ScanForm::default();
    while let Ok(Some(field)) = mp.next_field().await {
        match field.name().map(|s| s.to_string()).as_deref() {
            Some("productName") => form.product_name = field.text().await.ok(),
            Some("netWeight") => form.net_weight = field.text().await.ok(),
            Some("country") => form.country = field.text().await.ok(),
            Some("file") => {
                form.content_type = field.content_type().map(|s| s.to_string());
                form.image = field.bytes().await.ok();
            }
            _ => {}
        }
    }

    let report = ingest_scan(&state, owner_id, form).await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = format!("/reports/{}", report.id).parse() {
        headers.insert(axum::http::header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(report.into())))
}

/// GET /reports — the caller's full scan history, newest first.
#[instrument(skip(state))]
pub async fn list_reports(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
) -> Response {
    match state.reports.list_for_owner(&owner_id).await {
        Ok(reports) => Json(ScanHistoryResponse {
            success: true,
            data: reports.into_iter().map(ReportResponse::from).collect(),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "failed to list reports");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "An error occurred while fetching reports."
                })),
            )
                .into_response()
        }
    }
}

/// GET /reports/:id — owner-scoped; a foreign or unknown id is a plain
/// not-found so report existence never leaks across users.
#[instrument(skip(state))]
pub async fn get_report(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
    Path(id): Path<String>,
) -> Response {
    // A malformed id cannot match anything.
    let Ok(id) = Uuid::parse_str(&id) else {
        return not_found_response();
    };

    match state.reports.get_for_owner(id, &owner_id).await {
        Ok(Some(report)) => Json(ReportEnvelope {
            data: Some(report.into()),
        })
        .into_response(),
        Ok(None) => not_found_response(),
        Err(e) => {
            error!(error = %e, %id, "failed to fetch report");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "An error occurred while fetching the report.", "data": null })),
            )
                .into_response()
        }
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": AppError::NotFound.to_string(), "data": null })),
    )
        .into_response()
}
