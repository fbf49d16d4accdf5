//! Waitlist signup and listing routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{
        app_state::AppState,
        responses::{ApiResponse, PaginatedResponse, PaginationMeta},
    },
    app_error::AppResult,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(subscribe))
        .route("/emails", get(get_all_emails))
        .route("/emails/paginated", get(get_paginated_emails))
}

#[derive(Deserialize)]
struct SubscribePayload {
    email: String,
    name: String,
}

#[derive(Serialize)]
struct SubscriptionData {
    email: String,
    name: String,
}

/// POST /api/v1/waitlist/subscribe
async fn subscribe(
    State(app_state): State<AppState>,
    Json(payload): Json<SubscribePayload>,
) -> AppResult<impl IntoResponse> {
    let entry = app_state
        .waitlist_use_cases
        .subscribe(&payload.email, &payload.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            SubscriptionData {
                email: entry.email,
                name: entry.name,
            },
            "Successfully added to waitlist",
        )),
    ))
}

/// GET /api/v1/waitlist/emails
/// Admin dump of every entry, capped at one large page.
async fn get_all_emails(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = app_state.waitlist_use_cases.list_all().await?;

    Ok(Json(ApiResponse::success(
        entries,
        "Waitlist entries retrieved",
    )))
}

#[derive(Deserialize)]
struct PaginationQuery {
    page: Option<i64>,
    limit: Option<i64>,
}

/// GET /api/v1/waitlist/emails/paginated?page&limit
async fn get_paginated_emails(
    State(app_state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    let page = app_state
        .waitlist_use_cases
        .list(query.page, query.limit)
        .await?;

    Ok(Json(PaginatedResponse {
        envelope: ApiResponse::success(page.entries, "Waitlist entries retrieved"),
        pagination: PaginationMeta {
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
            has_next: page.has_next,
            has_previous: page.has_previous,
        },
    }))
}
