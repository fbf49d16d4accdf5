//! Contact-form route.

use axum::{
    Json, Router, extract::State, response::IntoResponse, routing::post,
};
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, responses::ApiResponse},
    app_error::AppResult,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_contact))
}

#[derive(Deserialize)]
struct ContactPayload {
    name: String,
    email: String,
    message: String,
}

/// POST /api/v1/contact
async fn submit_contact(
    State(app_state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> AppResult<impl IntoResponse> {
    app_state
        .contact_use_cases
        .submit(&payload.name, &payload.email, &payload.message)
        .await?;

    Ok(Json(ApiResponse::<()>::success(
        (),
        "Contact message sent successfully",
    )))
}
