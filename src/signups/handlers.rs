use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::state::AppState;

use super::dto::{CreateSignupRequest, SignupResponse};
use super::error::SignupError;
use super::services;

pub fn routes() -> Router<AppState> {
    Router::new().route("/items", get(list_signups).post(create_signup))
}

#[instrument(skip(state, payload))]
pub async fn create_signup(
    State(state): State<AppState>,
    Json(payload): Json<CreateSignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), SignupError> {
    let saved = services::intake(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(SignupResponse::from(saved))))
}

#[instrument(skip(state))]
pub async fn list_signups(
    State(state): State<AppState>,
) -> Result<Json<Vec<SignupResponse>>, SignupError> {
    let signups = services::list_all(&state).await?;
    Ok(Json(
        signups.into_iter().map(SignupResponse::from).collect(),
    ))
}
