//! Candidate collection routes.

#[cfg(test)]
#[path = "candidates_test.rs"]
mod candidates_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::services::candidates::{Candidate, CandidateError, NewCandidate};
use crate::state::AppState;

/// `GET /api/Candidate` — the whole collection as a JSON array.
pub async fn list_candidates(State(state): State<AppState>) -> Result<Json<Vec<Candidate>>, CandidateError> {
    let candidates = state.candidates.list().await?;
    Ok(Json(candidates))
}

/// `POST /api/Candidate` — append one candidate; `201` with the stored record.
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(body): Json<NewCandidate>,
) -> Result<(StatusCode, Json<Candidate>), CandidateError> {
    let candidate = state.candidates.create(body).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

pub(crate) fn candidate_error_to_status(err: &CandidateError) -> StatusCode {
    match err {
        CandidateError::Status { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
        CandidateError::Unreachable(_) => StatusCode::GATEWAY_TIMEOUT,
        CandidateError::Parse(_) => StatusCode::BAD_GATEWAY,
        CandidateError::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// User-facing text for the `message` field of an error body.
pub(crate) fn candidate_error_message(err: &CandidateError) -> String {
    match err {
        CandidateError::Status { message, .. } => message.clone(),
        CandidateError::Unreachable(_) => "Candidate service did not respond.".to_owned(),
        CandidateError::Parse(_) => "Candidate service sent an unreadable response.".to_owned(),
        CandidateError::ClientBuild(_) => "Candidate service is misconfigured.".to_owned(),
    }
}

impl IntoResponse for CandidateError {
    fn into_response(self) -> Response {
        let status = candidate_error_to_status(&self);
        tracing::warn!(error = %self, %status, "candidate request failed");
        (status, Json(serde_json::json!({ "message": candidate_error_message(&self) }))).into_response()
    }
}
