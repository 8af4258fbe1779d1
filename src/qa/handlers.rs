use super::engine::answer;
use super::types::{AskRequest, AskResponse, ErrorResponse};
use crate::store::records::RecordStore;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// `POST /ask`
///
/// Any body that does not carry a string `question` field (invalid JSON, wrong
/// content type, missing or mistyped field) is answered with `400` and an
/// `ErrorResponse` instead of failing the request.
pub async fn handle_ask(
    Extension(store): Extension<Arc<RecordStore>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = payload.map_err(|rejection| {
        let reason = rejection.body_text();
        tracing::warn!("Rejected ask request: {}", reason);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: reason }),
        )
    })?;

    let found = answer(&store, &req.question).to_string();
    tracing::debug!("Question {:?} -> {:?}", req.question, found);

    Ok(Json(AskResponse {
        question: req.question,
        answer: found,
    }))
}
