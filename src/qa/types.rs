use serde::{Deserialize, Serialize};

/// Body of `POST /ask`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Echoes the question exactly as received, untrimmed.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
}

/// Structured client error for rejected requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
