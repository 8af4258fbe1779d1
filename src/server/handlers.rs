use super::types::{HealthResponse, IndexSummary};
use crate::retrieval::index::FlatIpIndex;
use crate::store::records::RecordStore;
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /health`
pub async fn handle_health(
    Extension(store): Extension<Arc<RecordStore>>,
    Extension(index): Extension<Option<Arc<FlatIpIndex>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        records: store.len(),
        index: index.map(|index| IndexSummary {
            vectors: index.len(),
            dimension: index.dim(),
        }),
    })
}
