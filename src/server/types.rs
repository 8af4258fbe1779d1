use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub index: Option<IndexSummary>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct IndexSummary {
    pub vectors: usize,
    pub dimension: usize,
}
