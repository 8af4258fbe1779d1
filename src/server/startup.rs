use crate::config::Config;
use crate::retrieval::index::FlatIpIndex;
use crate::retrieval::vectors::PassageVectors;
use crate::store::records::RecordStore;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Process-wide state shared by every request.
#[derive(Debug, Clone)]
pub struct Services {
    pub store: Arc<RecordStore>,
    /// Present only when a vector file was configured or found.
    pub index: Option<Arc<FlatIpIndex>>,
}

impl Services {
    /// Loads the record store and, if configured, the similarity index.
    ///
    /// Any failure here is fatal; there is no partially loaded mode.
    pub fn load(config: &Config) -> Result<Self> {
        let store = RecordStore::load(&config.passages_path).context("loading record store")?;

        let index = match &config.vectors_path {
            Some(path) => {
                let vectors = PassageVectors::load(path, store.len(), config.vector_dim)
                    .with_context(|| format!("loading passage vectors from {}", path.display()))?;
                let index =
                    FlatIpIndex::from_vectors(&vectors).context("building similarity index")?;
                tracing::info!(
                    "Built similarity index: {} vectors of dimension {}",
                    index.len(),
                    index.dim()
                );
                Some(Arc::new(index))
            }
            None => {
                tracing::info!("No passage vectors configured, similarity index skipped");
                None
            }
        };

        Ok(Self {
            store: Arc::new(store),
            index,
        })
    }

    /// Wraps an already-built store, without an index.
    pub fn from_store(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
            index: None,
        }
    }
}
