//! Startup configuration.
//!
//! Read once from environment variables; every setting has a default so the
//! service runs from its deployment directory with no configuration at all.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_PASSAGES_PATH: &str = "data/passages.txt";
pub const DEFAULT_VECTORS_PATH: &str = "embeddings/passage_vectors.npy";
pub const DEFAULT_VECTOR_DIM: usize = 768;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub passages_path: PathBuf,
    /// `None` when no vector file is configured and the default one is absent.
    pub vectors_path: Option<PathBuf>,
    pub vector_dim: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// An explicit `QA_VECTORS` is always kept (a missing file then fails at
    /// load time); otherwise the default vector path is used only if it exists.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("QA_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid QA_BIND address {:?}", bind))?;

        let passages_path = lookup("QA_PASSAGES")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PASSAGES_PATH));

        let vectors_path = match lookup("QA_VECTORS") {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                let default = PathBuf::from(DEFAULT_VECTORS_PATH);
                default.exists().then_some(default)
            }
        };

        let vector_dim = match lookup("QA_VECTOR_DIM") {
            Some(dim) => dim
                .parse()
                .with_context(|| format!("invalid QA_VECTOR_DIM {:?}", dim))?,
            None => DEFAULT_VECTOR_DIM,
        };

        Ok(Self {
            bind_addr,
            passages_path,
            vectors_path,
            vector_dim,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.passages_path, PathBuf::from(DEFAULT_PASSAGES_PATH));
        assert_eq!(config.vector_dim, 768);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("QA_BIND", "0.0.0.0:8080"),
            ("QA_PASSAGES", "/srv/qa/passages.txt"),
            ("QA_VECTORS", "/srv/qa/vectors.npy"),
            ("QA_VECTOR_DIM", "128"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.passages_path, PathBuf::from("/srv/qa/passages.txt"));
        assert_eq!(config.vectors_path, Some(PathBuf::from("/srv/qa/vectors.npy")));
        assert_eq!(config.vector_dim, 128);
    }

    #[test]
    fn test_explicit_vectors_kept_even_if_missing() {
        let config =
            Config::from_lookup(lookup_from(&[("QA_VECTORS", "/definitely/not/here.npy")]))
                .unwrap();

        assert_eq!(
            config.vectors_path,
            Some(PathBuf::from("/definitely/not/here.npy"))
        );
    }

    #[test]
    fn test_invalid_bind_address() {
        let err = Config::from_lookup(lookup_from(&[("QA_BIND", "not-an-address")])).unwrap_err();
        assert!(err.to_string().contains("QA_BIND"));
    }

    #[test]
    fn test_invalid_vector_dim() {
        assert!(Config::from_lookup(lookup_from(&[("QA_VECTOR_DIM", "wide")])).is_err());
    }
}
