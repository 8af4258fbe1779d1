//! Dense Passage Retrieval QA Service Library
//!
//! This library crate defines the modules behind the question answering web
//! service. The binary (`main.rs`) only reads configuration, loads state and
//! starts the HTTP server.
//!
//! ## Modules
//! - **`config`**: Environment-driven startup configuration.
//! - **`store`**: The immutable `RecordStore` of `question: answer` lines.
//! - **`qa`**: Exact-match lookup and the `POST /ask` handler.
//! - **`page`**: The static front page served at `/`.
//! - **`retrieval`**: Passage vectors and the flat inner-product index, loaded
//!   at startup but not yet consulted when answering.
//! - **`server`**: Startup state and the Axum router.

pub mod config;
pub mod page;
pub mod qa;
pub mod retrieval;
pub mod server;
pub mod store;
