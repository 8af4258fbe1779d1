//! HTTP Server Module
//!
//! Wires the loaded state into an Axum `Router`.
//!
//! ## Overview
//! All state is loaded exactly once by `Services::load` before the router is
//! built and is immutable afterwards. Handlers receive it through `Extension`
//! layers instead of reaching for globals, which keeps each handler testable
//! with an injected store.
//!
//! ## Routes
//! - `GET /`: static front page.
//! - `POST /ask`: exact-match question lookup.
//! - `GET /health`: liveness and loaded-data summary.

pub mod handlers;
pub mod startup;
pub mod types;


use crate::page::handlers::handle_index;
use crate::qa::handlers::handle_ask;
use axum::routing::{get, post};
use axum::{Extension, Router};
use handlers::handle_health;
use startup::Services;

pub const ENDPOINT_INDEX: &str = "/";
pub const ENDPOINT_ASK: &str = "/ask";
pub const ENDPOINT_HEALTH: &str = "/health";

pub fn build_router(services: &Services) -> Router {
    Router::new()
        .route(ENDPOINT_INDEX, get(handle_index))
        .route(ENDPOINT_ASK, post(handle_ask))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(services.store.clone()))
        .layer(Extension(services.index.clone()))
}
