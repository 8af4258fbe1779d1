//! Question Answering Module
//!
//! Answers incoming questions from the `RecordStore`.
//!
//! ## Overview
//! A question is matched exactly against the stored questions after both sides
//! are trimmed and lowercased. The first record in file order that matches
//! provides the answer; when none does, a fixed sentinel answer is returned.
//! A miss is a normal outcome, not an error.
//!
//! ## Submodules
//! - **`engine`**: The lookup itself, a pure function over the store.
//! - **`handlers`**: The `POST /ask` Axum handler and request validation.
//! - **`types`**: Request/response DTOs.

pub mod engine;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
