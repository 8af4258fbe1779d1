//! Record Store Module
//!
//! Holds the question/answer records the service answers from.
//!
//! ## Overview
//! Records are read once at startup from a line-oriented text file where each
//! line has the form `<question>: <answer>`. The store is never mutated or
//! reloaded afterwards, so it is shared between requests behind an `Arc`
//! without any locking.
//!
//! ## Submodules
//! - **`records`**: The `RecordStore` itself (loading, parsing, iteration).
//! - **`types`**: The `Record` type and the `StoreError` taxonomy.

pub mod records;
pub mod types;
