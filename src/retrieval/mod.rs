//! Passage Retrieval Module
//!
//! Dense passage vectors and an exact inner-product similarity index over them.
//!
//! ## Overview
//! The passage vectors are precomputed offline (one row per record, in record
//! order) and shipped as a NumPy `.npy` file. At startup they are loaded and
//! added to a `FlatIpIndex`. Answering does not consult the index yet; it is
//! kept behind the `nearest_neighbors(vector, k)` seam so that a question
//! encoder producing query vectors can be wired in without touching the
//! exact-match lookup.
//!
//! ## Submodules
//! - **`npy`**: Minimal reader for the NPY array format (`<f4`, `<f8`, C order).
//! - **`vectors`**: Reshapes the loaded array into one row per record.
//! - **`index`**: Exhaustive inner-product nearest-neighbor search.
//! - **`error`**: Error types for loading and searching.

pub mod error;
pub mod index;
pub mod npy;
pub mod vectors;
