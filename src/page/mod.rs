//! Static front page.
//!
//! The page is compiled into the binary and served verbatim. Its script talks
//! to `POST /ask` and renders the answer; there is no server-side templating.

pub mod handlers;
