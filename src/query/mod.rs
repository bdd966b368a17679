//! Query Service Module
//!
//! The public face of the search process: validates `/search` requests and runs
//! them through the cache-aside protocol.
//!
//! ## Responsibilities
//! - **Validation**: Turning raw query-string parameters into a `SearchQuery`.
//! - **Cache-aside**: Serving cached records, or scanning and refreshing on a miss.
//! - **API**: `/search`, `/health`, and `/help` handlers for the Axum router.
//!
//! ## Submodules
//! - **`coordinator`**: The cache-aside state machine.
//! - **`handlers`**: HTTP request handlers.
//! - **`types`**: Request/response DTOs and the help text.

pub mod coordinator;
pub mod handlers;
pub mod types;
