//! Store Node Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) spoken between a
//! search process ([`super::remote::RemoteStore`]) and a standalone store node
//! ([`super::handlers`]).
//!
//! Values are opaque bytes; the node never interprets them.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";
/// Write (overwrite) a single key.
pub const ENDPOINT_PUT: &str = "/put";
/// Read a single key: `GET /get?key={key}`.
///
/// The key travels as a query parameter so path normalisation (`.`, `..`, `/`)
/// can never rewrite it. An absent key is a `200` with no value; a `404` only
/// ever means the route itself is wrong.
pub const ENDPOINT_GET: &str = "/get";
/// Enumerate every key. Not pattern based, so no stored key can collide with it.
pub const ENDPOINT_KEYS: &str = "/internal/keys";

// --- Data Transfer Objects ---

/// Client request for writing a value.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutRequest {
    pub key: String,
    pub value: Vec<u8>,
}

/// Query string of a single-key read.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeyQuery {
    pub key: String,
}

/// Acknowledgment for write operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutResponse {
    pub success: bool,
}

/// Response for a single-key read.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetResponse {
    /// `None` indicates the key does not exist.
    pub value: Option<Vec<u8>>,
}

/// Response for key enumeration.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeysResponse {
    pub keys: Vec<String>,
}
