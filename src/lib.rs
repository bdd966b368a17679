//! Corpus Word Search Library
//!
//! Answers "how many times does word W occur across a file corpus, and in which
//! files", backed by a key-value cache so repeated queries avoid rescanning disk.
//! The binary (`main.rs`) wires these modules into an HTTP service.
//!
//! ## Architecture Modules
//!
//! - **`corpus`**: The set of known files. A one-shot startup scan fills the
//!   `CorpusIndex`; a background watcher adds new files and reconciles them
//!   against already-cached words.
//! - **`search`**: Substring occurrence counting over a corpus snapshot, either
//!   sequentially or in concurrent chunks under a global worker cap.
//! - **`storage`**: The cache. Occurrence records are bincode-encoded into a
//!   pluggable key-value store (in-process, or a standalone store node over HTTP).
//! - **`query`**: The cache-aside coordinator and the `/search` API.
//! - **`system`**: Host information for the `/system-specs` endpoint.
//! - **`config`** / **`error`**: CLI configuration and the typed error taxonomy.

pub mod config;
pub mod corpus;
pub mod error;
pub mod query;
pub mod search;
pub mod storage;
pub mod system;
