//! Cache Storage Module
//!
//! Persists occurrence records in an external key-value store so repeated
//! queries skip the disk scan.
//!
//! ## Core Concepts
//! - **Store seam**: `KeyValueStore` is the only contract the cache depends on.
//! - **Backends**: `MemoryStore` keeps everything in-process; `RemoteStore` speaks
//!   HTTP to a standalone store node that several search processes can share.
//! - **Records**: `CacheStore` encodes `OccurrenceRecord`s with bincode, one key per
//!   queried word. A value that fails to decode is reported, never treated as a miss.

pub mod cache;
pub mod handlers;
pub mod memory;
pub mod protocol;
pub mod remote;
pub mod store;

#[cfg(test)]
mod tests;
