//! Search Engine Module
//!
//! Answers "how many times does a word occur, and in which files" by scanning
//! a snapshot of the corpus on disk.
//!
//! ## Overview
//! Matching is plain substring counting (non-overlapping, left to right) over raw
//! file bytes. There is no tokenization and no ranking.
//!
//! ## Modes
//! - **Sequential**: one pass over the snapshot, file list in snapshot order.
//! - **Parallel**: the snapshot is cut into contiguous chunks scanned by
//!   concurrent workers. Counts are summed; file order follows completion order.
//!
//! ## Submodules
//! - **`engine`**: Occurrence counting, chunking, and the bounded worker pool.
//! - **`types`**: Query and result types shared with the cache and HTTP layers.

pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;
