//! Command line and environment configuration.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Word occurrence search over a file corpus, backed by a key-value cache.
#[derive(Parser, Debug, Clone)]
#[command(name = "corpus-search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the search API over a corpus directory
    Serve(ServeArgs),

    /// Run a standalone key-value node that search processes can share as their cache
    #[command(name = "store-node")]
    StoreNode(StoreNodeArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CacheBackend {
    /// In-process map, lost on restart
    Memory,
    /// A `store-node` reached over HTTP
    Remote,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address the search API listens on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Corpus root directory
    #[arg(long, env = "CORPUS_ROOT", default_value = "data")]
    pub root: PathBuf,

    /// Also watch subdirectories of the root for new files
    #[arg(long, env = "WATCH_RECURSIVE")]
    pub watch_recursive: bool,

    #[arg(long, value_enum, env = "CACHE_BACKEND", default_value_t = CacheBackend::Memory)]
    pub cache_backend: CacheBackend,

    /// Base URL of the store node (required with --cache-backend remote)
    #[arg(long, env = "CACHE_URL")]
    pub cache_url: Option<String>,

    /// Deadline for each cache request, in milliseconds
    #[arg(long, env = "CACHE_TIMEOUT_MS", default_value_t = 500)]
    pub cache_timeout_ms: u64,

    /// Attempts per cache request before the store is considered unavailable
    #[arg(long, env = "CACHE_RETRIES", default_value_t = 3)]
    pub cache_retries: usize,

    /// Cap on parallel-search chunk workers in flight across all requests
    #[arg(long, env = "MAX_SEARCH_WORKERS", default_value_t = 256)]
    pub max_search_workers: usize,

    /// Parallelism used when a query does not give `concurrentThreads`
    #[arg(long, env = "DEFAULT_PARALLELISM", default_value_t = 100)]
    pub default_parallelism: usize,
}

impl ServeArgs {
    pub fn cache_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_timeout_ms)
    }
}

#[derive(Args, Debug, Clone)]
pub struct StoreNodeArgs {
    /// Address the store node listens on
    #[arg(long = "bind", env = "STORE_BIND_ADDR", default_value = "0.0.0.0:6380")]
    pub bind: SocketAddr,
}
