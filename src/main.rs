use axum::{Router, extract::Extension, routing::get};
use clap::Parser;
use corpus_search::config::{CacheBackend, Cli, Command, ServeArgs, StoreNodeArgs};
use corpus_search::corpus::index::CorpusIndex;
use corpus_search::corpus::reconcile::Reconciler;
use corpus_search::corpus::walker::scan_corpus;
use corpus_search::corpus::watcher::CorpusWatcher;
use corpus_search::query::coordinator::QueryCoordinator;
use corpus_search::query::handlers::{handle_health, handle_help, handle_search};
use corpus_search::search::engine::SearchEngine;
use corpus_search::storage::cache::CacheStore;
use corpus_search::storage::handlers::store_node_router;
use corpus_search::storage::memory::MemoryStore;
use corpus_search::storage::remote::RemoteStore;
use corpus_search::storage::store::KeyValueStore;
use corpus_search::system::handle_system_specs;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .init();

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::StoreNode(args) => run_store_node(args).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    // 1. Cache store:
    let store = build_store(&args)?;
    let cache = CacheStore::new(store);
    match cache.ping().await {
        Ok(()) => tracing::info!("Connected to {:?} cache", args.cache_backend),
        Err(e) => tracing::warn!("Cache not reachable yet, queries will recompute: {}", e),
    }

    // 2. Corpus watcher, subscribed before the scan so no creation is missed:
    let index = CorpusIndex::new();
    let reconciler = Reconciler::new(index.clone(), cache.clone());
    let watcher = CorpusWatcher::start(&args.root, args.watch_recursive, reconciler)?;

    // 3. Startup scan:
    let files = scan_corpus(&args.root)?;
    let added = index.add_all(files);
    tracing::info!("Total files: {} ({} from startup scan)", index.len(), added);

    // 4. Query layer:
    let engine = SearchEngine::new(args.max_search_workers);
    tracing::info!("Parallel search capped at {} workers", engine.max_workers());
    let coordinator = QueryCoordinator::new(index, engine, cache, args.default_parallelism);

    // 5. HTTP Router:
    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/health", get(handle_health))
        .route("/help", get(handle_help))
        .route("/system-specs", get(handle_system_specs))
        .layer(Extension(coordinator));

    // 6. Start HTTP server:
    tracing::info!("HTTP server listening on {}", args.bind);
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;

    drop(watcher);
    Ok(())
}

fn build_store(args: &ServeArgs) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    match args.cache_backend {
        CacheBackend::Memory => Ok(MemoryStore::new()),
        CacheBackend::Remote => {
            let url = args
                .cache_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("--cache-url is required with --cache-backend remote"))?;
            let store = RemoteStore::new(url, args.cache_timeout(), args.cache_retries)?;
            tracing::info!("Using remote cache at {}", store.base_url());
            Ok(Arc::new(store))
        }
    }
}

async fn run_store_node(args: StoreNodeArgs) -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let app = store_node_router(store);

    tracing::info!("Store node listening on {}", args.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
