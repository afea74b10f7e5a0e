//! HTTP API server
//!
//! Serves each content collection as a sorted JSON array. In watch mode the
//! content directory is observed and the in-process index invalidated on
//! change, so responses always reflect the files on disk.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::cache::ContentIndex;
use crate::content::{FsContentSource, Post, PostCollector};
use crate::helpers;
use crate::Site;

/// Server state
struct ServerState {
    collector: PostCollector<FsContentSource>,
    index: ContentIndex,
    default_collection: String,
}

/// Start the API server
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    // Broadcast channel carrying index invalidation signals
    let (invalidate_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        collector: PostCollector::new(FsContentSource, site.content_dir.clone()),
        index: ContentIndex::new(),
        default_collection: site.config.default_collection.clone(),
    });

    let app = Router::new()
        .route("/api", get(default_collection_handler))
        .route("/api/:collection", get(collection_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let api_url = format!(
        "http://{}:{}/api/{}",
        ip,
        port,
        helpers::encode_url(&state.default_collection)
    );
    println!("API running at {}", api_url);
    println!("Public base URL: {}", site.base_url());
    if watch {
        println!("Watching {} for changes...", site.content_dir.display());
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&api_url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let content_dir = site.content_dir.clone();
        let tx = invalidate_tx.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_content(content_dir, tx) {
                tracing::error!("File watcher error: {}", e);
            }
        });

        let index_state = state.clone();
        let mut rx = invalidate_tx.subscribe();
        tokio::spawn(async move {
            while rx.recv().await.is_ok() {
                index_state.index.invalidate().await;
                tracing::info!("Content changed, index invalidated");
            }
        });
    }

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch the content directory and signal invalidation on changes
fn watch_content(content_dir: PathBuf, invalidate_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Debounce to avoid invalidating once per written byte
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if content_dir.exists() {
        debouncer
            .watcher()
            .watch(&content_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", content_dir);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                // Filter out irrelevant events (like .git, .DS_Store, etc.)
                let relevant = events.iter().any(|e| {
                    let path_str = e.path.to_string_lossy();
                    !path_str.contains(".git")
                        && !path_str.contains(".DS_Store")
                        && !path_str.ends_with('~')
                });

                if relevant {
                    for event in &events {
                        tracing::debug!("File changed: {}", event.path.display());
                    }
                    let _ = invalidate_tx.send(());
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// GET /api - posts of the configured default collection
async fn default_collection_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<Post>>, AppError> {
    let collection = state.default_collection.clone();
    collection_posts(&state, &collection).await
}

/// GET /api/:collection - posts of a named collection, ordered by indexVal
async fn collection_handler(
    State(state): State<Arc<ServerState>>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<Post>>, AppError> {
    collection_posts(&state, &collection).await
}

async fn collection_posts(
    state: &ServerState,
    collection: &str,
) -> Result<Json<Vec<Post>>, AppError> {
    if let Some(posts) = state.index.get(collection).await {
        return Ok(Json(posts));
    }

    let posts = state.collector.collect(collection)?;
    state.index.insert(collection, posts.clone()).await;
    Ok(Json(posts))
}

/// Maps any internal failure to a generic 500 without leaking details
#[derive(Debug)]
struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
