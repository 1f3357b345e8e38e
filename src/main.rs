use axum::{
    extract::Extension,
    routing::get,
    Router,
};
use registro::config::ServerConfig;
use registro::records::handlers::{handle_home, handle_new_record, handle_submit_record};
use registro::records::store::RecordStore;
use registro::reference::handlers::handle_towns_by_department;
use registro::reference::loader::ReferenceLoader;
use registro::web::templates::Templates;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_env();

    // 1. Shared state: the in-memory store, the dataset loader, and the
    //    template environment. All single-owner, process lifetime.
    let store = Arc::new(RecordStore::new());
    let reference = Arc::new(ReferenceLoader::new(&config.data_dir));
    let templates = Arc::new(Templates::new()?);

    // 2. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_home).post(handle_submit_record))
        .route("/new-record", get(handle_new_record))
        .route("/api/towns/:department_code", get(handle_towns_by_department))
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .layer(Extension(store))
        .layer(Extension(reference))
        .layer(Extension(templates))
        .layer(TraceLayer::new_for_http());

    // 3. Start HTTP server:
    let addr = config.bind_addr();
    tracing::info!("Server listening on port {}", config.port);
    tracing::info!("Reference data directory: {}", config.data_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
