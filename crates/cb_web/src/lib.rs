use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;
pub mod state;
pub mod views;

pub use error::RequestError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let assets_dir = state.assets_dir.clone();

    let router = Router::new()
        .route("/", get(routes::list_articles))
        .route("/index.php", get(routes::list_articles))
        .route("/article", get(routes::get_article))
        .route("/article.php", get(routes::get_article));

    let router = match assets_dir {
        Some(dir) => router.nest_service("/assets", ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
