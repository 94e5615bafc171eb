use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer. The studio frontend only ever reads and posts.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
