pub mod checklist;
pub mod compose;
pub mod health;
pub mod materials;
pub mod review;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(templates::routes())
        .merge(checklist::routes())
        .merge(materials::routes())
        .merge(compose::routes())
        .merge(review::routes())
        .with_state(state)
}
