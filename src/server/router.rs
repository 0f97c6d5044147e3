use axum::Router;

use crate::features::lookup::handle_lookup;
use crate::server::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new().fallback(handle_lookup).with_state(state)
}
