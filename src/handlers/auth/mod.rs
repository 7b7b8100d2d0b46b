//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Authentication routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/me",
            get(handler::get_current_user)
                .route_layer(axum::middleware::from_fn_with_state(state, auth_middleware)),
        )
        .route("/login", post(handler::login))
}
