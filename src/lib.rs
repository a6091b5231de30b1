pub mod features;
pub mod services;
pub mod utilities;

#[cfg(test)]
mod test_support;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use shared::utilities::errors::AppError;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::utilities::app_state::AppState;

pub fn build_router(state: AppState) -> Result<Router, AppError> {
    let origin = state
        .config
        .frontend_endpoint
        .parse::<HeaderValue>()
        .map_err(|e| {
            AppError::InternalError(format!(
                "Invalid frontend endpoint {}, {e}",
                state.config.frontend_endpoint
            ))
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]);

    let router = Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(features::listings::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}
