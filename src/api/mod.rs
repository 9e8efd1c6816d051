use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{AppearanceService, EpisodeService, GuestService};
use crate::state::SharedState;

pub mod appearances;
pub mod episodes;
mod error;
pub mod guests;
mod observability;
mod system;
pub mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn episode_service(&self) -> &Arc<dyn EpisodeService> {
        &self.shared.episode_service
    }

    #[must_use]
    pub fn guest_service(&self) -> &Arc<dyn GuestService> {
        &self.shared.guest_service
    }

    #[must_use]
    pub fn appearance_service(&self) -> &Arc<dyn AppearanceService> {
        &self.shared.appearance_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route(
            "/episodes",
            get(episodes::list_episodes).post(episodes::create_episode),
        )
        .route(
            "/episodes/{id}",
            get(episodes::get_episode).delete(episodes::delete_episode),
        )
        .route(
            "/guests",
            get(guests::list_guests).post(guests::create_guest),
        )
        .route("/guests/{id}", get(guests::get_guest))
        .route("/appearances", post(appearances::create_appearance))
        .route("/health", get(system::health))
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn(observability::track_metrics))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
