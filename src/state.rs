use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AppearanceService, EpisodeService, GuestService, SeaOrmAppearanceService,
    SeaOrmEpisodeService, SeaOrmGuestService,
};

/// Everything a request handler or CLI command needs, built once at startup.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub episode_service: Arc<dyn EpisodeService>,

    pub guest_service: Arc<dyn GuestService>,

    pub appearance_service: Arc<dyn AppearanceService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let episode_service: Arc<dyn EpisodeService> =
            Arc::new(SeaOrmEpisodeService::new(store.clone()));
        let guest_service: Arc<dyn GuestService> =
            Arc::new(SeaOrmGuestService::new(store.clone()));
        let appearance_service: Arc<dyn AppearanceService> =
            Arc::new(SeaOrmAppearanceService::new(store.clone()));

        Self {
            config: Arc::new(config),
            store,
            episode_service,
            guest_service,
            appearance_service,
        }
    }
}
