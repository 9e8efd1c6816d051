use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::{episodes, guests};

pub mod migrator;
pub mod repositories;

pub use repositories::appearance::{AppearanceRecord, NewAppearance, NewAppearanceOutcome};
pub use repositories::episode::{EpisodeWithAppearances, NewEpisode};
pub use repositories::guest::{GuestWithAppearances, NewGuest};

/// Pooled handle to the relational store.
///
/// Cloning is cheap; every clone shares the same connection pool. Each
/// repository call borrows a connection for the duration of the query (or
/// transaction) and returns it to the pool afterwards.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn episode_repo(&self) -> repositories::episode::EpisodeRepository {
        repositories::episode::EpisodeRepository::new(self.conn.clone())
    }

    fn guest_repo(&self) -> repositories::guest::GuestRepository {
        repositories::guest::GuestRepository::new(self.conn.clone())
    }

    fn appearance_repo(&self) -> repositories::appearance::AppearanceRepository {
        repositories::appearance::AppearanceRepository::new(self.conn.clone())
    }

    pub async fn get_episode_with_appearances(
        &self,
        id: i32,
    ) -> Result<Option<EpisodeWithAppearances>> {
        self.episode_repo().get_with_appearances(id).await
    }

    pub async fn list_episodes(&self) -> Result<Vec<episodes::Model>> {
        self.episode_repo().list_all().await
    }

    pub async fn add_episode(&self, episode: NewEpisode) -> Result<episodes::Model> {
        self.episode_repo().add(episode).await
    }

    pub async fn remove_episode(&self, id: i32) -> Result<Option<u64>> {
        self.episode_repo().remove(id).await
    }

    pub async fn get_guest_with_appearances(
        &self,
        id: i32,
    ) -> Result<Option<GuestWithAppearances>> {
        self.guest_repo().get_with_appearances(id).await
    }

    pub async fn list_guests(&self) -> Result<Vec<guests::Model>> {
        self.guest_repo().list_all().await
    }

    pub async fn add_guest(&self, guest: NewGuest) -> Result<guests::Model> {
        self.guest_repo().add(guest).await
    }

    pub async fn add_appearance(&self, appearance: NewAppearance) -> Result<NewAppearanceOutcome> {
        self.appearance_repo().add(appearance).await
    }

    pub async fn count_appearances_for_episode(&self, episode_id: i32) -> Result<u64> {
        self.appearance_repo().count_for_episode(episode_id).await
    }
}
