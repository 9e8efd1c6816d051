use crate::entities::{appearances, episodes, guests, prelude::*};
use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, info};

/// Repository for episode operations
pub struct EpisodeRepository {
    conn: DatabaseConnection,
}

impl EpisodeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Loads an episode together with its appearances and the guest behind each.
    pub async fn get_with_appearances(&self, id: i32) -> Result<Option<EpisodeWithAppearances>> {
        let Some(episode) = Episodes::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let rows = Appearances::find()
            .filter(appearances::Column::EpisodeId.eq(id))
            .find_also_related(Guests)
            .order_by_asc(appearances::Column::Id)
            .all(&self.conn)
            .await?;

        let appearances = rows
            .into_iter()
            .filter_map(|(appearance, guest)| guest.map(|g| (appearance, g)))
            .collect();

        Ok(Some(EpisodeWithAppearances {
            episode,
            appearances,
        }))
    }

    pub async fn list_all(&self) -> Result<Vec<episodes::Model>> {
        let rows = Episodes::find()
            .order_by_asc(episodes::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn add(&self, episode: NewEpisode) -> Result<episodes::Model> {
        let model = episodes::ActiveModel {
            title: Set(episode.title),
            description: Set(episode.description),
            date: Set(episode.date),
            number: Set(episode.number),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        info!(episode_id = model.id, number = model.number, "Added episode");
        Ok(model)
    }

    /// Deletes an episode and every appearance that references it.
    ///
    /// Returns `None` when the episode does not exist, otherwise the number of
    /// appearances removed alongside it. Both deletes commit together.
    pub async fn remove(&self, id: i32) -> Result<Option<u64>> {
        let txn = self.conn.begin().await?;

        if Episodes::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(None);
        }

        let removed = Appearances::delete_many()
            .filter(appearances::Column::EpisodeId.eq(id))
            .exec(&txn)
            .await?;

        Episodes::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        debug!(
            episode_id = id,
            appearances_removed = removed.rows_affected,
            "Removed episode"
        );
        Ok(Some(removed.rows_affected))
    }
}

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone)]
pub struct NewEpisode {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub number: i32,
}

#[derive(Debug, Clone)]
pub struct EpisodeWithAppearances {
    pub episode: episodes::Model,
    pub appearances: Vec<(appearances::Model, guests::Model)>,
}
