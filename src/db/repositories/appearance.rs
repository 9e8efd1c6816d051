use crate::domain::Rating;
use crate::entities::{appearances, episodes, guests, prelude::*};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};
use tracing::info;

pub struct AppearanceRepository {
    conn: DatabaseConnection,
}

impl AppearanceRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts an appearance after confirming both referenced rows exist.
    ///
    /// The existence checks and the insert share one transaction, so a
    /// missing reference never leaves a row behind.
    pub async fn add(&self, appearance: NewAppearance) -> Result<NewAppearanceOutcome> {
        let txn = self.conn.begin().await?;

        let Some(episode) = Episodes::find_by_id(appearance.episode_id).one(&txn).await? else {
            return Ok(NewAppearanceOutcome::UnknownEpisode(appearance.episode_id));
        };

        let Some(guest) = Guests::find_by_id(appearance.guest_id).one(&txn).await? else {
            return Ok(NewAppearanceOutcome::UnknownGuest(appearance.guest_id));
        };

        let model = appearances::ActiveModel {
            rating: Set(appearance.rating.value()),
            episode_id: Set(episode.id),
            guest_id: Set(guest.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            appearance_id = model.id,
            episode_id = episode.id,
            guest_id = guest.id,
            rating = model.rating,
            "Recorded appearance"
        );

        Ok(NewAppearanceOutcome::Created(AppearanceRecord {
            appearance: model,
            episode,
            guest,
        }))
    }

    pub async fn count_for_episode(&self, episode_id: i32) -> Result<u64> {
        let count = Appearances::find()
            .filter(appearances::Column::EpisodeId.eq(episode_id))
            .count(&self.conn)
            .await?;

        Ok(count)
    }
}

#[derive(Debug, Clone)]
pub struct NewAppearance {
    pub rating: Rating,
    pub episode_id: i32,
    pub guest_id: i32,
}

/// A stored appearance with both sides of the relationship loaded.
#[derive(Debug, Clone)]
pub struct AppearanceRecord {
    pub appearance: appearances::Model,
    pub episode: episodes::Model,
    pub guest: guests::Model,
}

#[derive(Debug, Clone)]
pub enum NewAppearanceOutcome {
    Created(AppearanceRecord),
    UnknownEpisode(i32),
    UnknownGuest(i32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use crate::db::repositories::episode::{EpisodeRepository, NewEpisode};
    use crate::db::repositories::guest::{GuestRepository, NewGuest};
    use chrono::NaiveDate;
    use sea_orm::ActiveValue::NotSet;

    async fn seeded() -> (Store, episodes::Model, guests::Model) {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .unwrap();
        let episode = EpisodeRepository::new(store.conn.clone())
            .add(NewEpisode {
                title: "Pilot".to_string(),
                description: None,
                date: NaiveDate::from_ymd_opt(1999, 1, 11).unwrap(),
                number: 1,
            })
            .await
            .unwrap();
        let guest = GuestRepository::new(store.conn.clone())
            .add(NewGuest {
                name: "Billy Crystal".to_string(),
                occupation: Some("comedian".to_string()),
            })
            .await
            .unwrap();
        (store, episode, guest)
    }

    #[tokio::test]
    async fn add_returns_related_rows() {
        let (store, episode, guest) = seeded().await;
        let repo = AppearanceRepository::new(store.conn.clone());

        let outcome = repo
            .add(NewAppearance {
                rating: Rating::new(5).unwrap(),
                episode_id: episode.id,
                guest_id: guest.id,
            })
            .await
            .unwrap();

        let NewAppearanceOutcome::Created(record) = outcome else {
            panic!("expected appearance to be created");
        };
        assert_eq!(record.appearance.rating, 5);
        assert_eq!(record.episode, episode);
        assert_eq!(record.guest, guest);
        assert_eq!(repo.count_for_episode(episode.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_references_write_nothing() {
        let (store, episode, guest) = seeded().await;
        let repo = AppearanceRepository::new(store.conn.clone());

        let outcome = repo
            .add(NewAppearance {
                rating: Rating::new(3).unwrap(),
                episode_id: 404,
                guest_id: guest.id,
            })
            .await
            .unwrap();
        assert!(matches!(outcome, NewAppearanceOutcome::UnknownEpisode(404)));

        let outcome = repo
            .add(NewAppearance {
                rating: Rating::new(3).unwrap(),
                episode_id: episode.id,
                guest_id: 404,
            })
            .await
            .unwrap();
        assert!(matches!(outcome, NewAppearanceOutcome::UnknownGuest(404)));

        assert_eq!(Appearances::find().count(&store.conn).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn entity_hook_rejects_out_of_range_rating() {
        let (store, episode, guest) = seeded().await;

        let result = appearances::ActiveModel {
            id: NotSet,
            rating: Set(6),
            episode_id: Set(episode.id),
            guest_id: Set(guest.id),
        }
        .insert(&store.conn)
        .await;

        assert!(result.is_err());
        assert_eq!(Appearances::find().count(&store.conn).await.unwrap(), 0);
    }
}
