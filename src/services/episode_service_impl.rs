//! `SeaORM` implementation of the `EpisodeService` trait.

use crate::api::types::{EpisodeDetailDto, EpisodeSummaryDto};
use crate::db::{NewEpisode, Store};
use crate::domain::parse_air_date;
use crate::services::episode_service::{CreateEpisodeInput, EpisodeError, EpisodeService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmEpisodeService {
    store: Store,
}

impl SeaOrmEpisodeService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn validate_input(input: CreateEpisodeInput) -> Result<NewEpisode, EpisodeError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(EpisodeError::Validation("Title cannot be empty".to_string()));
        }

        let date =
            parse_air_date(&input.date).map_err(|e| EpisodeError::Validation(e.to_string()))?;

        Ok(NewEpisode {
            title,
            description: input.description,
            date,
            number: input.number,
        })
    }
}

#[async_trait]
impl EpisodeService for SeaOrmEpisodeService {
    async fn get_episode(&self, id: i32) -> Result<EpisodeDetailDto, EpisodeError> {
        let row = self
            .store
            .get_episode_with_appearances(id)
            .await?
            .ok_or(EpisodeError::NotFound(id))?;

        Ok(EpisodeDetailDto::from(row))
    }

    async fn list_episodes(&self) -> Result<Vec<EpisodeSummaryDto>, EpisodeError> {
        let episodes = self.store.list_episodes().await?;
        Ok(episodes.into_iter().map(EpisodeSummaryDto::from).collect())
    }

    async fn create_episode(
        &self,
        input: CreateEpisodeInput,
    ) -> Result<EpisodeDetailDto, EpisodeError> {
        let new_episode = Self::validate_input(input)?;
        let episode = self.store.add_episode(new_episode).await?;
        Ok(EpisodeDetailDto::without_appearances(episode))
    }

    async fn delete_episode(&self, id: i32) -> Result<(), EpisodeError> {
        let removed = self
            .store
            .remove_episode(id)
            .await?
            .ok_or(EpisodeError::NotFound(id))?;

        info!(
            episode_id = id,
            appearances_removed = removed,
            "Deleted episode"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str) -> CreateEpisodeInput {
        CreateEpisodeInput {
            title: "  Pilot ".to_string(),
            description: None,
            date: date.to_string(),
            number: 1,
        }
    }

    #[test]
    fn validate_input_parses_date_and_trims_title() {
        let episode = SeaOrmEpisodeService::validate_input(input("2024-03-05")).unwrap();
        assert_eq!(episode.title, "Pilot");
        assert_eq!(episode.date.to_string(), "2024-03-05");
    }

    #[test]
    fn validate_input_rejects_bad_date() {
        let err = SeaOrmEpisodeService::validate_input(input("03/05/2024")).unwrap_err();
        assert!(matches!(err, EpisodeError::Validation(ref msg) if msg.contains("YYYY-MM-DD")));
    }

    #[test]
    fn validate_input_rejects_blank_title() {
        let mut blank = input("2024-03-05");
        blank.title = "   ".to_string();
        assert!(matches!(
            SeaOrmEpisodeService::validate_input(blank),
            Err(EpisodeError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn delete_unknown_episode_is_not_found() {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .unwrap();
        let service = SeaOrmEpisodeService::new(store);

        assert!(matches!(
            service.delete_episode(5).await,
            Err(EpisodeError::NotFound(5))
        ));
        assert!(matches!(
            service.get_episode(5).await,
            Err(EpisodeError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn create_then_get_round_trips_date() {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .unwrap();
        let service = SeaOrmEpisodeService::new(store);

        let created = service.create_episode(input("2024-03-05")).await.unwrap();
        assert_eq!(created.date, "03/05/24");
        assert!(created.appearances.is_empty());

        let fetched = service.get_episode(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }
}
