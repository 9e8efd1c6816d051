//! `SeaORM` implementation of the `AppearanceService` trait.

use crate::api::types::AppearanceDto;
use crate::db::{NewAppearance, NewAppearanceOutcome, Store};
use crate::domain::Rating;
use crate::services::appearance_service::{
    AppearanceError, AppearanceService, CreateAppearanceInput,
};
use async_trait::async_trait;

pub struct SeaOrmAppearanceService {
    store: Store,
}

impl SeaOrmAppearanceService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AppearanceService for SeaOrmAppearanceService {
    async fn create_appearance(
        &self,
        input: CreateAppearanceInput,
    ) -> Result<AppearanceDto, AppearanceError> {
        let rating =
            Rating::new(input.rating).map_err(|e| AppearanceError::Validation(e.to_string()))?;

        let outcome = self
            .store
            .add_appearance(NewAppearance {
                rating,
                episode_id: input.episode_id,
                guest_id: input.guest_id,
            })
            .await?;

        match outcome {
            NewAppearanceOutcome::Created(record) => Ok(AppearanceDto::from(record)),
            NewAppearanceOutcome::UnknownEpisode(id) => Err(AppearanceError::UnknownEpisode(id)),
            NewAppearanceOutcome::UnknownGuest(id) => Err(AppearanceError::UnknownGuest(id)),
        }
    }
}
