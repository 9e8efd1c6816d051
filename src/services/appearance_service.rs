//! Domain service for recording guest appearances.

use crate::api::types::AppearanceDto;
use thiserror::Error;

/// Fields for a new appearance after presence checks, before range and
/// reference checks.
#[derive(Debug, Clone, Copy)]
pub struct CreateAppearanceInput {
    pub rating: i64,
    pub episode_id: i32,
    pub guest_id: i32,
}

#[derive(Debug, Error)]
pub enum AppearanceError {
    #[error("{0}")]
    Validation(String),

    #[error("Episode {0} does not exist")]
    UnknownEpisode(i32),

    #[error("Guest {0} does not exist")]
    UnknownGuest(i32),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AppearanceError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AppearanceError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait AppearanceService: Send + Sync {
    /// Records a rated appearance.
    ///
    /// # Errors
    ///
    /// - Returns [`AppearanceError::Validation`] if the rating is outside 1..=5
    /// - Returns [`AppearanceError::UnknownEpisode`] / [`AppearanceError::UnknownGuest`]
    ///   if either reference does not resolve; nothing is written in that case
    async fn create_appearance(
        &self,
        input: CreateAppearanceInput,
    ) -> Result<AppearanceDto, AppearanceError>;
}
