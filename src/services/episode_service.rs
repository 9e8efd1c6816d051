//! Domain service for episode operations.
//!
//! Handlers call this trait instead of the store so that date parsing and
//! not-found detection live in one place.

use crate::api::types::{EpisodeDetailDto, EpisodeSummaryDto};
use thiserror::Error;

/// Fields for a new episode, still in wire form.
#[derive(Debug, Clone)]
pub struct CreateEpisodeInput {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub number: i32,
}

#[derive(Debug, Error)]
pub enum EpisodeError {
    #[error("Episode {0} not found")]
    NotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for EpisodeError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for EpisodeError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait EpisodeService: Send + Sync {
    /// Full view of one episode, including its appearances.
    ///
    /// # Errors
    ///
    /// - Returns [`EpisodeError::NotFound`] if the episode does not exist
    /// - Returns [`EpisodeError::Internal`] on store failures
    async fn get_episode(&self, id: i32) -> Result<EpisodeDetailDto, EpisodeError>;

    /// Summary view of every episode in id order.
    async fn list_episodes(&self) -> Result<Vec<EpisodeSummaryDto>, EpisodeError>;

    /// Creates an episode.
    ///
    /// # Errors
    ///
    /// Returns [`EpisodeError::Validation`] if `date` is not `YYYY-MM-DD`
    /// or the title is blank.
    async fn create_episode(
        &self,
        input: CreateEpisodeInput,
    ) -> Result<EpisodeDetailDto, EpisodeError>;

    /// Deletes an episode together with all of its appearances.
    ///
    /// # Errors
    ///
    /// Returns [`EpisodeError::NotFound`] if the episode does not exist.
    async fn delete_episode(&self, id: i32) -> Result<(), EpisodeError>;
}
