use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::{require, validate_description, validate_episode_number, validate_name};
use super::{ApiError, AppState, EpisodeDetailDto, EpisodeSummaryDto};
use crate::services::{CreateEpisodeInput, EpisodeError};

impl From<EpisodeError> for ApiError {
    fn from(err: EpisodeError) -> Self {
        match err {
            EpisodeError::NotFound(id) => Self::episode_not_found(id),
            EpisodeError::Validation(msg) => Self::validation(msg),
            EpisodeError::Database(msg) => Self::DatabaseError(msg),
            EpisodeError::Internal(msg) => Self::internal(msg),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEpisodeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub number: Option<i64>,
}

impl CreateEpisodeRequest {
    fn into_input(self) -> Result<CreateEpisodeInput, ApiError> {
        let title = require(self.title, "title")?;
        validate_name(&title, "Title")?;
        validate_description(self.description.as_deref())?;
        let date = require(self.date, "date")?;
        let number = validate_episode_number(require(self.number, "number")?)?;

        Ok(CreateEpisodeInput {
            title,
            description: self.description,
            date,
            number,
        })
    }
}

pub async fn list_episodes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EpisodeSummaryDto>>, ApiError> {
    let episodes = state.episode_service().list_episodes().await?;
    Ok(Json(episodes))
}

pub async fn get_episode(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<EpisodeDetailDto>, ApiError> {
    let Path(id) = id?;
    let episode = state.episode_service().get_episode(id).await?;
    Ok(Json(episode))
}

pub async fn create_episode(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateEpisodeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EpisodeDetailDto>), ApiError> {
    let Json(payload) = payload?;
    let input = payload.into_input()?;

    let episode = state.episode_service().create_episode(input).await?;
    Ok((StatusCode::CREATED, Json(episode)))
}

pub async fn delete_episode(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.episode_service().delete_episode(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
