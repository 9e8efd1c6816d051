use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::{require, validate_reference_id};
use super::{ApiError, AppState, AppearanceDto};
use crate::services::{AppearanceError, CreateAppearanceInput};

impl From<AppearanceError> for ApiError {
    fn from(err: AppearanceError) -> Self {
        match err {
            AppearanceError::Validation(msg) => Self::validation(msg),
            // An unresolvable reference is bad input on this endpoint, not a missing resource.
            err @ (AppearanceError::UnknownEpisode(_) | AppearanceError::UnknownGuest(_)) => {
                Self::validation(err.to_string())
            }
            AppearanceError::Database(msg) => Self::DatabaseError(msg),
            AppearanceError::Internal(msg) => Self::internal(msg),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAppearanceRequest {
    pub rating: Option<i64>,
    pub episode_id: Option<i64>,
    pub guest_id: Option<i64>,
}

impl CreateAppearanceRequest {
    fn into_input(self) -> Result<CreateAppearanceInput, ApiError> {
        let rating = require(self.rating, "rating")?;
        let episode_id =
            validate_reference_id(require(self.episode_id, "episode_id")?, "episode_id")?;
        let guest_id = validate_reference_id(require(self.guest_id, "guest_id")?, "guest_id")?;

        Ok(CreateAppearanceInput {
            rating,
            episode_id,
            guest_id,
        })
    }
}

pub async fn create_appearance(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAppearanceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AppearanceDto>), ApiError> {
    let Json(payload) = payload?;
    let input = payload.into_input()?;

    let appearance = state.appearance_service().create_appearance(input).await?;
    Ok((StatusCode::CREATED, Json(appearance)))
}
