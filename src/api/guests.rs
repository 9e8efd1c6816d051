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

use super::validation::{require, validate_name};
use super::{ApiError, AppState, GuestDetailDto, GuestDto};
use crate::services::{CreateGuestInput, GuestError};

impl From<GuestError> for ApiError {
    fn from(err: GuestError) -> Self {
        match err {
            GuestError::NotFound(id) => Self::guest_not_found(id),
            GuestError::Validation(msg) => Self::validation(msg),
            GuestError::Database(msg) => Self::DatabaseError(msg),
            GuestError::Internal(msg) => Self::internal(msg),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateGuestRequest {
    pub name: Option<String>,
    pub occupation: Option<String>,
}

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GuestDto>>, ApiError> {
    let guests = state.guest_service().list_guests().await?;
    Ok(Json(guests))
}

pub async fn get_guest(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<GuestDetailDto>, ApiError> {
    let Path(id) = id?;
    let guest = state.guest_service().get_guest(id).await?;
    Ok(Json(guest))
}

pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateGuestRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GuestDto>), ApiError> {
    let Json(payload) = payload?;
    let name = require(payload.name, "name")?;
    validate_name(&name, "Name")?;
    if let Some(occupation) = payload
        .occupation
        .as_deref()
        .filter(|o| !o.trim().is_empty())
    {
        validate_name(occupation, "Occupation")?;
    }

    let guest = state
        .guest_service()
        .create_guest(CreateGuestInput {
            name,
            occupation: payload.occupation,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(guest)))
}
