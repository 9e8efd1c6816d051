//! Domain service for guest operations.

use crate::api::types::{GuestDetailDto, GuestDto};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct CreateGuestInput {
    pub name: String,
    pub occupation: Option<String>,
}

#[derive(Debug, Error)]
pub enum GuestError {
    #[error("Guest {0} not found")]
    NotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for GuestError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for GuestError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait GuestService: Send + Sync {
    /// Every guest in id order. Never an error just because there are none.
    async fn list_guests(&self) -> Result<Vec<GuestDto>, GuestError>;

    /// Full view of one guest, including the episodes they appeared on.
    async fn get_guest(&self, id: i32) -> Result<GuestDetailDto, GuestError>;

    async fn create_guest(&self, input: CreateGuestInput) -> Result<GuestDto, GuestError>;
}
