//! `SeaORM` implementation of the `GuestService` trait.

use crate::api::types::{GuestDetailDto, GuestDto};
use crate::db::{NewGuest, Store};
use crate::services::guest_service::{CreateGuestInput, GuestError, GuestService};
use async_trait::async_trait;

pub struct SeaOrmGuestService {
    store: Store,
}

impl SeaOrmGuestService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GuestService for SeaOrmGuestService {
    async fn list_guests(&self) -> Result<Vec<GuestDto>, GuestError> {
        let guests = self.store.list_guests().await?;
        Ok(guests.into_iter().map(GuestDto::from).collect())
    }

    async fn get_guest(&self, id: i32) -> Result<GuestDetailDto, GuestError> {
        let row = self
            .store
            .get_guest_with_appearances(id)
            .await?
            .ok_or(GuestError::NotFound(id))?;

        Ok(GuestDetailDto::from(row))
    }

    async fn create_guest(&self, input: CreateGuestInput) -> Result<GuestDto, GuestError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(GuestError::Validation("Name cannot be empty".to_string()));
        }

        let occupation = input
            .occupation
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty());

        let guest = self.store.add_guest(NewGuest { name, occupation }).await?;
        Ok(GuestDto::from(guest))
    }
}
