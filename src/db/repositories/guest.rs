use crate::entities::{appearances, episodes, guests, prelude::*};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

pub struct GuestRepository {
    conn: DatabaseConnection,
}

impl GuestRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_with_appearances(&self, id: i32) -> Result<Option<GuestWithAppearances>> {
        let Some(guest) = Guests::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let rows = Appearances::find()
            .filter(appearances::Column::GuestId.eq(id))
            .find_also_related(Episodes)
            .order_by_asc(appearances::Column::Id)
            .all(&self.conn)
            .await?;

        let appearances = rows
            .into_iter()
            .filter_map(|(appearance, episode)| episode.map(|e| (appearance, e)))
            .collect();

        Ok(Some(GuestWithAppearances { guest, appearances }))
    }

    /// Returns every guest ordered by id; empty when none exist.
    pub async fn list_all(&self) -> Result<Vec<guests::Model>> {
        let rows = Guests::find()
            .order_by_asc(guests::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn add(&self, guest: NewGuest) -> Result<guests::Model> {
        let model = guests::ActiveModel {
            name: Set(guest.name),
            occupation: Set(guest.occupation),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        info!(guest_id = model.id, "Added guest {}", model.name);
        Ok(model)
    }
}

#[derive(Debug, Clone)]
pub struct NewGuest {
    pub name: String,
    pub occupation: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GuestWithAppearances {
    pub guest: guests::Model,
    pub appearances: Vec<(appearances::Model, episodes::Model)>,
}
