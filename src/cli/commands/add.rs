//! Add guest command handler

use crate::config::Config;
use crate::db::Store;
use crate::services::{CreateGuestInput, GuestError, GuestService, SeaOrmGuestService};

pub async fn cmd_add_guest(
    config: &Config,
    name: &str,
    occupation: Option<String>,
) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let service = SeaOrmGuestService::new(store);

    let input = CreateGuestInput {
        name: name.to_string(),
        occupation,
    };

    match service.create_guest(input).await {
        Ok(guest) => {
            println!("✓ Added guest: {} (ID: {})", guest.name, guest.id);
            Ok(())
        }
        Err(GuestError::Validation(msg)) => {
            println!("Invalid guest: {msg}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
