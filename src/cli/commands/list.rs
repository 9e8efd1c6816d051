//! List commands

use crate::config::Config;
use crate::db::Store;
use crate::domain::format_air_date;

pub async fn cmd_list_episodes(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let episodes = store.list_episodes().await?;

    if episodes.is_empty() {
        println!("No episodes yet.");
        return Ok(());
    }

    println!("Episodes ({} total)", episodes.len());
    println!("{:-<70}", "");

    for episode in episodes {
        println!(
            "#{} {} [{}]",
            episode.number,
            episode.title,
            format_air_date(episode.date)
        );
        match episode.description.as_deref() {
            Some(description) => println!("  ID: {} | {}", episode.id, description),
            None => println!("  ID: {}", episode.id),
        }
    }

    Ok(())
}

pub async fn cmd_list_guests(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let guests = store.list_guests().await?;

    if guests.is_empty() {
        println!("No guests yet.");
        println!();
        println!("Add one with: greenroom add-guest \"name\" --occupation \"job\"");
        return Ok(());
    }

    println!("Guests ({} total)", guests.len());
    println!("{:-<70}", "");

    for guest in guests {
        println!(
            "{:>5}  {}  ({})",
            guest.id,
            guest.name,
            guest.occupation.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
