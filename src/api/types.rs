//! Response views.
//!
//! Each relationship level has its own DTO, and nested DTOs simply have no
//! field for the back-reference. That is what keeps
//! Episode -> Appearance -> Guest -> Appearance -> ... from recursing.

use serde::{Deserialize, Serialize};

use crate::db::{AppearanceRecord, EpisodeWithAppearances, GuestWithAppearances};
use crate::domain::format_air_date;
use crate::entities::{appearances, episodes, guests};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Scalar-only episode view used by list responses and nested references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeSummaryDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub number: i32,
}

impl From<episodes::Model> for EpisodeSummaryDto {
    fn from(episode: episodes::Model) -> Self {
        Self {
            id: episode.id,
            title: episode.title,
            description: episode.description,
            date: format_air_date(episode.date),
            number: episode.number,
        }
    }
}

/// Scalar-only guest view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestDto {
    pub id: i32,
    pub name: String,
    pub occupation: Option<String>,
}

impl From<guests::Model> for GuestDto {
    fn from(guest: guests::Model) -> Self {
        Self {
            id: guest.id,
            name: guest.name,
            occupation: guest.occupation,
        }
    }
}

/// Appearance as seen from its episode: carries the guest, not the episode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeAppearanceDto {
    pub id: i32,
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
    pub guest: GuestDto,
}

/// Appearance as seen from its guest: carries the episode, not the guest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestAppearanceDto {
    pub id: i32,
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
    pub episode: EpisodeSummaryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeDetailDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub number: i32,
    pub appearances: Vec<EpisodeAppearanceDto>,
}

impl EpisodeDetailDto {
    /// Full view of an episode that has no appearances yet.
    #[must_use]
    pub fn without_appearances(episode: episodes::Model) -> Self {
        Self::from(EpisodeWithAppearances {
            episode,
            appearances: Vec::new(),
        })
    }
}

impl From<EpisodeWithAppearances> for EpisodeDetailDto {
    fn from(row: EpisodeWithAppearances) -> Self {
        let EpisodeSummaryDto {
            id,
            title,
            description,
            date,
            number,
        } = EpisodeSummaryDto::from(row.episode);

        let appearances = row
            .appearances
            .into_iter()
            .map(|(appearance, guest)| EpisodeAppearanceDto {
                id: appearance.id,
                rating: appearance.rating,
                episode_id: appearance.episode_id,
                guest_id: appearance.guest_id,
                guest: GuestDto::from(guest),
            })
            .collect();

        Self {
            id,
            title,
            description,
            date,
            number,
            appearances,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestDetailDto {
    pub id: i32,
    pub name: String,
    pub occupation: Option<String>,
    pub appearances: Vec<GuestAppearanceDto>,
}

impl From<GuestWithAppearances> for GuestDetailDto {
    fn from(row: GuestWithAppearances) -> Self {
        let appearances = row
            .appearances
            .into_iter()
            .map(|(appearance, episode)| GuestAppearanceDto {
                id: appearance.id,
                rating: appearance.rating,
                episode_id: appearance.episode_id,
                guest_id: appearance.guest_id,
                episode: EpisodeSummaryDto::from(episode),
            })
            .collect();

        Self {
            id: row.guest.id,
            name: row.guest.name,
            occupation: row.guest.occupation,
            appearances,
        }
    }
}

/// A freshly created appearance with summaries of both sides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppearanceDto {
    pub id: i32,
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
    pub episode: EpisodeSummaryDto,
    pub guest: GuestDto,
}

impl From<AppearanceRecord> for AppearanceDto {
    fn from(record: AppearanceRecord) -> Self {
        let appearances::Model {
            id,
            rating,
            guest_id,
            episode_id,
        } = record.appearance;

        Self {
            id,
            rating,
            episode_id,
            guest_id,
            episode: EpisodeSummaryDto::from(record.episode),
            guest: GuestDto::from(record.guest),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub uptime_seconds: u64,
}
