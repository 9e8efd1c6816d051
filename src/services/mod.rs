pub mod appearance_service;
pub mod appearance_service_impl;
pub mod episode_service;
pub mod episode_service_impl;
pub mod guest_service;
pub mod guest_service_impl;

pub use appearance_service::{AppearanceError, AppearanceService, CreateAppearanceInput};
pub use appearance_service_impl::SeaOrmAppearanceService;
pub use episode_service::{CreateEpisodeInput, EpisodeError, EpisodeService};
pub use episode_service_impl::SeaOrmEpisodeService;
pub use guest_service::{CreateGuestInput, GuestError, GuestService};
pub use guest_service_impl::SeaOrmGuestService;
