pub mod appearance;
pub mod episode;
pub mod guest;
