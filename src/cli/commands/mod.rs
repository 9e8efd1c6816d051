mod add;
mod list;

pub use add::cmd_add_guest;
pub use list::{cmd_list_episodes, cmd_list_guests};
