mod helpers;
mod player_handler;
mod roster_handler;

pub use helpers::ApiError;
pub use player_handler::{create_player, delete_player, get_player, list_players, update_player};
pub use roster_handler::{
    PlayerFormData, RosterParams, roster_create, roster_delete, roster_page, roster_update,
};
