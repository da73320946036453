use roster_types::player::Player;
use uuid::Uuid;

use crate::cqrs::Query;

/// Fetch the whole roster, in insertion order.
pub struct ListPlayers;

impl Query for ListPlayers {
    type Output = Vec<Player>;
}

/// Fetch the player entity by player id.
pub struct GetPlayerById {
    pub player_id: Uuid,
}

impl Query for GetPlayerById {
    type Output = Player;
}
