use roster_types::player::{Player, PlayerDraft};
use uuid::Uuid;

use crate::cqrs::Command;

/// Adds a new player to the roster.
#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub draft: PlayerDraft,
}

impl Command for CreatePlayer {
    type Output = Player;
}

/// Replaces every editable field of an existing player.
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub player_id: Uuid,
    pub draft: PlayerDraft,
}

impl Command for UpdatePlayer {
    type Output = Player;
}

/// Removes a player, returning the removed record.
#[derive(Debug, Clone)]
pub struct DeletePlayer {
    pub player_id: Uuid,
}

impl Command for DeletePlayer {
    type Output = Player;
}
