use uuid::Uuid;

use roster_types::errors::ApplicationError;
use roster_types::player::{NewPlayer, Player};

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Inserts a player; the store assigns id and timestamps.
    async fn create(&self, player: &NewPlayer) -> Result<Player, ApplicationError>;

    /// Returns every player, oldest first.
    async fn list(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Returns a player by id.
    async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError>;

    /// Overwrites the fields of an existing player and bumps `updated_at`.
    async fn update(&self, player_id: Uuid, player: &NewPlayer)
    -> Result<Player, ApplicationError>;

    /// Deletes a player and returns the deleted row.
    async fn delete(&self, player_id: Uuid) -> Result<Player, ApplicationError>;
}
