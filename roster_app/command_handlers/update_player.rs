use std::sync::Arc;

use roster_types::Result;
use roster_types::player::Player;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayer},
    uow::UnitOfWork,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player> {
        let repo = uow.players();

        // A missing player wins over a bad draft.
        repo.get_by_id(command.player_id).await?;

        let new_player = command.draft.validate()?;
        let player = repo.update(command.player_id, &new_player).await?;

        tracing::debug!(player_id = %player.id, "Player updated");
        Ok(player)
    }
}
