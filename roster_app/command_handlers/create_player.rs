use std::sync::Arc;

use roster_types::Result;
use roster_types::player::Player;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreatePlayer},
    uow::UnitOfWork,
};

pub struct CreatePlayerCommandHandler {}

impl Default for CreatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreatePlayer> for CreatePlayerCommandHandler {
    async fn handle(
        &self,
        command: CreatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player> {
        let new_player = command.draft.validate()?;
        let player = uow.players().create(&new_player).await?;

        tracing::debug!(player_id = %player.id, "Player created");
        Ok(player)
    }
}
