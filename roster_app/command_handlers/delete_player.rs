use std::sync::Arc;

use roster_types::Result;
use roster_types::player::Player;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeletePlayer},
    uow::UnitOfWork,
};

pub struct DeletePlayerCommandHandler {}

impl Default for DeletePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePlayer> for DeletePlayerCommandHandler {
    async fn handle(
        &self,
        command: DeletePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player> {
        let player = uow.players().delete(command.player_id).await?;

        tracing::debug!(player_id = %player.id, "Player deleted");
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use roster_types::Result;
    use roster_types::player::{NewPlayer, PlayerRole};

    use super::*;
    use crate::{config::Config, test_utils::tests::MockUnitOfWork, uow::UnitOfWork};

    #[tokio::test]
    async fn test_delete_player_twice() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::default());
        let handler = DeletePlayerCommandHandler::new();

        let existing = mock_uow
            .players()
            .create(&NewPlayer {
                name: "Quinton de Kock".to_string(),
                age: 31,
                role: PlayerRole::Wicketkeeper,
                team: "South Africa".to_string(),
            })
            .await?;

        let deleted = handler
            .handle(
                DeletePlayer {
                    player_id: existing.id,
                },
                &mock_uow,
                &config,
            )
            .await?;
        assert_eq!(deleted, existing);

        let again = handler
            .handle(
                DeletePlayer {
                    player_id: existing.id,
                },
                &mock_uow,
                &config,
            )
            .await;
        assert!(again.unwrap_err().is_not_found());

        Ok(())
    }
}
