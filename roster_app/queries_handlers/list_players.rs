use async_trait::async_trait;
use std::sync::Arc;

use roster_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListPlayers},
    uow::UnitOfWork,
};

pub struct ListPlayersHandler {}

impl ListPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPlayers> for ListPlayersHandler {
    async fn handle(
        &self,
        _query: ListPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListPlayers as Query>::Output, ApplicationError> {
        uow.players().list().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use roster_types::Result;
    use roster_types::player::{NewPlayer, PlayerRole};

    use super::*;
    use crate::{test_utils::tests::MockUnitOfWork, uow::UnitOfWork};

    #[tokio::test]
    async fn test_list_players_keeps_insertion_order() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::default());

        let mut ids = Vec::new();
        for (name, role) in [
            ("Babar Azam", PlayerRole::Batsman),
            ("Shaheen Afridi", PlayerRole::Bowler),
            ("Shadab Khan", PlayerRole::AllRounder),
        ] {
            let player = mock_uow
                .players()
                .create(&NewPlayer {
                    name: name.to_string(),
                    age: 28,
                    role,
                    team: "Pakistan".to_string(),
                })
                .await?;
            ids.push(player.id);
        }

        let players = ListPlayersHandler::new()
            .handle(ListPlayers, &mock_uow, &config)
            .await?;

        assert_eq!(players.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
        Ok(())
    }
}
