use std::sync::Arc;

use roster_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    uow::UnitOfWorkProvider,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Managing Unit of Work (transaction) lifecycles.
/// 2. Dispatching Commands and Queries to their respective handlers.
pub struct AppBus {
    config: Arc<Config>,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            config,
            uow_provider,
        }
    }

    /// Executes a command.
    /// A command is an operation that modifies the system state.
    /// This method manages the transaction:
    /// - It begins a Unit of Work.
    /// - It passes the UoW to the handler.
    /// - If the handler succeeds, it commits the UoW and returns the output.
    /// - If the handler fails, it rolls back the UoW.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let uow = self.uow_provider.begin().await?;

        match handler.handle(cmd, &uow, &self.config).await {
            Ok(output) => {
                uow.commit().await?;
                Ok(output)
            }
            Err(e) => {
                uow.rollback().await?;
                Err(e)
            }
        }
    }

    /// Executes a query.
    /// A query is an operation that reads system state and returns data.
    /// It should *never* modify the state.
    /// This method ensures the transaction is *always* rolled back.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let uow = self.uow_provider.begin().await?;

        let result = handler.handle(query, &uow, &self.config).await;

        uow.rollback().await?;

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use roster_types::{
        Result,
        player::{AgeInput, PlayerDraft},
    };

    use super::*;
    use crate::{
        command_handlers::CreatePlayerCommandHandler,
        cqrs::{commands::CreatePlayer, queries::ListPlayers},
        queries_handlers::ListPlayersHandler,
        test_utils::tests::MockUnitOfWorkProvider,
    };

    #[tokio::test]
    async fn test_execute_returns_command_output_and_persists() -> Result<()> {
        let provider = Arc::new(MockUnitOfWorkProvider::new());
        let bus = AppBus::new(Arc::new(Config::default()), provider.clone());

        let draft = PlayerDraft {
            name: Some("Kane Williamson".to_string()),
            age: Some(AgeInput::Text("34".to_string())),
            role: Some("Batsman".to_string()),
            team: Some("New Zealand".to_string()),
        };

        let created = bus
            .execute(CreatePlayer { draft }, CreatePlayerCommandHandler::new())
            .await?;
        let listed = bus.query(ListPlayers, ListPlayersHandler::new()).await?;

        assert_eq!(listed, vec![created]);
        assert_eq!(provider.commits(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_execute_rolls_back_on_failure() {
        let provider = Arc::new(MockUnitOfWorkProvider::new());
        let bus = AppBus::new(Arc::new(Config::default()), provider.clone());

        let result = bus
            .execute(
                CreatePlayer {
                    draft: PlayerDraft::default(),
                },
                CreatePlayerCommandHandler::new(),
            )
            .await;

        assert!(result.is_err());
        assert_eq!(provider.commits(), 0);
        assert_eq!(provider.rollbacks(), 1);
    }
}
