#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };
    use uuid::Uuid;

    use roster_types::{
        errors::{ApplicationError, DbError},
        player::{NewPlayer, Player},
    };

    use crate::{
        repository::PlayerRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// In-memory player store. Clones share the same rows.
    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        players: Arc<Mutex<Vec<Player>>>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.players.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn create(&self, player: &NewPlayer) -> Result<Player, ApplicationError> {
            let now = Utc::now();
            let stored = Player {
                id: Uuid::new_v4(),
                name: player.name.clone(),
                age: player.age,
                role: player.role,
                team: player.team.clone(),
                created_at: now,
                updated_at: now,
            };
            self.players.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn list(&self) -> Result<Vec<Player>, ApplicationError> {
            Ok(self.players.lock().unwrap().clone())
        }

        async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
            let players = self.players.lock().unwrap();
            players
                .iter()
                .find(|p| p.id == player_id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::PlayerNotFound(player_id)))
        }

        async fn update(
            &self,
            player_id: Uuid,
            player: &NewPlayer,
        ) -> Result<Player, ApplicationError> {
            let mut players = self.players.lock().unwrap();
            let stored = players
                .iter_mut()
                .find(|p| p.id == player_id)
                .ok_or_else(|| ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;

            stored.name = player.name.clone();
            stored.age = player.age;
            stored.role = player.role;
            stored.team = player.team.clone();
            stored.updated_at = Utc::now();

            Ok(stored.clone())
        }

        async fn delete(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
            let mut players = self.players.lock().unwrap();
            let index = players
                .iter()
                .position(|p| p.id == player_id)
                .ok_or_else(|| ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;

            Ok(players.remove(index))
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        players: MockPlayerRepository,
        commits: Arc<AtomicUsize>,
        rollbacks: Arc<AtomicUsize>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            Arc::new(self.players.clone())
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            self.commits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.rollbacks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Hands out Units of Work over one shared in-memory store.
    /// Writes are applied immediately, so a rollback does not undo them.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        players: MockPlayerRepository,
        commits: Arc<AtomicUsize>,
        rollbacks: Arc<AtomicUsize>,
        unavailable: Arc<AtomicBool>,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self::default()
        }

        /// A provider whose store can't be reached: every `begin` fails.
        pub fn unavailable() -> Self {
            let provider = Self::default();
            provider.set_unavailable(true);
            provider
        }

        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        pub fn players(&self) -> MockPlayerRepository {
            self.players.clone()
        }

        pub fn commits(&self) -> usize {
            self.commits.load(Ordering::SeqCst)
        }

        pub fn rollbacks(&self) -> usize {
            self.rollbacks.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ApplicationError::Db(DbError::Transaction(
                    "connection refused".to_string(),
                )));
            }

            Ok(Box::new(MockUnitOfWork {
                players: self.players.clone(),
                commits: self.commits.clone(),
                rollbacks: self.rollbacks.clone(),
            }))
        }
    }
}
