use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use roster_app::repository::PlayerRepository;
use roster_types::{
    errors::{ApplicationError, DbError},
    player::{NewPlayer, Player},
};

use crate::models::{self as db_models};

/// Implements PlayerRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresPlayerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPlayerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> PlayerRepository for PostgresPlayerRepository<'a> {
    async fn create(&self, player: &NewPlayer) -> Result<Player, ApplicationError> {
        let role: db_models::PlayerRole = player.role.into();
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(
            r#"
              INSERT INTO players (name, age, role, team, created_at, updated_at)
              SELECT $1, $2, $3, $4, ts, ts
              FROM (SELECT clock_timestamp() AS ts) AS stamp
              RETURNING id, name, age, role, team, created_at, updated_at
              "#,
        )
        .bind(&player.name)
        .bind(player.age)
        .bind(role)
        .bind(&player.team)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Player>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, db_models::Player>(
            r#"
              SELECT id, name, age, role, team, created_at, updated_at
              FROM players
              ORDER BY created_at, id
              "#,
        )
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(
            r#"
              SELECT id, name, age, role, team, created_at, updated_at
              FROM players
              WHERE id = $1
              "#,
        )
        .bind(player_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        player_id: Uuid,
        player: &NewPlayer,
    ) -> Result<Player, ApplicationError> {
        let role: db_models::PlayerRole = player.role.into();
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(
            r#"
              UPDATE players
              SET
                  name = $2,
                  age = $3,
                  role = $4,
                  team = $5,
                  updated_at = clock_timestamp()
              WHERE id = $1
              RETURNING id, name, age, role, team, created_at, updated_at
              "#,
        )
        .bind(player_id)
        .bind(&player.name)
        .bind(player.age)
        .bind(role)
        .bind(&player.team)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;

        Ok(row.into())
    }

    async fn delete(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(
            r#"
              DELETE FROM players
              WHERE id = $1
              RETURNING id, name, age, role, team, created_at, updated_at
              "#,
        )
        .bind(player_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;

        Ok(row.into())
    }
}
