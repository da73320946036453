use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "player_role")]
pub enum PlayerRole {
    Batsman,
    Bowler,
    #[sqlx(rename = "All-rounder")]
    AllRounder,
    Wicketkeeper,
}

#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub role: PlayerRole,
    pub team: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
