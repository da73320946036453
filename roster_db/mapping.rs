use roster_types::player::{Player, PlayerRole};

use crate::models as db_models;

impl From<db_models::PlayerRole> for PlayerRole {
    fn from(role: db_models::PlayerRole) -> Self {
        match role {
            db_models::PlayerRole::Batsman => PlayerRole::Batsman,
            db_models::PlayerRole::Bowler => PlayerRole::Bowler,
            db_models::PlayerRole::AllRounder => PlayerRole::AllRounder,
            db_models::PlayerRole::Wicketkeeper => PlayerRole::Wicketkeeper,
        }
    }
}

impl From<PlayerRole> for db_models::PlayerRole {
    fn from(role: PlayerRole) -> Self {
        match role {
            PlayerRole::Batsman => db_models::PlayerRole::Batsman,
            PlayerRole::Bowler => db_models::PlayerRole::Bowler,
            PlayerRole::AllRounder => db_models::PlayerRole::AllRounder,
            PlayerRole::Wicketkeeper => db_models::PlayerRole::Wicketkeeper,
        }
    }
}

impl From<db_models::Player> for Player {
    fn from(player: db_models::Player) -> Self {
        Player {
            id: player.id,
            name: player.name,
            age: player.age,
            role: player.role.into(),
            team: player.team,
            created_at: player.created_at,
            updated_at: player.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mapping_is_lossless() {
        for role in PlayerRole::ALL {
            let db_role: db_models::PlayerRole = role.into();
            assert_eq!(PlayerRole::from(db_role), role);
        }
    }
}
