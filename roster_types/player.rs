use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::errors::{AppError, FieldError, ValidationError};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    #[default]
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    Wicketkeeper,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 4] = [
        PlayerRole::Batsman,
        PlayerRole::Bowler,
        PlayerRole::AllRounder,
        PlayerRole::Wicketkeeper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-rounder",
            PlayerRole::Wicketkeeper => "Wicketkeeper",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("`{s}` is not a valid role"))
    }
}

/// A stored roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub role: PlayerRole,
    pub team: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated player fields, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub age: i32,
    pub role: PlayerRole,
    pub team: String,
}

/// Age as it arrives on the wire: JSON clients send numbers, forms send text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(serde_json::Number),
    Text(String),
}

/// Unvalidated player fields from a create or update request.
///
/// Every field is optional so that a missing field becomes a validation
/// error instead of a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: Option<String>,
    pub age: Option<AgeInput>,
    pub role: Option<String>,
    pub team: Option<String>,
}

impl PlayerDraft {
    /// Checks every field and returns the normalized record, or all the
    /// problems found at once.
    pub fn validate(&self) -> Result<NewPlayer, ValidationError> {
        let mut errors = Vec::new();

        let name = required_text("name", self.name.as_deref(), &mut errors);
        let age = self.validated_age(&mut errors);
        let role = self.validated_role(&mut errors);
        let team = required_text("team", self.team.as_deref(), &mut errors);

        match (name, age, role, team) {
            (Some(name), Some(age), Some(role), Some(team)) => Ok(NewPlayer {
                name,
                age,
                role,
                team,
            }),
            _ => Err(ValidationError { errors }),
        }
    }

    fn validated_age(&self, errors: &mut Vec<FieldError>) -> Option<i32> {
        let result = match &self.age {
            None => Err(required("age")),
            Some(AgeInput::Number(n)) => whole_number(n).ok_or_else(|| FieldError {
                field: "age",
                message: format!("{n} is not a whole number in range"),
            }),
            Some(AgeInput::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    Err(required("age"))
                } else {
                    text.parse::<i32>().map_err(|_| FieldError {
                        field: "age",
                        message: format!("`{text}` is not a valid age"),
                    })
                }
            }
        };

        result.map_err(|e| errors.push(e)).ok()
    }

    fn validated_role(&self, errors: &mut Vec<FieldError>) -> Option<PlayerRole> {
        let result = match self.role.as_deref() {
            None | Some("") => Err(required("role")),
            Some(raw) => raw.parse::<PlayerRole>().map_err(|message| FieldError {
                field: "role",
                message,
            }),
        };

        result.map_err(|e| errors.push(e)).ok()
    }
}

/// Parses a player id coming from a URL segment.
pub fn parse_player_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::MalformedPlayerId(raw.to_string()))
}

/// Integral JSON numbers that fit `i32`, including float spellings like `30.0`.
fn whole_number(n: &serde_json::Number) -> Option<i32> {
    if let Some(value) = n.as_i64() {
        return i32::try_from(value).ok();
    }

    let value = n.as_f64()?;
    let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value);
    (value.fract() == 0.0 && in_range).then_some(value as i32)
}

fn required(field: &'static str) -> FieldError {
    FieldError {
        field,
        message: format!("{field} is required"),
    }
}

fn required_text(
    field: &'static str,
    value: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            errors.push(required(field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: serde_json::Value) -> PlayerDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_validate_complete_draft() {
        let player = draft(json!({
            "name": "  Virat Kohli ",
            "age": 35,
            "role": "Batsman",
            "team": "India"
        }))
        .validate()
        .unwrap();

        assert_eq!(player.name, "Virat Kohli");
        assert_eq!(player.age, 35);
        assert_eq!(player.role, PlayerRole::Batsman);
        assert_eq!(player.team, "India");
    }

    #[test]
    fn test_validate_accepts_numeric_age_text() {
        let player = draft(json!({
            "name": "Rashid Khan",
            "age": "25",
            "role": "All-rounder",
            "team": "Afghanistan"
        }))
        .validate()
        .unwrap();

        assert_eq!(player.age, 25);
        assert_eq!(player.role, PlayerRole::AllRounder);
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let err = PlayerDraft::default().validate().unwrap_err();

        assert_eq!(err.fields(), vec!["name", "age", "role", "team"]);
        assert_eq!(
            err.to_string(),
            "Player validation failed: name: name is required, age: age is required, \
             role: role is required, team: team is required"
        );
    }

    #[test]
    fn test_validate_rejects_unknown_role() {
        let err = draft(json!({
            "name": "MS Dhoni",
            "age": 42,
            "role": "Captain",
            "team": "India"
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err.fields(), vec!["role"]);
        assert!(err.to_string().contains("`Captain` is not a valid role"));
    }

    #[test]
    fn test_validate_rejects_blank_text_and_bad_age() {
        let err = draft(json!({
            "name": "   ",
            "age": 27.5,
            "role": "Bowler",
            "team": ""
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err.fields(), vec!["name", "age", "team"]);
    }

    #[test]
    fn test_validate_accepts_integral_float_age() {
        let player = draft(json!({
            "name": "Kane Williamson",
            "age": 30.0,
            "role": "Batsman",
            "team": "New Zealand"
        }))
        .validate()
        .unwrap();

        assert_eq!(player.age, 30);
    }

    #[test]
    fn test_validate_rejects_out_of_range_age() {
        let err = draft(json!({
            "name": "Kane Williamson",
            "age": 3_000_000_000_i64,
            "role": "Batsman",
            "team": "New Zealand"
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err.fields(), vec!["age"]);
        assert!(err.to_string().contains("3000000000 is not a whole number in range"));
    }

    #[test]
    fn test_validate_rejects_non_numeric_age_text() {
        let err = draft(json!({
            "name": "Jasprit Bumrah",
            "age": "thirty",
            "role": "Bowler",
            "team": "India"
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err.fields(), vec!["age"]);
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_value(PlayerRole::AllRounder).unwrap(),
            json!("All-rounder")
        );
        assert_eq!(
            "Wicketkeeper".parse::<PlayerRole>(),
            Ok(PlayerRole::Wicketkeeper)
        );
        assert!("batsman".parse::<PlayerRole>().is_err());
    }

    #[test]
    fn test_player_serializes_camel_case() {
        let now = Utc::now();
        let player = Player {
            id: Uuid::new_v4(),
            name: "Joe Root".to_string(),
            age: 33,
            role: PlayerRole::Batsman,
            team: "England".to_string(),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&player).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["role"], json!("Batsman"));
    }

    #[test]
    fn test_parse_player_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_player_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_player_id("not-an-id"),
            Err(AppError::MalformedPlayerId(raw)) if raw == "not-an-id"
        ));
    }
}
