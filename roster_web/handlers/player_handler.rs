use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde_json::{Value, json};
use uuid::Uuid;

use roster_app::{
    command_handlers::{
        CreatePlayerCommandHandler, DeletePlayerCommandHandler, UpdatePlayerCommandHandler,
    },
    cqrs::{
        commands::{CreatePlayer, DeletePlayer, UpdatePlayer},
        queries::{GetPlayerById, ListPlayers},
    },
    queries_handlers::{GetPlayerByIdHandler, ListPlayersHandler},
};
use roster_types::{
    errors::ApplicationError,
    player::{Player, PlayerDraft, parse_player_id},
};

use crate::{handlers::ApiError, http::AppState};

const CREATE_FAILURE: StatusCode = StatusCode::BAD_REQUEST;
const LIST_FAILURE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
const GET_FAILURE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
const UPDATE_FAILURE: StatusCode = StatusCode::BAD_REQUEST;
const DELETE_FAILURE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

type JsonDraft = WithRejection<Json<PlayerDraft>, ApiError>;

/// POST /players
pub async fn create_player(
    State(state): State<AppState>,
    WithRejection(Json(draft), _): JsonDraft,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let player = state
        .app_bus
        .execute(CreatePlayer { draft }, CreatePlayerCommandHandler::new())
        .await
        .map_err(|e| ApiError::from_app_error(e, CREATE_FAILURE))?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /players
pub async fn list_players(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ApiError> {
    let players = state
        .app_bus
        .query(ListPlayers, ListPlayersHandler::new())
        .await
        .map_err(|e| ApiError::from_app_error(e, LIST_FAILURE))?;

    Ok(Json(players))
}

/// GET /players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player_id = parse_id(&id, GET_FAILURE)?;
    let player = state
        .app_bus
        .query(GetPlayerById { player_id }, GetPlayerByIdHandler::new())
        .await
        .map_err(|e| ApiError::from_app_error(e, GET_FAILURE))?;

    Ok(Json(player))
}

/// PUT /players/{id}
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(draft), _): JsonDraft,
) -> Result<Json<Player>, ApiError> {
    let player_id = parse_id(&id, UPDATE_FAILURE)?;
    let player = state
        .app_bus
        .execute(
            UpdatePlayer { player_id, draft },
            UpdatePlayerCommandHandler::new(),
        )
        .await
        .map_err(|e| ApiError::from_app_error(e, UPDATE_FAILURE))?;

    Ok(Json(player))
}

/// DELETE /players/{id}
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let player_id = parse_id(&id, DELETE_FAILURE)?;
    let player = state
        .app_bus
        .execute(DeletePlayer { player_id }, DeletePlayerCommandHandler::new())
        .await
        .map_err(|e| ApiError::from_app_error(e, DELETE_FAILURE))?;

    tracing::info!(player_id = %player.id, "Deleted player {}", player.name);
    Ok(Json(json!({ "message": "Player deleted successfully" })))
}

/// A malformed id is reported with the operation's failure status.
fn parse_id(raw: &str, failure_status: StatusCode) -> Result<Uuid, ApiError> {
    parse_player_id(raw)
        .map_err(|e| ApiError::from_app_error(ApplicationError::from(e), failure_status))
}
