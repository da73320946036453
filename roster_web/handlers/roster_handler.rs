use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use dioxus::prelude::*;
use serde::Deserialize;

use roster_app::{
    command_handlers::{
        CreatePlayerCommandHandler, DeletePlayerCommandHandler, UpdatePlayerCommandHandler,
    },
    cqrs::{
        commands::{CreatePlayer, DeletePlayer, UpdatePlayer},
        queries::ListPlayers,
    },
    queries_handlers::ListPlayersHandler,
};
use roster_types::player::{AgeInput, PlayerDraft, parse_player_id};

use crate::{
    components::{LayoutBody, wrap_in_html_shell},
    http::AppState,
    pages::{Notice, PlayerFormView, PlayerRow, RosterPage, RosterPageData},
};

#[derive(Debug, Default, Deserialize)]
pub struct RosterParams {
    pub notice: Option<String>,
    pub edit: Option<String>,
    pub new: Option<String>,
}

/// Fields posted by the add/edit form. Everything arrives as text.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerFormData {
    pub name: String,
    pub age: String,
    pub role: String,
    pub team: String,
}

impl From<PlayerFormData> for PlayerDraft {
    fn from(form: PlayerFormData) -> Self {
        PlayerDraft {
            name: Some(form.name),
            age: Some(AgeInput::Text(form.age)),
            role: Some(form.role),
            team: Some(form.team),
        }
    }
}

/// GET / - the roster, optionally with the add or edit form open.
pub async fn roster_page(
    State(state): State<AppState>,
    Query(params): Query<RosterParams>,
) -> impl IntoResponse {
    let mut notice = params.notice.as_deref().and_then(Notice::from_code);

    let players = match state
        .app_bus
        .query(ListPlayers, ListPlayersHandler::new())
        .await
    {
        Ok(players) => players,
        Err(e) => {
            tracing::error!("Failed to fetch players: {}", e);
            notice = Some(Notice::FetchFailed);
            Vec::new()
        }
    };

    let form = match (params.edit, params.new) {
        (Some(edit_id), _) => players
            .iter()
            .find(|p| p.id.to_string() == edit_id)
            .map(PlayerFormView::editing),
        (None, Some(_)) => Some(PlayerFormView::blank()),
        (None, None) => None,
    };

    let data = RosterPageData {
        players: players.iter().map(PlayerRow::from).collect(),
        notice,
        form,
    };

    let body_content = dioxus_ssr::render_element(rsx! {
        LayoutBody {
            RosterPage { data: data }
        }
    });

    Html(wrap_in_html_shell(&body_content))
}

/// POST /roster - add form submit.
pub async fn roster_create(
    State(state): State<AppState>,
    Form(form): Form<PlayerFormData>,
) -> impl IntoResponse {
    let notice = match state
        .app_bus
        .execute(
            CreatePlayer { draft: form.into() },
            CreatePlayerCommandHandler::new(),
        )
        .await
    {
        Ok(_) => Notice::Added,
        Err(e) => {
            tracing::warn!("Failed to add player: {}", e);
            Notice::AddFailed
        }
    };

    redirect_with(notice)
}

/// POST /roster/{id} - edit form submit.
pub async fn roster_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<PlayerFormData>,
) -> impl IntoResponse {
    let player_id = match parse_player_id(&id) {
        Ok(player_id) => player_id,
        Err(e) => {
            tracing::warn!("Failed to update player: {}", e);
            return redirect_with(Notice::UpdateFailed);
        }
    };

    let notice = match state
        .app_bus
        .execute(
            UpdatePlayer {
                player_id,
                draft: form.into(),
            },
            UpdatePlayerCommandHandler::new(),
        )
        .await
    {
        Ok(_) => Notice::Updated,
        Err(e) => {
            tracing::warn!("Failed to update player {player_id}: {}", e);
            Notice::UpdateFailed
        }
    };

    redirect_with(notice)
}

/// POST /roster/{id}/delete - delete button.
pub async fn roster_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let player_id = match parse_player_id(&id) {
        Ok(player_id) => player_id,
        Err(e) => {
            tracing::warn!("Failed to delete player: {}", e);
            return redirect_with(Notice::DeleteFailed);
        }
    };

    let notice = match state
        .app_bus
        .execute(DeletePlayer { player_id }, DeletePlayerCommandHandler::new())
        .await
    {
        Ok(_) => Notice::Deleted,
        Err(e) => {
            tracing::warn!("Failed to delete player {player_id}: {}", e);
            Notice::DeleteFailed
        }
    };

    redirect_with(notice)
}

fn redirect_with(notice: Notice) -> Redirect {
    Redirect::to(&format!("/?notice={}", notice.code()))
}
