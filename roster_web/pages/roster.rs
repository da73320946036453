use dioxus::prelude::*;

use roster_types::player::{Player, PlayerRole};

/// One-shot message shown above the roster after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    AddFailed,
    UpdateFailed,
    DeleteFailed,
    FetchFailed,
}

impl Notice {
    const ALL: [Notice; 7] = [
        Notice::Added,
        Notice::Updated,
        Notice::Deleted,
        Notice::AddFailed,
        Notice::UpdateFailed,
        Notice::DeleteFailed,
        Notice::FetchFailed,
    ];

    /// Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|notice| notice.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Notice::Added => "added",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::AddFailed => "add_failed",
            Notice::UpdateFailed => "update_failed",
            Notice::DeleteFailed => "delete_failed",
            Notice::FetchFailed => "fetch_failed",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::Added => "Player added successfully",
            Notice::Updated => "Player updated successfully",
            Notice::Deleted => "Player deleted successfully",
            Notice::AddFailed => "Failed to add player",
            Notice::UpdateFailed => "Failed to update player",
            Notice::DeleteFailed => "Failed to delete player",
            Notice::FetchFailed => "Failed to fetch players",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::AddFailed | Notice::UpdateFailed | Notice::DeleteFailed | Notice::FetchFailed
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub role: String,
    pub team: String,
}

impl From<&Player> for PlayerRow {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.to_string(),
            name: player.name.clone(),
            age: player.age,
            role: player.role.to_string(),
            team: player.team.clone(),
        }
    }
}

/// The single add/edit draft bound to the modal form.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerFormView {
    pub action: String,
    pub title: String,
    pub submit_label: String,
    pub name: String,
    pub age: String,
    pub role: String,
    pub team: String,
}

impl PlayerFormView {
    pub fn blank() -> Self {
        Self {
            action: "/roster".to_string(),
            title: "Add New Player".to_string(),
            submit_label: "Add Player".to_string(),
            name: String::new(),
            age: String::new(),
            role: PlayerRole::default().to_string(),
            team: String::new(),
        }
    }

    pub fn editing(player: &Player) -> Self {
        Self {
            action: format!("/roster/{}", player.id),
            title: "Edit Player".to_string(),
            submit_label: "Update Player".to_string(),
            name: player.name.clone(),
            age: player.age.to_string(),
            role: player.role.to_string(),
            team: player.team.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterPageData {
    pub players: Vec<PlayerRow>,
    pub notice: Option<Notice>,
    pub form: Option<PlayerFormView>,
}

#[component]
pub fn RosterPage(data: RosterPageData) -> Element {
    rsx! {
        div { class: "roster",
            div { class: "roster-header",
                h1 { "Cricket Squad Manager" }
                a { class: "button", href: "/?new=1", "Add Player" }
            }

            if let Some(notice) = data.notice {
                NoticeBanner { notice: notice }
            }

            PlayerTable { players: data.players.clone() }

            if let Some(draft) = data.form.clone() {
                PlayerFormModal { draft: draft }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice) -> Element {
    let class = if notice.is_error() {
        "notice notice-error"
    } else {
        "notice notice-success"
    };

    rsx! {
        div { class: "{class}", "{notice.message()}" }
    }
}

#[component]
fn PlayerTable(players: Vec<PlayerRow>) -> Element {
    rsx! {
        table { class: "roster-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Age" }
                    th { "Role" }
                    th { "Team" }
                    th { class: "actions", "Actions" }
                }
            }
            if players.is_empty() {
                tbody {
                    tr {
                        td { class: "empty", colspan: "5", "No players yet." }
                    }
                }
            } else {
                tbody {
                    for player in players {
                        tr {
                            td { class: "name", "{player.name}" }
                            td { "{player.age}" }
                            td { "{player.role}" }
                            td { "{player.team}" }
                            td { class: "actions",
                                a { class: "button button-secondary", href: "/?edit={player.id}", "Edit" }
                                form { method: "post", action: "/roster/{player.id}/delete",
                                    button { r#type: "submit", class: "button button-danger", "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlayerFormModal(draft: PlayerFormView) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            dialog { class: "modal", open: true,
                div { class: "modal-header",
                    h2 { "{draft.title}" }
                    a { class: "modal-close", href: "/", "Close" }
                }
                form { method: "post", action: "{draft.action}",
                    label { r#for: "name", "Name" }
                    input { id: "name", name: "name", r#type: "text", required: true, value: "{draft.name}" }

                    label { r#for: "age", "Age" }
                    input { id: "age", name: "age", r#type: "number", required: true, value: "{draft.age}" }

                    label { r#for: "role", "Role" }
                    select { id: "role", name: "role",
                        for role in PlayerRole::ALL {
                            option { value: "{role}", selected: draft.role == role.as_str(), "{role}" }
                        }
                    }

                    label { r#for: "team", "Team" }
                    input { id: "team", name: "team", r#type: "text", required: true, value: "{draft.team}" }

                    div { class: "modal-actions",
                        a { class: "button button-secondary", href: "/", "Cancel" }
                        button { r#type: "submit", class: "button", "{draft.submit_label}" }
                    }
                }
            }
        }
    }
}
