use dioxus::prelude::*;

use puppybowl_types::player::Player;

/// Everything the detail panel shows about the selected player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDetail {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub team_name: String,
    pub image_url: String,
}

impl From<&Player> for PlayerDetail {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            breed: player.breed.clone(),
            status: player.status.clone(),
            team_name: player.team_name().to_string(),
            image_url: player.image_src().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    NoSelection,
    Selected(PlayerDetail),
}

impl From<Option<&Player>> for DetailsState {
    fn from(selected: Option<&Player>) -> Self {
        match selected {
            Some(player) => DetailsState::Selected(player.into()),
            None => DetailsState::NoSelection,
        }
    }
}

/// The `#details` region.
#[component]
pub fn DetailsView(state: DetailsState) -> Element {
    rsx! {
        div { id: "details", class: "details",
            match state {
                DetailsState::NoSelection => rsx! {
                    p { "Select a puppy to view details." }
                },
                DetailsState::Selected(player) => rsx! {
                    img { src: "{player.image_url}", alt: "{player.name}" }
                    p { strong { "Name:" } " {player.name}" }
                    p { strong { "ID:" } " {player.id}" }
                    p { strong { "Breed:" } " {player.breed}" }
                    p { strong { "Team:" } " {player.team_name}" }
                    p { strong { "Status:" } " {player.status}" }
                    form { method: "post", action: "/players/{player.id}/remove",
                        button { id: "remove-btn", r#type: "submit", "Remove from roster" }
                    }
                },
            }
        }
    }
}
