use serde::{Deserialize, Serialize};

/// Identity assigned to a player by the remote service.
pub type PlayerId = i64;

/// Image used for new players submitted without an image URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://cdn-icons-png.flaticon.com/512/616/616408.png";

/// Team label shown when a player has no team attached.
pub const UNASSIGNED_TEAM: &str = "Unassigned";

/// Roster statuses accepted by the remote API, default first.
pub const PLAYER_STATUSES: [&str; 2] = ["bench", "field"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

/// A puppy on the roster, as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub team: Option<Team>,
}

impl Player {
    /// Returns the image source for the player, empty when the API sent none.
    pub fn image_src(&self) -> &str {
        self.image_url.as_deref().unwrap_or_default()
    }

    /// Returns the team name, falling back to [`UNASSIGNED_TEAM`].
    pub fn team_name(&self) -> &str {
        self.team
            .as_ref()
            .map(|team| team.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNASSIGNED_TEAM)
    }
}

/// Fields sent to the remote API when creating a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}

impl NewPlayer {
    pub fn new(name: String, breed: String, status: String, image_url: String) -> Self {
        Self {
            name,
            breed,
            status,
            image_url,
        }
    }

    /// Replaces a blank image URL with `placeholder`.
    pub fn with_default_image(mut self, placeholder: &str) -> Self {
        if self.image_url.trim().is_empty() {
            self.image_url = placeholder.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_decodes_camel_case_and_ignores_extra_fields() {
        let raw = json!({
            "id": 7,
            "name": "Fido",
            "breed": "Beagle",
            "status": "field",
            "imageUrl": "http://img/fido.png",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "teamId": 3,
            "cohortId": 42,
            "team": { "id": 3, "name": "Ruff" }
        });

        let player: Player = serde_json::from_value(raw).unwrap();
        assert_eq!(player.id, 7);
        assert_eq!(player.image_src(), "http://img/fido.png");
        assert_eq!(player.team_name(), "Ruff");
    }

    #[test]
    fn test_team_name_falls_back_to_unassigned() {
        let raw = json!({
            "id": 1,
            "name": "Rex",
            "breed": "Lab",
            "status": "bench",
            "imageUrl": null,
            "team": null
        });

        let mut player: Player = serde_json::from_value(raw).unwrap();
        assert_eq!(player.team_name(), UNASSIGNED_TEAM);
        assert_eq!(player.image_src(), "");

        player.team = Some(Team {
            id: None,
            name: String::new(),
        });
        assert_eq!(player.team_name(), UNASSIGNED_TEAM);
    }

    #[test]
    fn test_player_missing_required_field_is_rejected() {
        let raw = json!({ "id": 1, "name": "Rex", "status": "bench" });
        assert!(serde_json::from_value::<Player>(raw).is_err());
    }

    #[test]
    fn test_new_player_defaults_blank_image() {
        let new_player = NewPlayer::new(
            "Rex".to_string(),
            "Lab".to_string(),
            "bench".to_string(),
            "   ".to_string(),
        )
        .with_default_image(PLACEHOLDER_IMAGE_URL);
        assert_eq!(new_player.image_url, PLACEHOLDER_IMAGE_URL);

        let body = serde_json::to_value(&new_player).unwrap();
        assert_eq!(body["imageUrl"], PLACEHOLDER_IMAGE_URL);
        assert_eq!(body["name"], "Rex");
    }

    #[test]
    fn test_new_player_keeps_given_image() {
        let new_player = NewPlayer::new(
            "Rex".to_string(),
            "Lab".to_string(),
            "field".to_string(),
            "http://img/rex.png".to_string(),
        )
        .with_default_image(PLACEHOLDER_IMAGE_URL);
        assert_eq!(new_player.image_url, "http://img/rex.png");
    }
}
