use serde::Deserialize;
use thiserror::Error;

use puppybowl_types::player::{NewPlayer, PLAYER_STATUSES};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please provide a name and breed.")]
    MissingNameOrBreed,
}

/// Raw values of the new-puppy form, as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPlayerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
}

fn default_status() -> String {
    PLAYER_STATUSES[0].to_string()
}

impl Default for NewPlayerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            breed: String::new(),
            status: default_status(),
            image_url: String::new(),
        }
    }
}

impl NewPlayerForm {
    /// Trims the text fields and checks that name and breed are present.
    /// `status` is passed through as selected.
    pub fn validate(&self) -> Result<NewPlayer, FormError> {
        let name = self.name.trim();
        let breed = self.breed.trim();

        if name.is_empty() || breed.is_empty() {
            return Err(FormError::MissingNameOrBreed);
        }

        Ok(NewPlayer::new(
            name.to_string(),
            breed.to_string(),
            self.status.clone(),
            self.image_url.trim().to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, breed: &str, image_url: &str) -> NewPlayerForm {
        NewPlayerForm {
            name: name.to_string(),
            breed: breed.to_string(),
            status: "field".to_string(),
            image_url: image_url.to_string(),
        }
    }

    #[test]
    fn test_validate_trims_text_fields() {
        let new_player = form("  Rex ", " Lab", " http://img/rex.png ").validate().unwrap();
        assert_eq!(new_player.name, "Rex");
        assert_eq!(new_player.breed, "Lab");
        assert_eq!(new_player.status, "field");
        assert_eq!(new_player.image_url, "http://img/rex.png");
    }

    #[test]
    fn test_validate_rejects_blank_name_or_breed() {
        assert_eq!(
            form("   ", "Lab", "").validate(),
            Err(FormError::MissingNameOrBreed)
        );
        assert_eq!(
            form("Rex", "\t", "").validate(),
            Err(FormError::MissingNameOrBreed)
        );
        assert_eq!(
            FormError::MissingNameOrBreed.to_string(),
            "Please provide a name and breed."
        );
    }

    #[test]
    fn test_default_form_is_empty_on_bench() {
        let form = NewPlayerForm::default();
        assert!(form.name.is_empty());
        assert_eq!(form.status, "bench");
    }
}
