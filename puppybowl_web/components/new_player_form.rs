use dioxus::prelude::*;

use puppybowl_app::forms::NewPlayerForm;
use puppybowl_types::player::PLAYER_STATUSES;

/// Values echoed back into the creation form, plus the validation alert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPlayerFormData {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
    pub alert: Option<String>,
}

impl NewPlayerFormData {
    /// An empty form, as after a reset.
    pub fn blank() -> Self {
        Self::from(&NewPlayerForm::default())
    }

    pub fn with_alert(mut self, message: impl Into<String>) -> Self {
        self.alert = Some(message.into());
        self
    }
}

impl From<&NewPlayerForm> for NewPlayerFormData {
    fn from(form: &NewPlayerForm) -> Self {
        Self {
            name: form.name.clone(),
            breed: form.breed.clone(),
            status: form.status.clone(),
            image_url: form.image_url.clone(),
            alert: None,
        }
    }
}

#[component]
pub fn NewPuppyForm(form: NewPlayerFormData) -> Element {
    rsx! {
        if let Some(message) = &form.alert {
            div { role: "alert", class: "alert", "{message}" }
        }
        form { id: "new-puppy-form", method: "post", action: "/players",
            label { r#for: "name", "Name" }
            input { id: "name", name: "name", r#type: "text", value: "{form.name}" }
            label { r#for: "breed", "Breed" }
            input { id: "breed", name: "breed", r#type: "text", value: "{form.breed}" }
            label { r#for: "status", "Status" }
            select { id: "status", name: "status",
                for status in PLAYER_STATUSES {
                    if status == form.status {
                        option { key: "{status}", value: "{status}", selected: "selected", "{status}" }
                    } else {
                        option { key: "{status}", value: "{status}", "{status}" }
                    }
                }
            }
            label { r#for: "imageUrl", "Image URL" }
            input { id: "imageUrl", name: "imageUrl", r#type: "text", value: "{form.image_url}" }
            button { r#type: "submit", "Add Puppy" }
        }
    }
}
