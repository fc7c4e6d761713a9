use dioxus::prelude::*;

use puppybowl_app::store::RosterSnapshot;

use super::{DetailsState, DetailsView, NewPlayerFormData, NewPuppyForm, RosterCard, RosterView};

#[derive(Debug, Clone, PartialEq)]
pub struct RosterPageData {
    pub cards: Vec<RosterCard>,
    pub details: DetailsState,
    pub form: NewPlayerFormData,
}

impl RosterPageData {
    pub fn new(snapshot: &RosterSnapshot, form: NewPlayerFormData) -> Self {
        Self {
            cards: snapshot.players.iter().map(RosterCard::from).collect(),
            details: DetailsState::from(snapshot.selected.as_ref()),
            form,
        }
    }
}

#[component]
pub fn RosterPage(data: RosterPageData) -> Element {
    rsx! {
        header { class: "header",
            h1 { a { href: "/", "Puppy Bowl" } }
        }
        main { class: "container",
            section { class: "form-section",
                h2 { "Add a Puppy" }
                NewPuppyForm { form: data.form.clone() }
            }
            section { class: "roster-section",
                h2 { "Roster" }
                RosterView { cards: data.cards.clone() }
            }
            section { class: "details-section",
                h2 { "Details" }
                DetailsView { state: data.details.clone() }
            }
        }
    }
}

/// Renders the whole page for the given state.
pub fn render_roster_page(data: RosterPageData) -> String {
    let body = dioxus_ssr::render_element(rsx! { RosterPage { data: data } });
    wrap_in_html(&body)
}

/// Wraps rendered body markup into a full HTML document.
pub fn wrap_in_html(body_content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Puppy Bowl</title>
<style>
body {{ font-family: sans-serif; margin: 0; background: #f7f7f7; }}
.header {{ background: #2d6a4f; color: #fff; padding: 0.5rem 1rem; }}
.header a {{ color: inherit; text-decoration: none; }}
.container {{ display: grid; grid-template-columns: 1fr 2fr 1fr; gap: 1rem; padding: 1rem; }}
.roster {{ display: flex; flex-wrap: wrap; gap: 0.75rem; }}
.puppy-card {{ width: 120px; background: #fff; border-radius: 6px; padding: 0.5rem; text-align: center; }}
.puppy-card a {{ color: inherit; text-decoration: none; }}
.puppy-card img, .details img {{ width: 100%; border-radius: 4px; }}
.alert {{ background: #fde2e1; color: #8a1c1c; padding: 0.5rem; margin-bottom: 0.5rem; }}
#new-puppy-form {{ display: flex; flex-direction: column; gap: 0.25rem; }}
</style>
</head>
<body>
{}
</body>
</html>"#,
        body_content
    )
}
