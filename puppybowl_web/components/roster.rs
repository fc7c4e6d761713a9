use dioxus::prelude::*;

use puppybowl_types::player::Player;

/// One entry of the roster grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterCard {
    pub id: i64,
    pub name: String,
    pub image_url: String,
}

impl From<&Player> for RosterCard {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            image_url: player.image_src().to_string(),
        }
    }
}

/// The `#roster` region: one card per player, in roster order.
/// Following a card selects that player.
#[component]
pub fn RosterView(cards: Vec<RosterCard>) -> Element {
    rsx! {
        div { id: "roster", class: "roster",
            for card in cards {
                div { key: "{card.id}", class: "puppy-card",
                    a { href: "/players/{card.id}",
                        img { src: "{card.image_url}", alt: "{card.name}" }
                        p { "{card.name}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, name: &str) -> RosterCard {
        RosterCard {
            id,
            name: name.to_string(),
            image_url: format!("https://img.example/{}.png", id),
        }
    }

    fn render(cards: Vec<RosterCard>) -> String {
        dioxus_ssr::render_element(rsx! { RosterView { cards: cards } })
    }

    #[test]
    fn test_single_card() {
        let html = render(vec![card(1, "Fido")]);

        assert_eq!(html.matches("puppy-card").count(), 1);
        assert!(html.contains("Fido"));
        assert!(html.contains("href=\"/players/1\""));
        assert!(html.contains("src=\"https://img.example/1.png\""));
    }

    #[test]
    fn test_cards_keep_roster_order() {
        let html = render(vec![card(2, "Rex"), card(1, "Fido")]);

        let rex = html.find("Rex").unwrap();
        let fido = html.find("Fido").unwrap();
        assert!(rex < fido);
        assert_eq!(html.matches("puppy-card").count(), 2);
    }

    #[test]
    fn test_empty_roster_still_renders_region() {
        let html = render(vec![]);

        assert!(html.contains("id=\"roster\""));
        assert!(!html.contains("puppy-card"));
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render(vec![card(3, "<script>bad()</script>")]);

        assert!(!html.contains("<script>"));
    }
}
