pub mod details;
pub mod layout;
pub mod new_player_form;
pub mod roster;

pub use details::{DetailsState, DetailsView, PlayerDetail};
pub use layout::{RosterPage, RosterPageData, render_roster_page, wrap_in_html};
pub use new_player_form::{NewPlayerFormData, NewPuppyForm};
pub use roster::{RosterCard, RosterView};
