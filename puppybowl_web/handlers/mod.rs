mod roster_handler;

pub use roster_handler::{create_player, home, remove_player, select_player};
