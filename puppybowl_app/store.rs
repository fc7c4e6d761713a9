use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use puppybowl_types::player::{Player, PlayerId};

/// Point-in-time copy of the roster state, used for rendering.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RosterSnapshot {
    pub players: Vec<Player>,
    pub selected: Option<Player>,
}

/// Owns the last fetched roster and the current selection.
///
/// Locks are only held for the duration of a read or a write, never across a
/// network call: whichever response lands last wins.
#[derive(Debug, Default)]
pub struct RosterStore {
    state: RwLock<RosterSnapshot>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> Vec<Player> {
        self.read().players.clone()
    }

    pub fn selected(&self) -> Option<Player> {
        self.read().selected.clone()
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        self.read().clone()
    }

    /// Replaces the roster wholesale. The selection is left alone.
    pub fn replace_players(&self, players: Vec<Player>) {
        self.write().players = players;
    }

    pub fn select(&self, player: Player) {
        self.write().selected = Some(player);
    }

    /// Drops `id` from the roster and clears the selection.
    pub fn remove(&self, id: PlayerId) {
        let mut state = self.write();
        state.players.retain(|player| player.id != id);
        state.selected = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, RosterSnapshot> {
        self.state.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, RosterSnapshot> {
        self.state.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tests::player_factory;

    #[test]
    fn test_replace_players_keeps_selection() {
        let store = RosterStore::new();
        store.select(player_factory(9, "Old"));

        store.replace_players(vec![player_factory(1, "Fido"), player_factory(2, "Rex")]);

        assert_eq!(store.players().len(), 2);
        assert_eq!(store.selected().map(|p| p.id), Some(9));
    }

    #[test]
    fn test_remove_filters_roster_and_clears_selection() {
        let store = RosterStore::new();
        store.replace_players(vec![player_factory(1, "Fido"), player_factory(2, "Rex")]);
        store.select(player_factory(1, "Fido"));

        store.remove(1);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.players, vec![player_factory(2, "Rex")]);
        assert!(snapshot.selected.is_none());
    }

    #[test]
    fn test_remove_unknown_id_still_clears_selection() {
        let store = RosterStore::new();
        store.replace_players(vec![player_factory(1, "Fido")]);
        store.select(player_factory(1, "Fido"));

        store.remove(42);

        assert_eq!(store.players().len(), 1);
        assert!(store.selected().is_none());
    }
}
