use std::sync::Arc;

use puppybowl_types::player::PlayerId;

use crate::{
    forms::{FormError, NewPlayerForm},
    repository::RosterApi,
    store::{RosterSnapshot, RosterStore},
};

/// Result of a new-puppy form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The player was sent and the roster refreshed; the form can be reset.
    Created,
    /// Validation failed before any network call; show the alert.
    Rejected(FormError),
    /// The creation request failed; the form keeps its values.
    Failed,
}

/// Ties the remote roster API to the local store.
///
/// Every remote failure is logged here and swallowed: the store keeps
/// whatever it held before the call.
pub struct RosterApp {
    api: Arc<dyn RosterApi>,
    store: RosterStore,
}

impl RosterApp {
    pub fn new(api: Arc<dyn RosterApi>) -> Self {
        Self {
            api,
            store: RosterStore::new(),
        }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        self.store.snapshot()
    }

    /// Initial load. The detail view starts on its placeholder.
    pub async fn bootstrap(&self) {
        self.load_roster().await;
        tracing::info!(
            "Roster bootstrapped with {} players",
            self.store.players().len()
        );
    }

    pub async fn load_roster(&self) {
        match self.api.list_players().await {
            Ok(players) => {
                tracing::debug!("Fetched {} players", players.len());
                self.store.replace_players(players);
            }
            Err(e) => tracing::error!("Error fetching players: {}", e),
        }
    }

    pub async fn select_player(&self, id: PlayerId) {
        match self.api.get_player(id).await {
            Ok(player) => {
                tracing::debug!("Selected player {} ({})", player.id, player.name);
                self.store.select(player);
            }
            Err(e) => tracing::error!("Error fetching player {}: {}", id, e),
        }
    }

    /// Deletes `id` remotely, then drops it locally and clears the selection.
    /// The response is not inspected, only a transport failure aborts.
    pub async fn remove_player(&self, id: PlayerId) {
        match self.api.delete_player(id).await {
            Ok(()) => {
                tracing::debug!("Removed player {}", id);
                self.store.remove(id);
            }
            Err(e) => tracing::error!("Error removing player {}: {}", id, e),
        }
    }

    pub async fn submit_new_player(&self, form: &NewPlayerForm) -> SubmitOutcome {
        let new_player = match form.validate() {
            Ok(new_player) => new_player,
            Err(e) => {
                tracing::debug!("Rejected new player form: {}", e);
                return SubmitOutcome::Rejected(e);
            }
        };

        if let Err(e) = self.api.create_player(&new_player).await {
            tracing::error!("Error adding puppy {}: {}", new_player.name, e);
            return SubmitOutcome::Failed;
        }

        tracing::info!("Added puppy {}", new_player.name);
        self.load_roster().await;
        SubmitOutcome::Created
    }
}
