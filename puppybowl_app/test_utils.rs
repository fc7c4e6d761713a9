#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    };

    use puppybowl_types::{
        errors::{ApiError, ApplicationError},
        player::{NewPlayer, Player, PlayerId},
    };

    use crate::repository::RosterApi;

    /// A call received by [`MockRosterApi`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum ApiCall {
        List,
        Get(PlayerId),
        Delete(PlayerId),
        Create(NewPlayer),
    }

    /// In-memory roster standing in for the remote API.
    #[derive(Default, Clone)]
    pub struct MockRosterApi {
        players: Arc<Mutex<Vec<Player>>>,
        calls: Arc<Mutex<Vec<ApiCall>>>,
        failing: Arc<AtomicBool>,
    }

    impl MockRosterApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_players(players: Vec<Player>) -> Self {
            let api = Self::new();
            *api.players.lock().unwrap() = players;
            api
        }

        /// Makes every following call fail as if the network were down.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn calls(&self) -> Vec<ApiCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn players(&self) -> Vec<Player> {
            self.players.lock().unwrap().clone()
        }

        fn record(&self, call: ApiCall, operation: &'static str) -> Result<(), ApplicationError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ApiError::Transport {
                    operation,
                    reason: "connection refused".to_string(),
                }
                .into());
            }
            self.calls.lock().unwrap().push(call);
            Ok(())
        }
    }

    #[async_trait]
    impl RosterApi for MockRosterApi {
        async fn list_players(&self) -> Result<Vec<Player>, ApplicationError> {
            self.record(ApiCall::List, "list players")?;
            Ok(self.players())
        }

        async fn get_player(&self, id: PlayerId) -> Result<Player, ApplicationError> {
            self.record(ApiCall::Get(id), "get player")?;
            self.players()
                .into_iter()
                .find(|p| p.id == id)
                .ok_or_else(|| {
                    ApiError::Remote {
                        operation: "get player",
                        message: format!("Player {} not found", id),
                    }
                    .into()
                })
        }

        async fn delete_player(&self, id: PlayerId) -> Result<(), ApplicationError> {
            self.record(ApiCall::Delete(id), "delete player")?;
            self.players.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }

        async fn create_player(&self, player: &NewPlayer) -> Result<(), ApplicationError> {
            self.record(ApiCall::Create(player.clone()), "create player")?;
            let mut players = self.players.lock().unwrap();
            let id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            players.push(Player {
                id,
                name: player.name.clone(),
                breed: player.breed.clone(),
                status: player.status.clone(),
                image_url: Some(player.image_url.clone()),
                team: None,
            });
            Ok(())
        }
    }

    pub fn player_factory(id: PlayerId, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            breed: "Mixed".to_string(),
            status: "bench".to_string(),
            image_url: Some(format!("https://img.example/{}.png", id)),
            team: None,
        }
    }
}
