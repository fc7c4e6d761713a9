use puppybowl_types::{
    errors::ApplicationError,
    player::{NewPlayer, Player, PlayerId},
};

/// Remote operations on the cohort's roster.
#[async_trait::async_trait]
pub trait RosterApi: Send + Sync {
    /// Returns every player, in the order the server sent them.
    async fn list_players(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Returns a player by id.
    async fn get_player(&self, id: PlayerId) -> Result<Player, ApplicationError>;

    /// Deletes a player. Succeeds whenever the server answered at all.
    async fn delete_player(&self, id: PlayerId) -> Result<(), ApplicationError>;

    /// Creates a player. The response body is not read.
    async fn create_player(&self, player: &NewPlayer) -> Result<(), ApplicationError>;
}
