use reqwest::Client;
use serde::de::DeserializeOwned;

use puppybowl_app::{config::Config, repository::RosterApi};
use puppybowl_types::{
    api::{ApiEnvelope, ApiItemResponse, ApiListResponse},
    errors::{ApiError, ApplicationError},
    player::{NewPlayer, Player, PlayerId},
};

/// [`RosterApi`] over the Puppy Bowl HTTP+JSON API.
///
/// No timeout and no retries: a stalled request simply never resolves.
#[derive(Debug, Clone)]
pub struct HttpRosterApi {
    client: Client,
    api_url: String,
    placeholder_image_url: String,
}

impl HttpRosterApi {
    pub fn new(api_url: impl Into<String>, placeholder_image_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            placeholder_image_url: placeholder_image_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url(), config.placeholder_image_url.clone())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn players_url(&self) -> String {
        format!("{}/players", self.api_url)
    }

    fn player_url(&self, id: PlayerId) -> String {
        format!("{}/players/{}", self.api_url, id)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: String,
        operation: &'static str,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(operation, e))?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            operation,
            reason: e.to_string(),
        })
    }
}

fn transport_error(operation: &'static str, e: reqwest::Error) -> ApiError {
    ApiError::Transport {
        operation,
        reason: e.to_string(),
    }
}

#[async_trait::async_trait]
impl RosterApi for HttpRosterApi {
    async fn list_players(&self) -> Result<Vec<Player>, ApplicationError> {
        let operation = "list players";
        let envelope: ApiListResponse = self.fetch(self.players_url(), operation).await?;
        Ok(envelope.into_data(operation)?.players)
    }

    async fn get_player(&self, id: PlayerId) -> Result<Player, ApplicationError> {
        let operation = "get player";
        let envelope: ApiItemResponse = self.fetch(self.player_url(id), operation).await?;
        Ok(envelope.into_data(operation)?.player)
    }

    async fn delete_player(&self, id: PlayerId) -> Result<(), ApplicationError> {
        let url = self.player_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport_error("delete player", e))?;

        tracing::debug!("DELETE {} answered {}", url, response.status());
        Ok(())
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<(), ApplicationError> {
        let url = self.players_url();
        let body = player
            .clone()
            .with_default_image(&self.placeholder_image_url);

        tracing::debug!("POST {} ({})", url, body.name);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("create player", e))?;

        tracing::debug!("POST {} answered {}", url, response.status());
        Ok(())
    }
}
