//! Response envelopes of the Puppy Bowl API.
//!
//! Every read endpoint wraps its payload as `{ success, error, data }`. The
//! payload is validated here, at the boundary, so views only ever see typed
//! [`Player`] records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::ApiError, player::Player};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerList {
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerItem {
    pub player: Player,
}

/// `GET /players` response.
pub type ApiListResponse = ApiEnvelope<PlayerList>;

/// `GET /players/{id}` response.
pub type ApiItemResponse = ApiEnvelope<PlayerItem>;

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            error: Some(serde_json::json!({ "name": "Error", "message": message })),
            data: None,
        }
    }

    /// Unwraps the payload, turning an unsuccessful or empty envelope into an error.
    pub fn into_data(self, operation: &'static str) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Remote {
                operation,
                message: describe_error(self.error.as_ref()),
            });
        }

        self.data.ok_or_else(|| ApiError::Decode {
            operation,
            reason: "response has no `data` payload".to_string(),
        })
    }
}

fn describe_error(error: Option<&Value>) -> String {
    match error {
        Some(Value::String(message)) => message.clone(),
        Some(value) => value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        None => "unsuccessful response".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_keeps_server_order() {
        let raw = json!({
            "success": true,
            "error": null,
            "data": { "players": [
                { "id": 2, "name": "B", "breed": "x", "status": "bench", "imageUrl": "" },
                { "id": 1, "name": "A", "breed": "y", "status": "field", "imageUrl": "" }
            ]}
        });

        let response: ApiListResponse = serde_json::from_value(raw).unwrap();
        let players = response.into_data("list players").unwrap().players;
        let ids: Vec<_> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_item_response_without_success_flag() {
        let raw = json!({
            "data": { "player": { "id": 1, "name": "Fido", "breed": "Pug", "status": "field" } }
        });

        let response: ApiItemResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.into_data("get player").unwrap().player.name, "Fido");
    }

    #[test]
    fn test_unsuccessful_envelope_reports_remote_message() {
        let raw = json!({
            "success": false,
            "error": { "name": "NotFound", "message": "Player not found" },
            "data": null
        });

        let response: ApiItemResponse = serde_json::from_value(raw).unwrap();
        match response.into_data("get player") {
            Err(ApiError::Remote { message, .. }) => assert_eq!(message, "Player not found"),
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_data_is_a_decode_error() {
        let response: ApiListResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(matches!(
            response.into_data("list players"),
            Err(ApiError::Decode { .. })
        ));
    }

    fn decode_any<T: serde::de::DeserializeOwned>(raw: Value) -> ApiEnvelope<T> {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_envelope_decodes_payloads_without_default() {
        let envelope: ApiEnvelope<PlayerItem> = decode_any(json!({
            "data": { "player": { "id": 3, "name": "Rex", "breed": "Lab", "status": "bench" } }
        }));
        assert_eq!(envelope.into_data("get player").unwrap().player.id, 3);

        let empty: ApiEnvelope<PlayerItem> = decode_any(json!({}));
        assert!(empty.data.is_none());
    }
}
