#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use axum::{
        Json, Router,
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use serde_json::json;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    };

    use puppybowl_types::{
        api::{ApiItemResponse, ApiListResponse, PlayerItem, PlayerList},
        player::{NewPlayer, Player, PlayerId, Team},
    };

    pub const FAKE_COHORT: &str = "/test-cohort";

    #[derive(Clone, Default)]
    struct FakeState {
        players: Arc<Mutex<Vec<Player>>>,
        requests: Arc<Mutex<Vec<String>>>,
        broken: Arc<AtomicBool>,
        failing_deletes: Arc<AtomicBool>,
    }

    impl FakeState {
        fn log(&self, request: String) {
            self.requests.lock().unwrap().push(request);
        }
    }

    /// In-process stand-in for the Puppy Bowl API, served on a random port.
    pub struct FakePuppyBowl {
        base_url: String,
        state: FakeState,
    }

    impl FakePuppyBowl {
        pub async fn spawn(players: Vec<Player>) -> Self {
            let state = FakeState::default();
            *state.players.lock().unwrap() = players;

            let router = Router::new()
                .route(
                    &format!("/api{}/players", FAKE_COHORT),
                    get(list_players).post(create_player),
                )
                .route(
                    &format!("/api{}/players/{{id}}", FAKE_COHORT),
                    get(get_player).delete(delete_player),
                )
                .with_state(state.clone());

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router).await.unwrap();
            });

            Self {
                base_url: format!("http://{}/api", addr),
                state,
            }
        }

        /// Value for `Config::api_base`.
        pub fn api_base(&self) -> &str {
            &self.base_url
        }

        /// Full cohort URL, as passed to `HttpRosterApi::new`.
        pub fn api_url(&self) -> String {
            format!("{}{}", self.base_url, FAKE_COHORT)
        }

        pub fn players(&self) -> Vec<Player> {
            self.state.players.lock().unwrap().clone()
        }

        /// Requests received so far, as `"METHOD /players[/id]"`.
        pub fn requests(&self) -> Vec<String> {
            self.state.requests.lock().unwrap().clone()
        }

        pub fn count_requests(&self, request: &str) -> usize {
            self.requests().iter().filter(|r| *r == request).count()
        }

        /// Makes read endpoints answer with an HTML error page.
        pub fn set_broken(&self, broken: bool) {
            self.state.broken.store(broken, Ordering::SeqCst);
        }

        /// Makes `DELETE` answer 500 without removing anything.
        pub fn set_failing_deletes(&self, failing: bool) {
            self.state.failing_deletes.store(failing, Ordering::SeqCst);
        }
    }

    fn broken_page() -> Response {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "<html><body>Application Error</body></html>",
        )
            .into_response()
    }

    async fn list_players(State(state): State<FakeState>) -> Response {
        state.log("GET /players".to_string());
        if state.broken.load(Ordering::SeqCst) {
            return broken_page();
        }
        let players = state.players.lock().unwrap().clone();
        Json(ApiListResponse::ok(PlayerList { players })).into_response()
    }

    async fn get_player(State(state): State<FakeState>, Path(id): Path<PlayerId>) -> Response {
        state.log(format!("GET /players/{}", id));
        if state.broken.load(Ordering::SeqCst) {
            return broken_page();
        }
        let player = state
            .players
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned();

        match player {
            Some(player) => Json(ApiItemResponse::ok(PlayerItem { player })).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(ApiItemResponse::failed("Player not found")),
            )
                .into_response(),
        }
    }

    async fn delete_player(State(state): State<FakeState>, Path(id): Path<PlayerId>) -> Response {
        state.log(format!("DELETE /players/{}", id));
        if state.failing_deletes.load(Ordering::SeqCst) {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": { "message": "boom" }, "data": null })),
            )
                .into_response();
        }
        state.players.lock().unwrap().retain(|p| p.id != id);
        Json(json!({ "success": true, "error": null, "data": null })).into_response()
    }

    async fn create_player(State(state): State<FakeState>, Json(new_player): Json<NewPlayer>) -> Response {
        state.log("POST /players".to_string());
        let mut players = state.players.lock().unwrap();
        let id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let player = Player {
            id,
            name: new_player.name,
            breed: new_player.breed,
            status: new_player.status,
            image_url: Some(new_player.image_url),
            team: None,
        };
        players.push(player.clone());
        (
            StatusCode::OK,
            Json(json!({ "success": true, "error": null, "data": { "newPlayer": player } })),
        )
            .into_response()
    }

    pub fn puppy(id: PlayerId, name: &str, breed: &str, team: Option<&str>) -> Player {
        Player {
            id,
            name: name.to_string(),
            breed: breed.to_string(),
            status: "field".to_string(),
            image_url: Some(format!("https://img.example/{}.png", name.to_lowercase())),
            team: team.map(|name| Team {
                id: Some(1),
                name: name.to_string(),
            }),
        }
    }
}
