#[cfg(test)]
pub mod tests {
    use reqwest::{Client, redirect::Policy};
    use std::sync::Arc;
    use tokio::net::TcpListener;

    use puppybowl_api::{HttpRosterApi, test_utils::tests::FakePuppyBowl};
    use puppybowl_app::{RosterApp, config::Config};
    use puppybowl_types::player::Player;
    use puppybowl_web::{AppState, WebRouter};

    pub use puppybowl_api::test_utils::tests::puppy;

    pub struct TestApp {
        pub fake: FakePuppyBowl,
        pub app: Arc<RosterApp>,
        pub base_url: String,
    }

    impl TestApp {
        pub fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Boots the fake remote API and the page host, the way `main` does.
    pub async fn setup_web_app(players: Vec<Player>) -> TestApp {
        let fake = FakePuppyBowl::spawn(players).await;
        let config = Config {
            api_base: fake.api_base().to_string(),
            cohort: puppybowl_api::test_utils::tests::FAKE_COHORT.to_string(),
            ..Config::default()
        };

        let app = Arc::new(RosterApp::new(Arc::new(HttpRosterApi::from_config(&config))));
        app.bootstrap().await;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = AppState::new(app.clone());
        tokio::spawn(async move {
            WebRouter::serve_on(state, listener).await.unwrap();
        });

        TestApp {
            fake,
            app,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn setup_http_client() -> Client {
        Client::builder().redirect(Policy::none()).build().unwrap()
    }
}
