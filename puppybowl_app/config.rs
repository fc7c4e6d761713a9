use dotenvy::dotenv;
use std::env;

use puppybowl_types::player::PLACEHOLDER_IMAGE_URL;

pub const DEFAULT_API_BASE: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "/2508-ANGEL";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub cohort: String,
    pub placeholder_image_url: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        let api_base = match env::var("PUPPYBOWL_API_BASE") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => defaults.api_base,
        };

        let cohort = match env::var("PUPPYBOWL_COHORT") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => defaults.cohort,
        };

        let placeholder_image_url = match env::var("PUPPYBOWL_PLACEHOLDER_IMAGE") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => defaults.placeholder_image_url,
        };

        let port = match env::var("PUPPYBOWL_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(DEFAULT_PORT),
            Err(_) => DEFAULT_PORT,
        };

        Self {
            api_base,
            cohort,
            placeholder_image_url,
            port,
        }
    }

    /// Base URL of the cohort's API, e.g. `https://host/api/2508-ANGEL`.
    pub fn api_url(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        let cohort = self.cohort.trim_matches('/');
        format!("{}/{}", base, cohort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        let config = Config::default();
        assert_eq!(
            config.api_url(),
            "https://fsa-puppy-bowl.herokuapp.com/api/2508-ANGEL"
        );
    }

    #[test]
    fn test_api_url_normalizes_slashes() {
        let config = Config {
            api_base: "http://localhost:9000/api/".to_string(),
            cohort: "cohort-1".to_string(),
            ..Config::default()
        };
        assert_eq!(config.api_url(), "http://localhost:9000/api/cohort-1");
    }
}
