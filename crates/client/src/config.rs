use std::env;

/// Client configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let base_url =
            env::var("DISPENSARY_API_URL").unwrap_or("http://localhost:8080".to_string());

        Self { base_url }
    }
}
