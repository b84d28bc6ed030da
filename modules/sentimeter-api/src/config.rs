use std::env;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Serve canned results for the demo override phrases.
    pub canned_responses: bool,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if a value is malformed.
    pub fn from_env() -> Self {
        Self {
            host: env::var("SENTIMETER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SENTIMETER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SENTIMETER_PORT must be a number"),
            canned_responses: env::var("SENTIMETER_CANNED_RESPONSES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
