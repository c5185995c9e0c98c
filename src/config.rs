use serde::{Deserialize, Serialize};

/// Runtime configuration, sourced entirely from environment variables.
///
/// `PORT` selects the listening port; everything else has a fixed default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port (`PORT` environment variable)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory the browser UI is served from
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "./static".to_string()
}
