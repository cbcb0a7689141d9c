use std::env;

use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub static_assets_path: String,
}

impl AppConfig {
    /// Environment variables:
    /// - STATIC_ASSETS_PATH: Directory holding the browser client assets
    ///   (default: "./presentation/rest-api/static")
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            static_assets_path: env::var("STATIC_ASSETS_PATH")
                .unwrap_or_else(|_| "./presentation/rest-api/static".to_string()),
        }
    }
}
