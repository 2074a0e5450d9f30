use std::env;
use std::time::Duration;

use posty_core::server::default_config::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT,
    DEFAULT_SERVER_BACKEND_PROTOCOL, generation_latency,
};

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub host: String,
    pub port: String,
    pub protocol: String,
    pub database_url: String,
    pub generation_latency: Duration,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        BackendConfig {
            host: env::var("SERVER_BACKEND_HOST")
                .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_HOST)),
            port: env::var("SERVER_BACKEND_PORT")
                .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PORT)),
            protocol: env::var("SERVER_BACKEND_PROTOCOL")
                .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PROTOCOL)),
            database_url: env::var("DATABASE_URL").unwrap_or(String::from(DEFAULT_DATABASE_URL)),
            generation_latency: generation_latency(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
