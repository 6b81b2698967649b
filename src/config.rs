//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

use anyhow::{bail, Context};

/// Which storage backend the process should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Process-local in-memory map
    Memory,
    /// Remote Redis cache
    Redis,
}

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected storage backend
    pub storage: StorageKind,
    /// Redis server address as host:port
    pub redis_host: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STORAGE` - Backend selector, `MEMORY` or `REDIS` (required)
    /// - `REDIS_HOST` - Redis address as host:port (default: 127.0.0.1:6379)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    ///
    /// An unset or unrecognized `STORAGE` selector is a startup failure;
    /// the server must not start with a guessed backend.
    pub fn from_env() -> anyhow::Result<Self> {
        let selector = env::var("STORAGE").context("STORAGE must be set to MEMORY or REDIS")?;
        let storage = match selector.to_ascii_uppercase().as_str() {
            "MEMORY" => StorageKind::Memory,
            "REDIS" => StorageKind::Redis,
            other => bail!("storage is not valid: {other:?}"),
        };

        Ok(Self {
            storage,
            redis_host: env::var("REDIS_HOST")
                .ok()
                .unwrap_or_else(|| "127.0.0.1:6379".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        })
    }

    /// Connection URL for the Redis client.
    pub fn redis_url(&self) -> String {
        format!("redis://{}", self.redis_host)
    }
}
