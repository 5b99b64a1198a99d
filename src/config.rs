use anyhow::{anyhow, Result};
use std::env;

/// Default base URL of the remote world-time API.
pub const DEFAULT_TIME_API_BASE_URL: &str = "https://worldtimeapi.org/api/timezone";

#[derive(Debug, Clone)]
pub struct Config {
    pub time_api_base_url: String,
    pub fetch_timeout_secs: u64,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let time_api_base_url = env::var("TIME_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TIME_API_BASE_URL.to_string());
        let time_api_base_url = if time_api_base_url.trim().is_empty() {
            DEFAULT_TIME_API_BASE_URL.to_string()
        } else {
            // A trailing slash would produce double slashes in zone URLs
            time_api_base_url.trim().trim_end_matches('/').to_string()
        };

        let timeout_str = env::var("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string());
        let fetch_timeout_secs: u64 = timeout_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid FETCH_TIMEOUT_SECS"))?;

        if fetch_timeout_secs == 0 {
            return Err(anyhow!("FETCH_TIMEOUT_SECS must be at least 1"));
        }

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            time_api_base_url,
            fetch_timeout_secs,
            http_port,
        })
    }
}
