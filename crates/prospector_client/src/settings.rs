use std::time::Duration;

use client_logging::client_warn;
use url::Url;

/// Environment variable selecting the backend origin.
pub const BASE_URL_ENV: &str = "PROSPECTOR_BACKEND_URL";
/// Default backend origin when the environment variable is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Preview rows requested on every poll fetch.
pub const DEFAULT_PREVIEW_SIZE: u32 = 10;
/// Fixed delay between poll fetches for an active job.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    pub preview_size: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            poll_interval: DEFAULT_POLL_INTERVAL,
            preview_size: DEFAULT_PREVIEW_SIZE,
        }
    }
}

impl ClientSettings {
    /// Reads the backend origin from `PROSPECTOR_BACKEND_URL`, falling back
    /// to the local default when unset or unparseable.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(raw) = std::env::var(BASE_URL_ENV) {
            match Url::parse(&raw) {
                Ok(url) => settings.base_url = url,
                Err(err) => {
                    client_warn!("Ignoring invalid {BASE_URL_ENV}={raw}: {err}");
                }
            }
        }
        settings
    }
}
