use chrono::Duration;
use serde::Deserialize;
use ustr::Ustr;

use crate::debounce::DEFAULT_DEBOUNCE_MS;

/// Where the tables fetch from and how long search input is debounced.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub debounce_ms: i64,
}

// Optional overrides read from the process environment (native only).
#[derive(Debug, Default, Deserialize)]
struct RawBusinessConfig {
    api_base_url: Option<String>,
    debounce_ms: Option<i64>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Defaults overridden by `API_BASE_URL` / `DEBOUNCE_MS` when set.
    pub fn from_env() -> Self {
        let raw: RawBusinessConfig = if cfg!(target_arch = "wasm32") {
            RawBusinessConfig::default()
        } else {
            serde_env::from_env().unwrap_or_else(|err| {
                log::warn!("Ignoring invalid environment overrides: {err}");
                RawBusinessConfig::default()
            })
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawBusinessConfig) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: raw.api_base_url.unwrap_or(defaults.api_base_url),
            debounce_ms: raw.debounce_ms.unwrap_or(defaults.debounce_ms).max(0),
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(format!("{}/api", self.api_base_url.trim_end_matches('/')).as_str())
        }
    }

    /// Endpoint for one remote collection, e.g. `.../api/people`.
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{resource}", self.api_url())
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::milliseconds(self.debounce_ms)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            // The wasm build is served by the same origin as the API.
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                "http://localhost:8080".to_string()
            },
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}
