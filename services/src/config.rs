use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Env {
    #[default]
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "prod")]
    Prod,
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

// The final, validated configuration struct.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    server_addr: String,
    port: u16,
    // Host (no scheme) whose http/https origins pass CORS.
    allowed_origin: String,
    // Upstream SWAPI root, without trailing slash.
    base_url: String,
}

// Environment variables as read, before defaults are applied.
#[derive(Deserialize)]
struct RawConfig {
    env: Option<Env>,
    server_addr: Option<String>,
    port: Option<u16>,
    allowed_origin: Option<String>,
    base_url: Option<String>,
}

impl Config {
    /// Local configuration pointing at `base_url`, allowing `localhost:3000`.
    ///
    /// Intended for tests; production code goes through [`Config::init`].
    pub fn new_for_test(base_url: impl Into<String>) -> Self {
        Self {
            env: Env::Local,
            server_addr: "127.0.0.1".to_string(),
            port: 8080,
            allowed_origin: "localhost:3000".to_string(),
            base_url: base_url.into(),
        }
    }

    pub fn environment(&self) -> &Env {
        &self.env
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_local(&self) -> bool {
        matches!(self.env, Env::Local)
    }

    /// Loads `../.env` when present, then reads the process environment.
    pub fn init() -> anyhow::Result<Self> {
        if let Err(err) = dotenvy::from_filename("../.env") {
            info!(".env file not found, relying on system environment variables ({err})");
        }
        info!("Loading configuration from environment variables");

        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            server_addr,
            port,
            allowed_origin,
            base_url,
        } = raw_config;

        let env = env.unwrap_or_default();

        let allowed_origin = match allowed_origin {
            Some(origin) if !origin.trim().is_empty() => origin.trim().to_string(),
            _ => anyhow::bail!("ALLOWED_ORIGIN is not set"),
        };

        let server_addr = match server_addr {
            Some(addr) => {
                info!("Using provided SERVER_ADDR: {}", addr);
                addr
            }
            None => {
                let default_addr = match env {
                    Env::Local => "127.0.0.1",
                    Env::Prod => "0.0.0.0",
                };
                info!(
                    "SERVER_ADDR not set, defaulting to {} for {} environment",
                    default_addr, env
                );
                default_addr.to_string()
            }
        };

        let port = port.unwrap_or_else(|| {
            info!("PORT not set, defaulting to 8080");
            8080
        });

        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            env,
            server_addr,
            port,
            allowed_origin,
            base_url,
        })
    }
}
