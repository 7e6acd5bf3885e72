use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::error::{HttpError, Result};

/// Settings of the HTTP client
///
/// The token is never serialized nor printed.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bot token from the Discord Developer Portal, with or without the `Bot ` prefix
    #[serde(skip_serializing)]
    pub token: String,
    /// Root of the REST API, default to [API_URL](crate::API_URL)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout, in seconds when (de)serialized
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,
    /// Discord requires `DiscordBot ($url, $versionNumber)`
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_api_url() -> String {
    crate::API_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("DiscordBot ({}, {})", env!("CARGO_PKG_REPOSITORY"), env!("CARGO_PKG_VERSION"))
}

mod duration_secs {
    use std::time::Duration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(deserializer)?))
    }
}

pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
pub const API_URL_VAR: &str = "DISCORD_API_URL";
pub const TIMEOUT_VAR: &str = "DISCORD_TIMEOUT_SECS";
pub const USER_AGENT_VAR: &str = "DISCORD_USER_AGENT";

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: default_api_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Read the configuration from `DISCORD_TOKEN`, `DISCORD_API_URL`,
    /// `DISCORD_TIMEOUT_SECS` and `DISCORD_USER_AGENT`. Only the token is required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(TOKEN_VAR)
            .ok_or_else(|| HttpError::Config(format!("{TOKEN_VAR} is not set")))?;

        let mut config = Self::new(token);
        if let Some(url) = lookup(API_URL_VAR) {
            config.api_url = url;
        }
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs = secs.trim().parse::<u64>()
                .map_err(|e| HttpError::Config(format!("{TIMEOUT_VAR}: {e}")))?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = lookup(USER_AGENT_VAR) {
            config.user_agent = agent;
        }

        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
