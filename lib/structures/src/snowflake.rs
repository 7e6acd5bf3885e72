use std::fmt;
use serde::{Deserialize, Deserializer, Serialize};

/// A Discord ID
///
/// Discord sends ids as strings, but some older payloads use plain numbers; both are accepted.
#[derive(Serialize, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Snowflake(String);

impl Snowflake {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `@me` identifier, resolved by Discord to the user owning the token
    pub fn current_user() -> Self {
        Self("@me".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Snowflake {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Snowflake {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}
