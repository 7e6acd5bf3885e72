use serde::{Deserialize, Serialize};
use crate::flags::Flags;
use crate::snowflake::Snowflake;

/// A Discord account, human or bot
///
/// See the [documentation](https://discord.com/developers/docs/resources/user#user-object)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    /// Legacy `#0000` tag, `"0"` for migrated accounts
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub global_name: Option<String>,
    /// Avatar hash
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: Option<bool>,
    #[serde(default)]
    pub system: Option<bool>,
    #[serde(default)]
    pub mfa_enabled: Option<bool>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub accent_color: Option<i64>,
    #[serde(default)]
    pub locale: Option<String>,
    /// Only sent with the `email` OAuth2 scope
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub flags: Option<Flags>,
    /// 0: none, 1: Nitro Classic, 2: Nitro, 3: Nitro Basic
    #[serde(default)]
    pub premium_type: Option<i64>,
    #[serde(default)]
    pub public_flags: Option<Flags>,
}

impl User {
    pub fn is_bot(&self) -> bool {
        self.bot.unwrap_or(false)
    }

    /// The global display name if set, the username otherwise
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}
