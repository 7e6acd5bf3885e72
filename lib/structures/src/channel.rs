use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::snowflake::Snowflake;
use crate::user::User;

/// See the [documentation](https://discord.com/developers/docs/resources/channel#channel-object-channel-types)
pub mod channel_types {
    pub const GUILD_TEXT: u8 = 0;
    pub const DM: u8 = 1;
    pub const GUILD_VOICE: u8 = 2;
    pub const GROUP_DM: u8 = 3;
    pub const GUILD_CATEGORY: u8 = 4;
    pub const GUILD_ANNOUNCEMENT: u8 = 5;
    pub const PUBLIC_THREAD: u8 = 11;
    pub const PRIVATE_THREAD: u8 = 12;
    pub const GUILD_FORUM: u8 = 15;
}

/// A guild channel, a DM or a thread
///
/// See the [documentation](https://discord.com/developers/docs/resources/channel#channel-object)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    /// One of [channel_types]
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    /// Sorting position
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub nsfw: Option<bool>,
    /// Not guaranteed to point to an existing message
    #[serde(default)]
    pub last_message_id: Option<Snowflake>,
    /// Voice channels only
    #[serde(default)]
    pub bitrate: Option<u64>,
    #[serde(default)]
    pub user_limit: Option<u64>,
    /// Slowmode, in seconds
    #[serde(default)]
    pub rate_limit_per_user: Option<u64>,
    /// The recipients of a DM
    #[serde(default)]
    pub recipients: Vec<User>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner_id: Option<Snowflake>,
    #[serde(default)]
    pub application_id: Option<Snowflake>,
    /// The category of a guild channel, or the parent channel of a thread
    #[serde(default)]
    pub parent_id: Option<Snowflake>,
    #[serde(default)]
    pub last_pin_timestamp: Option<DateTime<Utc>>,
}

impl Channel {
    pub fn is_dm(&self) -> bool {
        matches!(self.kind, channel_types::DM | channel_types::GROUP_DM)
    }
}
