use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::embed::Embed;
use crate::flags::Flags;
use crate::snowflake::Snowflake;
use crate::user::User;

/// A message sent in a channel
///
/// The id and the timestamps are assigned by Discord.
///
/// See the [documentation](https://discord.com/developers/docs/resources/message#message-object)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    /// Missing for messages outside of guilds, and in some REST responses
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    /// Webhook messages carry a fake author
    pub author: User,
    #[serde(default)]
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub edited_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tts: bool,
    #[serde(default)]
    pub mention_everyone: bool,
    #[serde(default)]
    pub mentions: Vec<User>,
    #[serde(default)]
    pub mention_roles: Vec<Snowflake>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    /// Either an integer or a string
    #[serde(default)]
    pub nonce: Option<serde_json::Value>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub webhook_id: Option<Snowflake>,
    #[serde(rename = "type", default)]
    pub kind: u8,
    #[serde(default)]
    pub flags: Option<Flags>,
}

impl Message {
    pub fn is_edited(&self) -> bool {
        self.edited_timestamp.is_some()
    }
}

/// The JSON payload of [Create Message](https://discord.com/developers/docs/resources/message#create-message)
///
/// `tts` is always sent; the other fields only when set.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
    pub tts: bool,
}

impl CreateMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: Embed) -> Self {
        self.embed = Some(embed);
        self
    }

    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }
}

/// The JSON payload of [Edit Message](https://discord.com/developers/docs/resources/message#edit-message)
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EditMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
}

impl EditMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: Embed) -> Self {
        self.embed = Some(embed);
        self
    }
}
