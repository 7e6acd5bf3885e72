use serde::{Deserialize, Serialize};

/// Where to open the realtime gateway connection
///
/// Returned by both [Get Gateway](https://discord.com/developers/docs/topics/gateway#get-gateway)
/// and [Get Gateway Bot](https://discord.com/developers/docs/topics/gateway#get-gateway-bot).
/// Only the bot variant fills in the sharding fields.
///
/// Unlike the Get Gateway, the bot route should not be cached for extended periods of time
/// as the value is not guaranteed to be the same per-call, and changes as the bot
/// joins/leaves guilds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GatewayInfo {
    /// The URL that can be used to connect to the gateway
    pub url: String,
    /// The recommended number of shards to use when connecting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<u64>,
    /// Session start limits of the current user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_start_limit: Option<SessionStartLimit>,
}

/// Contains information about the session and the limits
///
/// See the [documentation](https://discord.com/developers/docs/topics/gateway#session-start-limit-object)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionStartLimit {
    /// The total number of session starts the current user is allowed
    pub total: u64,
    /// The remaining number of session starts the current user is allowed
    pub remaining: u64,
    /// The number of milliseconds after which the limit resets
    pub reset_after: u64,
    /// The number of identify-requests allowed per 5 seconds
    pub max_concurrency: u64,
}
