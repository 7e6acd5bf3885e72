use serde::{Deserialize, Serialize};

/// A raw bit set, as used for user and message flags
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[serde(transparent)]
pub struct Flags(u64);

impl Flags {
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Whether every bit of `other` is set
    pub const fn contains(&self, other: u64) -> bool {
        self.0 & other == other
    }
}

/// User flags
///
/// See the [documentation](https://discord.com/developers/docs/resources/user#user-object-user-flags)
pub mod user_flags {
    pub const STAFF: u64 = 1 << 0;
    pub const PARTNER: u64 = 1 << 1;
    pub const HYPESQUAD: u64 = 1 << 2;
    pub const VERIFIED_BOT: u64 = 1 << 16;
    pub const VERIFIED_DEVELOPER: u64 = 1 << 17;
    pub const ACTIVE_DEVELOPER: u64 = 1 << 22;
}

/// Message flags
///
/// See the [documentation](https://discord.com/developers/docs/resources/message#message-object-message-flags)
pub mod message_flags {
    pub const CROSSPOSTED: u64 = 1 << 0;
    pub const SUPPRESS_EMBEDS: u64 = 1 << 2;
    pub const EPHEMERAL: u64 = 1 << 6;
    pub const SUPPRESS_NOTIFICATIONS: u64 = 1 << 12;
}
