use async_trait::async_trait;
use structures::channel::Channel;
use structures::gateway::GatewayInfo;
use structures::message::{CreateMessage, EditMessage, Message};
use structures::snowflake::Snowflake;
use structures::user::User;
use crate::error::Result;

/// The REST endpoints of the Discord API
///
/// Each method is one request; errors are returned as the transport reported them.
#[async_trait]
pub trait Rest: Send + Sync {
    /// [Get Gateway](https://discord.com/developers/docs/topics/gateway#get-gateway)
    async fn get_gateway(&self) -> Result<GatewayInfo>;

    /// [Get Gateway Bot](https://discord.com/developers/docs/topics/gateway#get-gateway-bot),
    /// the gateway url plus the sharding recommendation
    async fn get_gateway_bot(&self) -> Result<GatewayInfo>;

    /// [Get User](https://discord.com/developers/docs/resources/user#get-user)
    async fn get_user(&self, id: &Snowflake) -> Result<User>;

    /// [Get Current User](https://discord.com/developers/docs/resources/user#get-current-user),
    /// the user owning the token
    async fn get_current_user(&self) -> Result<User> {
        self.get_user(&Snowflake::current_user()).await
    }

    /// [Get Channel](https://discord.com/developers/docs/resources/channel#get-channel)
    async fn get_channel(&self, id: &Snowflake) -> Result<Channel>;

    /// [Create Message](https://discord.com/developers/docs/resources/message#create-message)
    ///
    /// Every call posts a new message.
    async fn create_message(&self, channel_id: &Snowflake, message: CreateMessage) -> Result<Message>;

    /// [Edit Message](https://discord.com/developers/docs/resources/message#edit-message)
    async fn edit_message(&self, channel_id: &Snowflake, message_id: &Snowflake, edit: EditMessage) -> Result<Message>;

    /// [Delete Message](https://discord.com/developers/docs/resources/message#delete-message)
    async fn delete_message(&self, channel_id: &Snowflake, message_id: &Snowflake) -> Result<()>;
}
