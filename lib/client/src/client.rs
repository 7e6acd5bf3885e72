use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
#[cfg(feature = "verbose")]
use tracing::trace;
use structures::channel::Channel;
use structures::gateway::GatewayInfo;
use structures::message::{CreateMessage, EditMessage, Message};
use structures::snowflake::Snowflake;
use structures::user::User;
use crate::config::ClientConfig;
use crate::error::{HttpError, Result};
use crate::http::{ReqwestTransport, Route, Transport};
use crate::rest::Rest;

/// The Discord Client
///
/// Implements [Rest] on top of any [Transport]. The default transport talks to Discord with `reqwest`.
pub struct Client<T = ReqwestTransport> {
    transport: T,
}

impl Client {
    /// Create a new client with the default settings
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(&ClientConfig::new(token))
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::from_transport(ReqwestTransport::new(config)?))
    }
}

impl<T: Transport> Client<T> {
    pub fn from_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send<R: DeserializeOwned>(&self, route: Route, body: Option<Value>) -> Result<R> {
        let bytes = self.transport.request(route, body).await?;

        #[cfg(feature = "verbose")]
        trace!(target: "iris::client", "Decoding {} byte(s)", bytes.len());

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_json<B: Serialize + Sync, R: DeserializeOwned>(&self, route: Route, body: &B) -> Result<R> {
        let body = serde_json::to_value(body)?;
        self.send(route, Some(body)).await
    }
}

/// A snowflake as a path segment
///
/// Only ASCII digits are accepted, anything else could escape its segment once the url is normalized.
fn segment(id: &Snowflake) -> Result<&str> {
    let id = id.as_str();
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HttpError::InvalidId(id.to_string()));
    }
    Ok(id)
}

/// Like [segment], but also accepts `@me`
fn user_segment(id: &Snowflake) -> Result<&str> {
    if *id == Snowflake::current_user() {
        return Ok(id.as_str());
    }
    segment(id)
}

#[async_trait]
impl<T: Transport> Rest for Client<T> {
    async fn get_gateway(&self) -> Result<GatewayInfo> {
        self.send(Route::get("gateway"), None).await
    }

    async fn get_gateway_bot(&self) -> Result<GatewayInfo> {
        self.send(Route::get("gateway/bot"), None).await
    }

    async fn get_user(&self, id: &Snowflake) -> Result<User> {
        let route = Route::get(format!("users/{}", user_segment(id)?));
        self.send(route, None).await
    }

    async fn get_channel(&self, id: &Snowflake) -> Result<Channel> {
        let route = Route::get(format!("channels/{}", segment(id)?));
        self.send(route, None).await
    }

    async fn create_message(&self, channel_id: &Snowflake, message: CreateMessage) -> Result<Message> {
        let route = Route::post(format!("channels/{}/messages", segment(channel_id)?));
        self.send_json(route, &message).await
    }

    async fn edit_message(&self, channel_id: &Snowflake, message_id: &Snowflake, edit: EditMessage) -> Result<Message> {
        let route = Route::patch(format!("channels/{}/messages/{}", segment(channel_id)?, segment(message_id)?));
        self.send_json(route, &edit).await
    }

    async fn delete_message(&self, channel_id: &Snowflake, message_id: &Snowflake) -> Result<()> {
        let route = Route::delete(format!("channels/{}/messages/{}", segment(channel_id)?, segment(message_id)?));
        // the body, usually empty, is not read
        self.transport.request(route, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_digits_only() {
        assert_eq!(segment(&Snowflake::from(41771983423143937u64)).unwrap(), "41771983423143937");
        for bad in ["", "..", "../..", "1/../../gateway", "1?x=2", "1#frag", "@me", " 1"] {
            assert!(matches!(segment(&Snowflake::from(bad)), Err(HttpError::InvalidId(_))), "{bad:?}");
        }
    }

    #[test]
    fn user_segment_accepts_me() {
        assert_eq!(user_segment(&Snowflake::current_user()).unwrap(), "@me");
        assert!(user_segment(&Snowflake::from("@me/..")).is_err());
    }
}
