use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use client::structures::message::{CreateMessage, EditMessage};
use client::structures::snowflake::Snowflake;
use client::{Client, HttpError, Rest, Result, Route, Transport};

/// Answers every request with the same canned outcome and remembers what it was asked
struct RecordingTransport {
    calls: Mutex<Vec<(Route, Option<Value>)>>,
    answer: fn() -> Result<Vec<u8>>,
}

impl RecordingTransport {
    fn new(answer: fn() -> Result<Vec<u8>>) -> Self {
        Self { calls: Mutex::new(Vec::new()), answer }
    }

    fn calls(&self) -> Vec<(Route, Option<Value>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn request(&self, route: Route, body: Option<Value>) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push((route, body));
        (self.answer)()
    }
}

fn me() -> Result<Vec<u8>> {
    Ok(br#"{ "id": "1", "username": "lana", "discriminator": "0" }"#.to_vec())
}

fn server_error() -> Result<Vec<u8>> {
    Err(HttpError::Api { status: StatusCode::INTERNAL_SERVER_ERROR, code: Some(0), message: "500: Internal Server Error".into() })
}

fn garbage() -> Result<Vec<u8>> {
    Ok(b"\x00\x01 definitely not json".to_vec())
}

#[tokio::test]
async fn current_user_is_get_user_at_me() {
    let client = Client::from_transport(RecordingTransport::new(me));

    let current = client.get_current_user().await.unwrap();
    let explicit = client.get_user(&Snowflake::from("@me")).await.unwrap();

    assert_eq!(current, explicit);
    let calls = client.transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(calls[0].0.method, Method::GET);
    assert_eq!(calls[0].0.path, "users/@me");
    assert_eq!(calls[0].1, None);
}

#[tokio::test]
async fn only_writes_carry_a_body() {
    let client = Client::from_transport(RecordingTransport::new(server_error));
    let channel = Snowflake::from(10u64);

    let _ = client.get_channel(&channel).await;
    let _ = client.create_message(&channel, CreateMessage::new().content("hi")).await;
    let _ = client.delete_message(&channel, &Snowflake::from(11u64)).await;

    let calls = client.transport().calls();
    assert_eq!(calls[0].0, Route::get("channels/10"));
    assert_eq!(calls[0].1, None);
    assert_eq!(calls[1].0, Route::post("channels/10/messages"));
    assert_eq!(calls[1].1, Some(json!({ "content": "hi", "tts": false })));
    assert_eq!(calls[2].0, Route::delete("channels/10/messages/11"));
    assert_eq!(calls[2].1, None);
}

#[tokio::test]
async fn gateway_routes() {
    let client = Client::from_transport(RecordingTransport::new(server_error));

    let _ = client.get_gateway().await;
    let _ = client.get_gateway_bot().await;

    let calls = client.transport().calls();
    assert_eq!(calls[0], (Route::get("gateway"), None));
    assert_eq!(calls[1], (Route::get("gateway/bot"), None));
}

#[tokio::test]
async fn transport_errors_come_back_untouched() {
    let client = Client::from_transport(RecordingTransport::new(server_error));
    let channel = Snowflake::from(1u64);
    let message = Snowflake::from(2u64);

    let errors = [
        client.get_gateway().await.unwrap_err(),
        client.get_gateway_bot().await.unwrap_err(),
        client.get_user(&Snowflake::from(3u64)).await.unwrap_err(),
        client.get_current_user().await.unwrap_err(),
        client.get_channel(&channel).await.unwrap_err(),
        client.create_message(&channel, CreateMessage::new().content("hi")).await.unwrap_err(),
        client.edit_message(&channel, &message, EditMessage::new().content("edited")).await.unwrap_err(),
        client.delete_message(&channel, &message).await.unwrap_err(),
    ];

    for err in errors {
        match err {
            HttpError::Api { status, code, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(code, Some(0));
                assert_eq!(message, "500: Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(client.transport().calls().len(), 8);
}

#[tokio::test]
async fn invalid_ids_never_reach_the_transport() {
    let client = Client::from_transport(RecordingTransport::new(me));

    for id in ["..", "../..", "1/../../gateway", "1#x", ""] {
        let id = Snowflake::from(id);
        assert!(matches!(client.get_channel(&id).await, Err(HttpError::InvalidId(_))));
        assert!(matches!(client.delete_message(&Snowflake::from(10u64), &id).await, Err(HttpError::InvalidId(_))));
    }
    assert!(matches!(client.get_user(&Snowflake::from("@me/..")).await, Err(HttpError::InvalidId(_))));

    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn delete_does_not_parse_the_body() {
    let client = Client::from_transport(RecordingTransport::new(garbage));

    client.delete_message(&Snowflake::from(1u64), &Snowflake::from(2u64)).await.unwrap();
    assert!(matches!(client.get_user(&Snowflake::from(1u64)).await, Err(HttpError::Json(_))));
}
